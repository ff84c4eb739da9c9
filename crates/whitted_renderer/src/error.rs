//! Errors surfaced by the render entry points.

use thiserror::Error;
use whitted_core::SceneError;

/// Errors that can occur while rendering or saving images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
