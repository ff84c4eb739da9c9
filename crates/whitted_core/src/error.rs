//! Errors raised while loading or validating a scene.

use thiserror::Error;

/// Errors that make a scene unusable for rendering.
///
/// All of these are detected before the first pixel is traced.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{object} references material {index}, but the scene has {count} materials")]
    InvalidMaterial {
        object: String,
        index: usize,
        count: usize,
    },

    #[error("{object} references vertex {index}, but the scene has {count} vertices")]
    InvalidVertex {
        object: String,
        index: usize,
        count: usize,
    },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidEpsilon { name: &'static str, value: f32 },

    #[error("material {index} has non-positive Phong exponent {value}")]
    InvalidPhongExponent { index: usize, value: f32 },

    #[error("sphere {id} has invalid radius {radius}")]
    InvalidRadius { id: u32, radius: f32 },

    #[error("camera {id}: {reason}")]
    InvalidCamera { id: u32, reason: String },

    #[error("image name {0:?} is used by more than one camera")]
    DuplicateImageName(String),
}
