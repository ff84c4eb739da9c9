//! Destinations for finished images.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::RenderError;
use crate::renderer::ImageBuffer;

/// Receives each camera's finished image under its output identifier.
pub trait ImageSink {
    fn save(&mut self, name: &str, image: &ImageBuffer) -> Result<(), RenderError>;
}

/// Writes images into a directory, one file per camera.
///
/// The file format follows the extension of the image name (`.ppm`, `.png`, ...).
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSink for FileSink {
    fn save(&mut self, name: &str, image: &ImageBuffer) -> Result<(), RenderError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        image.to_rgb_image().save(&path)?;
        log::info!("Saved {}", path.display());
        Ok(())
    }
}

/// Keeps images in memory, keyed by output identifier.
#[derive(Default)]
pub struct MemorySink {
    pub images: BTreeMap<String, ImageBuffer>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for MemorySink {
    fn save(&mut self, name: &str, image: &ImageBuffer) -> Result<(), RenderError> {
        self.images.insert(name.to_string(), image.clone());
        Ok(())
    }
}
