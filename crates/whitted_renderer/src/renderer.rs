//! Render driver.
//!
//! Renders every camera of a scene: one primary ray per pixel center,
//! shaded with the scene's recursion depth, rounded and clamped to 8-bit
//! channels. Buckets are rendered in parallel with rayon by default; the
//! result is identical to the serial path.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;
use whitted_core::Scene;
use whitted_math::{Color, Interval};

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::PinholeCamera;
use crate::error::RenderError;
use crate::shading::Tracer;
use crate::sink::{ImageSink, MemorySink};
use crate::world::World;

/// 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// Rendered images keyed by output identifier.
pub type RenderedImages = BTreeMap<String, ImageBuffer>;

/// Render driver configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of square render buckets
    pub bucket_size: u32,
    /// Render buckets on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

/// Displayable channel range.
const CHANNEL_RANGE: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// Convert a color to 8-bit RGB, rounding to nearest and clamping to [0, 255].
pub fn color_to_rgb(color: Color) -> Rgb {
    // NaN channels end up as 0 through the saturating cast
    let channel = |c: f32| CHANNEL_RANGE.clamp(c.round()) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Image buffer holding 8-bit RGB pixels, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        self.pixels[(y * self.width + x) as usize] = rgb;
    }

    /// Copy a rendered bucket into its region of the image.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, line) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = ((bucket.y + row as u32) * self.width + bucket.x) as usize;
            self.pixels[start..start + line.len()].copy_from_slice(line);
        }
    }

    /// Convert to packed RGB bytes, rows top to bottom.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Convert to an `image` crate buffer for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }
}

/// Render one camera's view of a world.
pub fn render_camera(world: &World, camera: &PinholeCamera, config: &RenderConfig) -> ImageBuffer {
    let tracer = Tracer::new(world);
    let max_depth = world.settings().max_recursion_depth;
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);

    let render_one = |bucket: &Bucket| {
        BucketResult::new(*bucket, render_bucket(bucket, camera, &tracer, max_depth))
    };
    let results: Vec<BucketResult> = if config.parallel {
        buckets.par_iter().map(render_one).collect()
    } else {
        buckets.iter().map(render_one).collect()
    };

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.write_bucket(result);
    }
    image
}

/// Render every camera and hand each image to `sink`.
///
/// The scene is validated and resolved before any pixel is traced.
pub fn render_to_sink(
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut dyn ImageSink,
) -> Result<(), RenderError> {
    let world = World::from_scene(scene)?;
    let cameras = scene
        .cameras
        .iter()
        .map(PinholeCamera::new)
        .collect::<Result<Vec<_>, _>>()?;

    for camera in &cameras {
        log::info!(
            "Rendering {} ({}x{}, depth {})",
            camera.image_name,
            camera.image_width,
            camera.image_height,
            world.settings().max_recursion_depth
        );

        let start = Instant::now();
        let image = render_camera(&world, camera, config);
        log::info!("Rendered {} in {:?}", camera.image_name, start.elapsed());

        sink.save(&camera.image_name, &image)?;
    }

    Ok(())
}

/// Render every camera of a scene into memory.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<RenderedImages, RenderError> {
    let mut sink = MemorySink::new();
    render_to_sink(scene, config, &mut sink)?;
    Ok(sink.images)
}
