//! Whitted Renderer - recursive ray tracing with Blinn-Phong shading.
//!
//! Traces one primary ray per pixel, shades hits with ambient, diffuse and
//! specular terms from point lights (with shadow rays), and follows mirror
//! reflections up to the scene's recursion depth.

mod bucket;
mod camera;
mod error;
mod hittable;
mod mesh;
mod renderer;
mod shading;
mod sink;
mod sphere;
mod triangle;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::PinholeCamera;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use mesh::Mesh;
pub use renderer::{
    color_to_rgb, render, render_camera, render_to_sink, ImageBuffer, RenderConfig, RenderedImages,
    Rgb,
};
pub use shading::Tracer;
pub use sink::{FileSink, ImageSink, MemorySink};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use world::World;

/// Re-export common math types from whitted_math
pub use whitted_math::{Color, Interval, Ray, Vec3};
