//! Whitted Core - scene description types for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Material`, `PointLight`, `Camera` and the
//!   index-based primitive descriptions (`SphereObject`, `TriangleObject`,
//!   `MeshObject`)
//! - **Validation**: index and constant checks performed before rendering
//! - **JSON loading**: serde-based scene files
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene_json;
//!
//! let scene = load_scene_json("scene.json")?;
//! println!("Loaded {} cameras, {} lights",
//!     scene.cameras.len(),
//!     scene.point_lights.len());
//! ```

pub mod error;
pub mod loader;
pub mod scene;
mod validate;

// Re-export commonly used types
pub use error::SceneError;
pub use loader::{load_scene_json, load_scene_json_from_string};
pub use scene::{
    Camera, Material, MeshObject, NearPlane, PointLight, RenderSettings, Scene, SphereObject,
    TriangleObject,
};
