//! JSON scene loading.
//!
//! Scene files are the serde representation of [`Scene`]: vectors are
//! `[x, y, z]` arrays, indices are 1-based and every optional section
//! falls back to its default. Loaded scenes are validated before they
//! are returned.

use std::path::Path;

use crate::error::SceneError;
use crate::scene::Scene;

/// Load and validate a scene from a JSON file.
pub fn load_scene_json(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    load_scene_json_from_string(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_json_from_string(contents: &str) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_str(contents)?;
    scene.validate()?;

    log::info!(
        "Loaded scene: {} vertices, {} materials, {} primitives ({} triangles), {} lights, {} cameras",
        scene.vertices.len(),
        scene.materials.len(),
        scene.primitive_count(),
        scene.triangle_count(),
        scene.point_lights.len(),
        scene.cameras.len()
    );

    Ok(scene)
}
