//! Scene description types.
//!
//! These mirror the structure of a scene file: shared vertex storage,
//! materials and primitives that refer to each other by 1-based index,
//! lights, cameras and the numeric constants of the tracer. Nothing here
//! knows how to intersect or shade; the renderer resolves the indices
//! into concrete geometry.

use serde::{Deserialize, Serialize};
use whitted_math::{Color, Vec3};

/// Numeric constants that control tracing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Number of mirror bounces allowed for a primary ray
    pub max_recursion_depth: u32,

    /// Offset applied to shadow and reflection ray origins
    pub shadow_ray_epsilon: f32,

    /// Smallest ray parameter accepted as a hit
    pub intersection_test_epsilon: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_recursion_depth: 1,
            shadow_ray_epsilon: 0.001,
            intersection_test_epsilon: 1e-6,
        }
    }
}

/// A Blinn-Phong material with a mirror term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: u32,

    /// Reflectance for the scene's ambient light
    pub ambient: Color,

    /// Lambertian reflectance
    pub diffuse: Color,

    /// Specular highlight reflectance
    pub specular: Color,

    /// Perfect mirror reflectance (zero disables reflection rays)
    #[serde(default)]
    pub mirror: Color,

    /// Specular falloff exponent (must be positive)
    #[serde(default = "default_phong_exponent")]
    pub phong_exponent: f32,
}

fn default_phong_exponent() -> f32 {
    1.0
}

impl Default for Material {
    fn default() -> Self {
        Self {
            id: 0,
            ambient: Color::ZERO,
            diffuse: Color::splat(0.5),
            specular: Color::ZERO,
            mirror: Color::ZERO,
            phong_exponent: default_phong_exponent(),
        }
    }
}

impl Material {
    /// Create a purely diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// Check if this material spawns reflection rays.
    pub fn is_mirror(&self) -> bool {
        self.mirror != Color::ZERO
    }
}

/// An isotropic point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    #[serde(default)]
    pub id: u32,
    pub position: Vec3,
    /// Radiant intensity per color channel
    pub intensity: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            id: 0,
            position,
            intensity,
        }
    }

    /// Light arriving at `point`, attenuated by the inverse square of the distance.
    pub fn irradiance_at(&self, point: Vec3) -> Color {
        let distance_squared = self.position.distance_squared(point);
        self.intensity / distance_squared
    }
}

/// Extents of the image plane in camera space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearPlane {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl NearPlane {
    /// A plane centered on the gaze direction.
    pub fn symmetric(half_width: f32, half_height: f32) -> Self {
        Self {
            left: -half_width,
            right: half_width,
            bottom: -half_height,
            top: half_height,
        }
    }
}

/// A pinhole camera as it appears in the scene description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    #[serde(default)]
    pub id: u32,
    pub position: Vec3,
    pub gaze: Vec3,
    pub up: Vec3,
    pub near_plane: NearPlane,
    pub near_distance: f32,
    pub image_width: u32,
    pub image_height: u32,
    /// Output identifier handed to the image sink
    pub image_name: String,
}

/// A sphere whose center lives in the shared vertex storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereObject {
    #[serde(default)]
    pub id: u32,
    /// 1-based material index
    pub material: usize,
    /// 1-based vertex index
    pub center: usize,
    pub radius: f32,
}

/// A single triangle made of three shared vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleObject {
    #[serde(default)]
    pub id: u32,
    /// 1-based material index
    pub material: usize,
    /// 1-based vertex indices, counter-clockwise winding faces the normal
    pub indices: [usize; 3],
}

/// A triangle mesh sharing one material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    #[serde(default)]
    pub id: u32,
    /// 1-based material index
    pub material: usize,
    /// Added to every face index when the mesh is resolved
    #[serde(default)]
    pub vertex_offset: usize,
    pub faces: Vec<[usize; 3]>,
}

impl MeshObject {
    /// Face vertex indices with the vertex offset applied.
    pub fn face_indices(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let offset = self.vertex_offset;
        self.faces
            .iter()
            .map(move |face| [face[0] + offset, face[1] + offset, face[2] + offset])
    }
}

/// A complete scene: geometry, materials, lights and cameras.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub settings: RenderSettings,

    /// Color returned by rays that hit nothing
    pub background_color: Color,

    pub ambient_light: Color,

    /// Shared vertex storage (referenced with 1-based indices)
    pub vertices: Vec<Vec3>,

    /// Materials (referenced with 1-based indices)
    pub materials: Vec<Material>,

    pub point_lights: Vec<PointLight>,
    pub spheres: Vec<SphereObject>,
    pub triangles: Vec<TriangleObject>,
    pub meshes: Vec<MeshObject>,
    pub cameras: Vec<Camera>,
}

impl Scene {
    /// Create an empty scene with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its 1-based index.
    pub fn add_vertex(&mut self, position: Vec3) -> usize {
        self.vertices.push(position);
        self.vertices.len()
    }

    /// Add a material and return its 1-based index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len()
    }

    /// Get a vertex by 1-based index.
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        index
            .checked_sub(1)
            .and_then(|i| self.vertices.get(i))
            .copied()
    }

    /// Get a material by 1-based index.
    pub fn material(&self, index: usize) -> Option<&Material> {
        index.checked_sub(1).and_then(|i| self.materials.get(i))
    }

    /// Total number of primitives (a mesh counts once).
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.triangles.len() + self.meshes.len()
    }

    /// Total number of triangles, including mesh faces.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() + self.meshes.iter().map(|m| m.faces.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_indices_are_one_based() {
        let mut scene = Scene::new();

        let first = scene.add_vertex(Vec3::ZERO);
        let second = scene.add_vertex(Vec3::X);
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        assert_eq!(scene.vertex(0), None);
        assert_eq!(scene.vertex(1), Some(Vec3::ZERO));
        assert_eq!(scene.vertex(2), Some(Vec3::X));
        assert_eq!(scene.vertex(3), None);

        let mat = scene.add_material(Material::diffuse(Color::ONE));
        assert_eq!(mat, 1);
        assert!(scene.material(0).is_none());
        assert_eq!(scene.material(1).map(|m| m.diffuse), Some(Color::ONE));
    }

    #[test]
    fn test_default_settings() {
        let settings = RenderSettings::default();
        assert_eq!(settings.max_recursion_depth, 1);
        assert_eq!(settings.shadow_ray_epsilon, 0.001);
        assert!(settings.intersection_test_epsilon > 0.0);
    }

    #[test]
    fn test_point_light_inverse_square() {
        let light = PointLight::new(Vec3::new(0.0, 2.0, 0.0), Color::splat(100.0));

        assert_eq!(light.irradiance_at(Vec3::ZERO), Color::splat(25.0));
        assert_eq!(light.irradiance_at(Vec3::new(0.0, 1.0, 0.0)), Color::splat(100.0));
    }

    #[test]
    fn test_mesh_vertex_offset() {
        let mesh = MeshObject {
            id: 1,
            material: 1,
            vertex_offset: 3,
            faces: vec![[1, 2, 3], [2, 3, 4]],
        };

        let faces: Vec<[usize; 3]> = mesh.face_indices().collect();
        assert_eq!(faces, vec![[4, 5, 6], [5, 6, 7]]);
    }

    #[test]
    fn test_material_is_mirror() {
        let mut material = Material::diffuse(Color::ONE);
        assert!(!material.is_mirror());

        material.mirror = Color::new(0.0, 0.0, 0.1);
        assert!(material.is_mirror());
    }

    #[test]
    fn test_counts() {
        let mut scene = Scene::new();
        scene.spheres.push(SphereObject {
            id: 1,
            material: 1,
            center: 1,
            radius: 1.0,
        });
        scene.triangles.push(TriangleObject {
            id: 1,
            material: 1,
            indices: [1, 2, 3],
        });
        scene.meshes.push(MeshObject {
            id: 1,
            material: 1,
            vertex_offset: 0,
            faces: vec![[1, 2, 3], [1, 3, 4]],
        });

        assert_eq!(scene.primitive_count(), 3);
        assert_eq!(scene.triangle_count(), 3);
    }
}
