//! The renderable world: resolved primitives plus everything shading needs.

use whitted_core::{Material, PointLight, RenderSettings, Scene, SceneError};
use whitted_math::{Color, Interval, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable, HittableList};
use crate::mesh::Mesh;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Geometry, materials and lights of a validated scene.
///
/// Primitives are scanned in description order: spheres, triangles, then
/// meshes. The world is immutable once built and can be shared between
/// render threads.
pub struct World {
    objects: HittableList,
    materials: Vec<Material>,
    lights: Vec<PointLight>,
    ambient_light: Color,
    background: Color,
    settings: RenderSettings,
}

impl World {
    /// Validate a scene and resolve its index-based primitives.
    pub fn from_scene(scene: &Scene) -> Result<Self, SceneError> {
        scene.validate()?;

        let mut objects = HittableList::new();

        for sphere in &scene.spheres {
            let object = format!("sphere {}", sphere.id);
            let center = resolve_vertex(scene, &object, sphere.center)?;
            objects.add(Box::new(Sphere::new(
                center,
                sphere.radius,
                resolve_material(scene, &object, sphere.material)?,
            )));
        }

        let mut degenerate = 0;
        for triangle in &scene.triangles {
            let object = format!("triangle {}", triangle.id);
            let tri = resolve_triangle(scene, &object, triangle.indices, triangle.material)?;
            if tri.is_degenerate() {
                log::warn!("{} has zero area and will never be hit", object);
                degenerate += 1;
            }
            objects.add(Box::new(tri));
        }

        for mesh in &scene.meshes {
            let object = format!("mesh {}", mesh.id);
            let mut faces = Vec::with_capacity(mesh.faces.len());
            for indices in mesh.face_indices() {
                let face = resolve_triangle(scene, &object, indices, mesh.material)?;
                if face.is_degenerate() {
                    degenerate += 1;
                }
                faces.push(face);
            }
            objects.add(Box::new(Mesh::new(faces)));
        }

        if degenerate > 0 {
            log::warn!("Scene contains {} degenerate triangles", degenerate);
        }
        log::debug!(
            "Built world: {} primitives, {} triangles, {} lights",
            objects.len(),
            scene.triangle_count(),
            scene.point_lights.len()
        );

        Ok(Self {
            objects,
            materials: scene.materials.clone(),
            lights: scene.point_lights.clone(),
            ambient_light: scene.ambient_light,
            background: scene.background_color,
            settings: scene.settings,
        })
    }

    /// Nearest intersection along the ray, starting at the intersection epsilon.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.objects
            .hit(ray, Interval::from_min(self.settings.intersection_test_epsilon))
    }

    /// Check whether anything blocks the ray before `max_t`.
    pub fn occluded(&self, ray: &Ray, max_t: f32) -> bool {
        let ray_t = Interval::new(self.settings.intersection_test_epsilon, max_t);
        ray_t.min < ray_t.max && self.objects.occludes(ray, ray_t)
    }

    /// Material of a hit record.
    pub fn material(&self, rec: &HitRecord) -> &Material {
        &self.materials[rec.material]
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient_light(&self) -> Color {
        self.ambient_light
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Number of top-level primitives (a mesh counts once).
    pub fn primitive_count(&self) -> usize {
        self.objects.len()
    }
}

fn resolve_vertex(scene: &Scene, object: &str, index: usize) -> Result<Vec3, SceneError> {
    scene.vertex(index).ok_or_else(|| SceneError::InvalidVertex {
        object: object.to_string(),
        index,
        count: scene.vertices.len(),
    })
}

/// Convert a 1-based material index into the world's 0-based one.
fn resolve_material(scene: &Scene, object: &str, index: usize) -> Result<usize, SceneError> {
    match scene.material(index) {
        Some(_) => Ok(index - 1),
        None => Err(SceneError::InvalidMaterial {
            object: object.to_string(),
            index,
            count: scene.materials.len(),
        }),
    }
}

fn resolve_triangle(
    scene: &Scene,
    object: &str,
    indices: [usize; 3],
    material: usize,
) -> Result<Triangle, SceneError> {
    Ok(Triangle::new(
        resolve_vertex(scene, object, indices[0])?,
        resolve_vertex(scene, object, indices[1])?,
        resolve_vertex(scene, object, indices[2])?,
        resolve_material(scene, object, material)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{MeshObject, SphereObject, TriangleObject};

    fn scene() -> Scene {
        let mut scene = Scene::new();
        let origin = scene.add_vertex(Vec3::ZERO);
        let far = scene.add_vertex(Vec3::new(0.0, 0.0, -10.0));
        scene.add_vertex(Vec3::new(-1.0, -1.0, -5.0));
        scene.add_vertex(Vec3::new(1.0, -1.0, -5.0));
        scene.add_vertex(Vec3::new(0.0, 1.0, -5.0));
        let red = scene.add_material(Material::diffuse(Color::X));
        let green = scene.add_material(Material::diffuse(Color::Y));

        scene.spheres.push(SphereObject {
            id: 1,
            material: red,
            center: far,
            radius: 1.0,
        });
        scene.meshes.push(MeshObject {
            id: 1,
            material: green,
            vertex_offset: 2,
            faces: vec![[1, 2, 3]],
        });
        scene.triangles.push(TriangleObject {
            id: 1,
            material: red,
            indices: [origin, origin, far],
        });
        scene
    }

    #[test]
    fn test_from_scene_resolves_indices() {
        let world = World::from_scene(&scene()).unwrap();
        assert_eq!(world.primitive_count(), 3);

        // Mesh face with offset sits at z = -5, in front of the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = world.nearest_hit(&ray).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert_eq!(world.material(&rec).diffuse, Color::Y);
    }

    #[test]
    fn test_from_scene_rejects_bad_reference() {
        let mut scene = scene();
        scene.spheres[0].material = 3;
        assert!(matches!(
            World::from_scene(&scene),
            Err(SceneError::InvalidMaterial { index: 3, .. })
        ));
    }

    #[test]
    fn test_occluded_with_empty_interval() {
        let world = World::from_scene(&scene()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(world.occluded(&ray, 100.0));
        assert!(!world.occluded(&ray, 1.0));
        assert!(!world.occluded(&ray, 0.0));
    }
}
