//! Triangle mesh primitive.

use crate::hittable::{HitRecord, Hittable};
use crate::triangle::Triangle;
use whitted_math::{Interval, Ray};

/// An ordered collection of triangles sharing one material.
///
/// Faces are resolved against the scene's vertex storage when the world is
/// built; the mesh keeps no reference back to it.
pub struct Mesh {
    faces: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh from already-resolved faces.
    pub fn new(faces: Vec<Triangle>) -> Self {
        Self { faces }
    }

    /// Get the number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl Hittable for Mesh {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for face in &self.faces {
            if let Some(rec) = face.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    fn occludes(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.faces.iter().any(|face| face.occludes(ray, ray_t))
    }
}
