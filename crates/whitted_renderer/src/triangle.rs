//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm, which solves the barycentric
//! linear system for the plane intersection with Cramer's rule.

use crate::hittable::{HitRecord, Hittable};
use whitted_math::{Interval, Ray, Vec3};

/// Determinants below this are treated as a parallel ray or a degenerate triangle.
const DETERMINANT_EPSILON: f32 = 1e-8;

/// A triangle primitive.
pub struct Triangle {
    v0: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    /// Unit normal of (v1 - v0) x (v2 - v0), zero for degenerate triangles
    normal: Vec3,
    material: usize,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: usize) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        Self {
            v0,
            edge1,
            edge2,
            normal: edge1.cross(edge2).normalize_or_zero(),
            material,
        }
    }

    /// Returns true for zero-area triangles, which never report hits.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if self.is_degenerate() {
            return None;
        }

        let h = ray.direction().cross(self.edge2);
        let a = self.edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < DETERMINANT_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.edge2.dot(q);
        if !ray_t.admits(t) {
            return None;
        }

        Some(HitRecord {
            t,
            p: ray.at(t),
            normal: self.normal,
            material: self.material,
        })
    }
}
