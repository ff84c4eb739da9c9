use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Points along the ray are parameterized as `origin + t * direction` with `t >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    ///
    /// A zero direction stays zero rather than turning into NaN.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray whose origin is pushed `epsilon` along the direction.
    ///
    /// Used for secondary rays leaving a surface so they do not re-hit it.
    pub fn offset(point: Vec3, direction: Vec3, epsilon: f32) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin: point + direction * epsilon,
            direction,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
