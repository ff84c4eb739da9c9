// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (linear RGB, 0-255 display units)
pub type Color = Vec3;

/// Reflect a direction about a unit normal.
///
/// Returns: d - 2(d·n)n
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}
