//! Camera for primary ray generation.

use whitted_core::{Camera, NearPlane, SceneError};
use whitted_math::{Ray, Vec3};

/// A pinhole camera with a precomputed orthonormal frame.
///
/// `w` points opposite the gaze, `u` to the right and `v` up. Pixel row 0
/// is the top of the image, column 0 the left edge.
#[derive(Clone, Debug)]
pub struct PinholeCamera {
    pub image_width: u32,
    pub image_height: u32,
    pub image_name: String,

    center: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    plane: NearPlane,
    near_distance: f32,

    // Cached computed values
    pixel_width: f32,
    pixel_height: f32,
}

impl PinholeCamera {
    /// Build the camera frame from a scene camera.
    pub fn new(camera: &Camera) -> Result<Self, SceneError> {
        camera.validate()?;

        let w = (-camera.gaze).normalize();
        let u = camera.up.cross(w).normalize();
        let v = w.cross(u);

        let plane = camera.near_plane;
        Ok(Self {
            image_width: camera.image_width,
            image_height: camera.image_height,
            image_name: camera.image_name.clone(),
            center: camera.position,
            u,
            v,
            w,
            plane,
            near_distance: camera.near_distance,
            pixel_width: (plane.right - plane.left) / camera.image_width as f32,
            pixel_height: (plane.top - plane.bottom) / camera.image_height as f32,
        })
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// `i` is the column, `j` the row counted from the top.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let su = self.plane.left + (i as f32 + 0.5) * self.pixel_width;
        let sv = self.plane.top - (j as f32 + 0.5) * self.pixel_height;

        let plane_center = self.center - self.w * self.near_distance;
        let pixel_center = plane_center + self.u * su + self.v * sv;

        Ray::new(self.center, pixel_center - self.center)
    }

    pub fn position(&self) -> Vec3 {
        self.center
    }

    /// Camera basis vectors (u, v, w).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}
