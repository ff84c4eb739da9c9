//! Whitted-style shading.
//!
//! Local illumination is ambient + Blinn-Phong diffuse/specular from every
//! unoccluded point light, attenuated by the inverse square of the light
//! distance. Global illumination follows one perfect mirror reflection per
//! shaded point until the recursion depth runs out.

use whitted_core::{Material, PointLight};
use whitted_math::{reflect, Color, Ray};

use crate::hittable::HitRecord;
use crate::world::World;

/// Evaluates the color seen along rays into a world.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    world: &'a World,
}

impl<'a> Tracer<'a> {
    pub fn new(world: &'a World) -> Self {
        Self { world }
    }

    /// Compute the color seen by a ray with `depth` mirror bounces left.
    ///
    /// The result is unclamped; clamping happens when pixels are stored.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Color {
        let Some(rec) = self.world.nearest_hit(ray) else {
            return self.world.background();
        };

        let material = self.world.material(&rec);
        let mut color = self.world.ambient_light() * material.ambient;

        for light in self.world.lights() {
            color += self.direct_light(ray, &rec, material, light);
        }

        // Mirror term is added once per shaded point, independent of the lights
        if depth > 0 && material.is_mirror() {
            color += material.mirror * self.reflection(ray, &rec, depth);
        }

        color
    }

    /// Diffuse and specular contribution of one light, or zero if shadowed.
    fn direct_light(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        material: &Material,
        light: &PointLight,
    ) -> Color {
        let epsilon = self.world.settings().shadow_ray_epsilon;

        let to_light = light.position - rec.p;
        let distance = to_light.length();
        if distance == 0.0 {
            return Color::ZERO;
        }
        let light_dir = to_light / distance;

        let shadow_ray = Ray::offset(rec.p, light_dir, epsilon);
        if self.world.occluded(&shadow_ray, distance - epsilon) {
            return Color::ZERO;
        }

        let irradiance = light.irradiance_at(rec.p);

        let cos_theta = rec.normal.dot(light_dir).max(0.0);
        let diffuse = material.diffuse * irradiance * cos_theta;

        // Half vector between the light and the viewer
        let half_vector = (light_dir - ray.direction()).normalize_or_zero();
        let cos_alpha = rec.normal.dot(half_vector).max(0.0);
        let specular = material.specular * irradiance * cos_alpha.powf(material.phong_exponent);

        diffuse + specular
    }

    fn reflection(&self, ray: &Ray, rec: &HitRecord, depth: u32) -> Color {
        let epsilon = self.world.settings().shadow_ray_epsilon;
        let direction = reflect(ray.direction(), rec.normal);
        let reflected = Ray::offset(rec.p, direction, epsilon);
        self.shade(&reflected, depth - 1)
    }
}
