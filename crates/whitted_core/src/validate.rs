//! Pre-render validation of scene references and constants.

use std::collections::HashSet;

use crate::error::SceneError;
use crate::scene::{Camera, RenderSettings, Scene};

impl Scene {
    /// Check every reference and constant in the scene.
    ///
    /// Returns the first problem found. A scene that passes can be
    /// resolved into renderable geometry without further checks.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.settings.validate()?;

        for (i, material) in self.materials.iter().enumerate() {
            if !(material.phong_exponent > 0.0 && material.phong_exponent.is_finite()) {
                return Err(SceneError::InvalidPhongExponent {
                    index: i + 1,
                    value: material.phong_exponent,
                });
            }
        }

        for sphere in &self.spheres {
            let object = format!("sphere {}", sphere.id);
            self.check_material(&object, sphere.material)?;
            self.check_vertex(&object, sphere.center)?;
            // Zero radius is degenerate but legal: it never reports a hit
            if !(sphere.radius >= 0.0 && sphere.radius.is_finite()) {
                return Err(SceneError::InvalidRadius {
                    id: sphere.id,
                    radius: sphere.radius,
                });
            }
        }

        for triangle in &self.triangles {
            let object = format!("triangle {}", triangle.id);
            self.check_material(&object, triangle.material)?;
            for index in triangle.indices {
                self.check_vertex(&object, index)?;
            }
        }

        for mesh in &self.meshes {
            self.check_material(&format!("mesh {}", mesh.id), mesh.material)?;
            for (face, indices) in mesh.face_indices().enumerate() {
                for index in indices {
                    if self.vertex(index).is_none() {
                        let object = format!("mesh {} face {}", mesh.id, face + 1);
                        self.check_vertex(&object, index)?;
                    }
                }
            }
        }

        let mut image_names = HashSet::new();
        for camera in &self.cameras {
            camera.validate()?;
            if !image_names.insert(camera.image_name.as_str()) {
                return Err(SceneError::DuplicateImageName(camera.image_name.clone()));
            }
        }

        Ok(())
    }

    fn check_material(&self, object: &str, index: usize) -> Result<(), SceneError> {
        match self.material(index) {
            Some(_) => Ok(()),
            None => Err(SceneError::InvalidMaterial {
                object: object.to_string(),
                index,
                count: self.materials.len(),
            }),
        }
    }

    fn check_vertex(&self, object: &str, index: usize) -> Result<(), SceneError> {
        match self.vertex(index) {
            Some(_) => Ok(()),
            None => Err(SceneError::InvalidVertex {
                object: object.to_string(),
                index,
                count: self.vertices.len(),
            }),
        }
    }
}

impl RenderSettings {
    /// Both epsilons must be strictly positive.
    pub fn validate(&self) -> Result<(), SceneError> {
        let epsilons = [
            ("shadow_ray_epsilon", self.shadow_ray_epsilon),
            ("intersection_test_epsilon", self.intersection_test_epsilon),
        ];
        for (name, value) in epsilons {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SceneError::InvalidEpsilon { name, value });
            }
        }
        Ok(())
    }
}

impl Camera {
    /// Check that the camera can produce a well-defined frame and image.
    pub fn validate(&self) -> Result<(), SceneError> {
        let invalid = |reason: &str| SceneError::InvalidCamera {
            id: self.id,
            reason: reason.to_string(),
        };

        if self.image_width == 0 || self.image_height == 0 {
            return Err(invalid("image resolution must be non-zero"));
        }
        if !(self.near_distance > 0.0 && self.near_distance.is_finite()) {
            return Err(invalid("near distance must be positive"));
        }
        let plane = &self.near_plane;
        if !(plane.right > plane.left && plane.top > plane.bottom) {
            return Err(invalid("near plane extents are empty"));
        }
        if self.gaze.length_squared() == 0.0 {
            return Err(invalid("gaze direction is zero"));
        }
        if self.up.cross(self.gaze).length_squared() < 1e-12 {
            return Err(invalid("up vector is parallel to the gaze"));
        }
        if self.image_name.is_empty() {
            return Err(invalid("image name is empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, MeshObject, NearPlane, SphereObject, TriangleObject};
    use whitted_math::{Color, Vec3};

    fn camera(name: &str) -> Camera {
        Camera {
            id: 1,
            position: Vec3::new(0.0, 0.0, 5.0),
            gaze: Vec3::NEG_Z,
            up: Vec3::Y,
            near_plane: NearPlane::symmetric(1.0, 1.0),
            near_distance: 1.0,
            image_width: 4,
            image_height: 4,
            image_name: name.to_string(),
        }
    }

    fn valid_scene() -> Scene {
        let mut scene = Scene::new();
        let a = scene.add_vertex(Vec3::ZERO);
        let b = scene.add_vertex(Vec3::X);
        let c = scene.add_vertex(Vec3::Y);
        let mat = scene.add_material(Material::diffuse(Color::ONE));
        scene.spheres.push(SphereObject {
            id: 1,
            material: mat,
            center: a,
            radius: 1.0,
        });
        scene.triangles.push(TriangleObject {
            id: 1,
            material: mat,
            indices: [a, b, c],
        });
        scene.cameras.push(camera("out.ppm"));
        scene
    }

    #[test]
    fn test_valid_scene_passes() {
        assert!(valid_scene().validate().is_ok());
    }

    #[test]
    fn test_unresolved_material_fails() {
        let mut scene = valid_scene();
        scene.spheres[0].material = 2;

        match scene.validate() {
            Err(SceneError::InvalidMaterial { index, count, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(count, 1);
            }
            other => panic!("expected InvalidMaterial, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_index_is_invalid() {
        let mut scene = valid_scene();
        scene.triangles[0].indices = [0, 1, 2];

        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidVertex { index: 0, .. })
        ));
    }

    #[test]
    fn test_mesh_offset_out_of_range() {
        let mut scene = valid_scene();
        scene.meshes.push(MeshObject {
            id: 7,
            material: 1,
            vertex_offset: 1,
            faces: vec![[1, 2, 2], [1, 2, 3]],
        });

        match scene.validate() {
            Err(SceneError::InvalidVertex { object, index, .. }) => {
                assert_eq!(object, "mesh 7 face 2");
                assert_eq!(index, 4);
            }
            other => panic!("expected InvalidVertex, got {:?}", other),
        }
    }

    #[test]
    fn test_epsilons_must_be_positive() {
        let mut scene = valid_scene();
        scene.settings.shadow_ray_epsilon = 0.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidEpsilon {
                name: "shadow_ray_epsilon",
                ..
            })
        ));

        let mut scene = valid_scene();
        scene.settings.intersection_test_epsilon = f32::NAN;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidEpsilon {
                name: "intersection_test_epsilon",
                ..
            })
        ));
    }

    #[test]
    fn test_phong_exponent_must_be_positive() {
        let mut scene = valid_scene();
        scene.materials[0].phong_exponent = 0.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidPhongExponent { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_radius_is_allowed_negative_is_not() {
        let mut scene = valid_scene();
        scene.spheres[0].radius = 0.0;
        assert!(scene.validate().is_ok());

        scene.spheres[0].radius = -1.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRadius { id: 1, .. })
        ));
    }

    #[test]
    fn test_camera_checks() {
        let mut cam = camera("a.ppm");
        cam.up = Vec3::Z;
        assert!(cam.validate().is_err());

        let mut cam = camera("a.ppm");
        cam.image_width = 0;
        assert!(cam.validate().is_err());

        let mut cam = camera("a.ppm");
        cam.near_plane = NearPlane {
            left: 1.0,
            right: -1.0,
            bottom: -1.0,
            top: 1.0,
        };
        assert!(cam.validate().is_err());

        let mut cam = camera("a.ppm");
        cam.near_distance = 0.0;
        assert!(cam.validate().is_err());
    }

    #[test]
    fn test_duplicate_image_names() {
        let mut scene = valid_scene();
        scene.cameras.push(camera("out.ppm"));

        match scene.validate() {
            Err(SceneError::DuplicateImageName(name)) => assert_eq!(name, "out.ppm"),
            other => panic!("expected DuplicateImageName, got {:?}", other),
        }
    }
}
