use crate::error::SceneError;
use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed numeric inputs of a frame: material, light and projection planes.
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub object_color: Vec3,
    pub object_shininess: f32,
    pub light_color: Vec3,
    pub light_position: Vec3,
    pub ambient_strength: f32,
    pub specular_strength: f32,
    /// Uniform scale of the light indicator cube.
    pub light_scale: f32,
    pub clear_color: [f64; 4],
    pub near: f32,
    pub far: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            object_color: Vec3::new(1.0, 0.5, 0.31),
            object_shininess: 32.0,
            light_color: Vec3::ONE,
            light_position: Vec3::new(1.2, 1.0, 2.0),
            ambient_strength: 0.1,
            specular_strength: 0.5,
            light_scale: 0.2,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            near: 0.1,
            far: 100.0,
        }
    }
}

impl SceneParams {
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.near > 0.0 && self.far > self.near {
            Ok(())
        } else {
            Err(SceneError::InvalidDepthRange {
                near: self.near,
                far: self.far,
            })
        }
    }

    /// World transform of the lit cube.
    pub fn object_model(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Translate to the light, then shrink.
    pub fn light_model(&self) -> Mat4 {
        Mat4::from_translation(self.light_position) * Mat4::from_scale(Vec3::splat(self.light_scale))
    }

    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }
}

/// Transpose of the inverse of the model's upper 3x3, for transforming normals.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    Mat3::from_mat4(model.inverse().transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_values() {
        let scene = SceneParams::default();
        assert_eq!(scene.object_color, Vec3::new(1.0, 0.5, 0.31));
        assert_eq!(scene.object_shininess, 32.0);
        assert_eq!(scene.light_position, Vec3::new(1.2, 1.0, 2.0));
        assert_eq!(scene.ambient_strength, 0.1);
        assert_eq!(scene.specular_strength, 0.5);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let scene =
            SceneParams::from_json_str(r#"{ "light_position": [0.0, 3.0, 0.0], "object_shininess": 8.0 }"#)
                .unwrap();
        assert_eq!(scene.light_position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(scene.object_shininess, 8.0);
        assert_eq!(scene.light_color, Vec3::ONE);
        assert_eq!(scene.far, 100.0);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            SceneParams::from_json_str("{ not json"),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn inverted_depth_range_is_rejected() {
        let err = SceneParams::from_json_str(r#"{ "near": 10.0, "far": 1.0 }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidDepthRange { .. }));
        let err = SceneParams::from_json_str(r#"{ "near": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidDepthRange { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{ "ambient_strength": 0.25 }"#).unwrap();
        let scene = SceneParams::load(&path).unwrap();
        assert_eq!(scene.ambient_strength, 0.25);

        let missing = SceneParams::load(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(SceneError::Io(_))));
    }

    #[test]
    fn light_model_translates_then_scales() {
        let scene = SceneParams::default();
        let m = scene.light_model();
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(Vec3::new(1.3, 1.1, 2.1), 1e-6));
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(scene.light_position, 1e-6));
    }

    #[test]
    fn normal_matrix_of_identity_is_identity() {
        let scene = SceneParams::default();
        assert!(normal_matrix(scene.object_model()).abs_diff_eq(Mat3::IDENTITY, 1e-6));
    }

    #[test]
    fn normal_matrix_undoes_nonuniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let n = normal_matrix(model);
        // a 45 degree normal on the stretched x axis tilts back toward y
        let normal = (n * Vec3::new(1.0, 1.0, 0.0)).normalize();
        assert!(normal.x < normal.y);
    }

    #[test]
    fn clear_color_converts() {
        let color = SceneParams::default().wgpu_clear_color();
        assert_eq!((color.r, color.g, color.b, color.a), (0.2, 0.3, 0.3, 1.0));
    }
}
