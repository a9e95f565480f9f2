use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 5.0,
            zfar: 2000.0,
        }
    }
}

impl CameraOptions {
    /// Copy the projection parameters onto `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.fovy = self.fovy;
        camera.znear = self.znear;
        camera.zfar = self.zfar;
    }
}
