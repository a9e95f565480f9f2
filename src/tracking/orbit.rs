//! Rigid orbit camera.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{resolve_locked, PoseTracker};
use crate::{
    camera::Camera,
    scene::{TargetId, TargetLookup, Trackable},
};

/// Pins the camera to a fixed spherical offset from the target.
///
/// No damping and no clamping: after every update the camera sits exactly
/// `radius` away from the target at the configured angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Orbit Tracker")]
#[serde(default)]
pub struct OrbitTracker {
    /// Rotation around the longitudinal axis, in radians.
    #[schemars(title = "Longitude")]
    pub longitude: f32,
    /// Rotation around the elevation axis, in radians.
    #[schemars(title = "Elevation")]
    pub elevation: f32,
    /// Distance from the target.
    #[schemars(title = "Radius")]
    pub radius: f32,
    /// Tracked object.
    #[serde(rename = "locked_target_id", skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub locked_target: Option<TargetId>,
}

impl Default for OrbitTracker {
    fn default() -> Self {
        Self {
            longitude: 0.0,
            elevation: 0.0,
            radius: 1.0,
            locked_target: None,
        }
    }
}

impl OrbitTracker {
    /// Create an orbit at the given angles and radius.
    #[must_use]
    pub fn new(
        longitude: f32,
        elevation: f32,
        radius: f32,
        target: Option<TargetId>,
    ) -> Self {
        Self {
            longitude,
            elevation,
            radius,
            locked_target: target,
        }
    }

    /// Camera offset from the target in Cartesian coordinates.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_ele, cos_ele) = self.elevation.sin_cos();
        Vec3::new(
            self.radius * cos_lon * cos_ele,
            self.radius * sin_ele,
            self.radius * sin_lon * cos_ele,
        )
    }

    /// Place `camera` on the orbit around `target` and look at it.
    pub fn follow<T: Trackable + ?Sized>(&self, camera: &mut Camera, target: &T) {
        let anchor = target.absolute_position();
        camera.position = anchor + self.offset();
        camera.set_target(anchor);
    }
}

impl PoseTracker for OrbitTracker {
    fn update<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L) {
        if let Some(target) =
            resolve_locked(self.locked_target, targets, self.class_name())
        {
            self.follow(camera, target);
        }
    }

    /// Place the camera right away so the first frame renders on the orbit.
    fn attach<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L) {
        self.update(camera, targets);
    }

    fn locked_target(&self) -> Option<TargetId> {
        self.locked_target
    }

    fn set_locked_target(&mut self, target: Option<TargetId>) {
        self.locked_target = target;
    }

    fn class_name(&self) -> &'static str {
        "OrbitTracker"
    }
}
