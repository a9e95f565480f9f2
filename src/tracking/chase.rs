//! Damped follow camera.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{resolve_locked, PoseTracker};
use crate::{
    camera::Camera,
    scene::{TargetId, TargetLookup, Trackable},
};

/// Clamp one axis of the per-frame displacement to `max_speed`.
///
/// Values within `[-max_speed, max_speed]` pass through. Anything outside
/// snaps to `-max_speed` when the unclamped value is below 1 and to
/// `+max_speed` otherwise. The threshold is 1, not 0, so a small positive
/// value that still exceeds a tiny limit snaps negative.
#[inline]
#[must_use]
pub fn clamp_speed(velocity: f32, max_speed: f32) -> f32 {
    if velocity > max_speed || velocity < -max_speed {
        if velocity < 1.0 {
            -max_speed
        } else {
            max_speed
        }
    } else {
        velocity
    }
}

/// Follows a target from behind and above, easing toward an ideal point
/// each frame.
///
/// The ideal point sits `radius` away from the target horizontally, rotated
/// by the target's heading plus `rotation_offset`, and `height_offset` above
/// it. Every update the camera covers a fixed fraction of the remaining
/// distance (twice `camera_acceleration` horizontally, once vertically),
/// limited per axis by `max_camera_speed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Chase Tracker")]
#[serde(default)]
pub struct ChaseTracker {
    /// Horizontal distance kept from the target.
    #[schemars(title = "Radius")]
    pub radius: f32,
    /// Extra yaw around the target, in degrees.
    #[schemars(title = "Rotation Offset")]
    pub rotation_offset: f32,
    /// Height above the target.
    #[schemars(title = "Height Offset")]
    pub height_offset: f32,
    /// Fraction of the remaining distance covered per update.
    #[schemars(title = "Acceleration", range(min = 0.0, max = 1.0))]
    pub camera_acceleration: f32,
    /// Largest displacement per axis per update.
    #[schemars(title = "Max Speed", range(min = 0.0))]
    pub max_camera_speed: f32,
    /// Tracked object.
    #[serde(rename = "locked_target_id", skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub locked_target: Option<TargetId>,
}

impl Default for ChaseTracker {
    fn default() -> Self {
        Self {
            radius: 12.0,
            rotation_offset: 0.0,
            height_offset: 4.0,
            camera_acceleration: 0.05,
            max_camera_speed: 20.0,
            locked_target: None,
        }
    }
}

impl ChaseTracker {
    /// Default parameters, optionally bound to `target`.
    #[must_use]
    pub fn new(target: Option<TargetId>) -> Self {
        Self {
            locked_target: target,
            ..Self::default()
        }
    }

    /// Point the camera eases toward for the given target.
    #[must_use]
    pub fn ideal_position<T: Trackable + ?Sized>(&self, target: &T) -> Vec3 {
        let radians = self.rotation_offset.to_radians() + target.heading();
        let anchor = target.absolute_position();
        Vec3::new(
            anchor.x + radians.sin() * self.radius,
            anchor.y + self.height_offset,
            anchor.z + radians.cos() * self.radius,
        )
    }

    /// This frame's displacement for a camera at `position`.
    #[must_use]
    pub fn velocity_toward<T: Trackable + ?Sized>(
        &self,
        position: Vec3,
        target: &T,
    ) -> Vec3 {
        let delta = self.ideal_position(target) - position;
        let accel = self.camera_acceleration;
        Vec3::new(
            clamp_speed(delta.x * accel * 2.0, self.max_camera_speed),
            clamp_speed(delta.y * accel, self.max_camera_speed),
            clamp_speed(delta.z * accel * 2.0, self.max_camera_speed),
        )
    }

    /// Step `camera` toward `target` and look at it.
    pub fn follow<T: Trackable + ?Sized>(&self, camera: &mut Camera, target: &T) {
        camera.position += self.velocity_toward(camera.position, target);
        camera.set_target(target.absolute_position());
    }
}

impl PoseTracker for ChaseTracker {
    fn update<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L) {
        if let Some(target) =
            resolve_locked(self.locked_target, targets, self.class_name())
        {
            self.follow(camera, target);
        }
    }

    fn locked_target(&self) -> Option<TargetId> {
        self.locked_target
    }

    fn set_locked_target(&mut self, target: Option<TargetId>) {
        self.locked_target = target;
    }

    fn class_name(&self) -> &'static str {
        "ChaseTracker"
    }
}
