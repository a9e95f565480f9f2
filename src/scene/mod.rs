//! Scene-side view of tracked objects.
//!
//! The scene graph owns its objects and resolves their absolute transforms
//! before cameras update. Trackers never hold a reference to a scene object;
//! they keep a [`TargetId`] and resolve it through a [`TargetLookup`] every
//! frame, so a removed object simply stops resolving.

use glam::{Mat3, Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Handles and transforms
// ---------------------------------------------------------------------------

/// Weak handle to a scene object. Carries no ownership.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(pub u32);

/// Rotation representation of a scene object.
///
/// Objects either carry an explicit orientation quaternion or plain Euler
/// angles, in which case only the Y component (yaw) matters for tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// Explicit orientation quaternion.
    Quaternion(Quat),
    /// Euler angles in radians (pitch, yaw, roll).
    Euler(Vec3),
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Euler(Vec3::ZERO)
    }
}

/// Something a camera can track.
pub trait Trackable {
    /// World-space position after transform propagation.
    fn absolute_position(&self) -> Vec3;

    /// Orientation quaternion, if the object exposes one.
    fn rotation_quaternion(&self) -> Option<Quat>;

    /// Scalar yaw in radians, used when no quaternion is exposed.
    fn yaw(&self) -> f32;

    /// Heading around the Y axis.
    ///
    /// Prefers the quaternion: builds the column-major rotation matrix and
    /// reads the third column's x/z components (`m[8]`, `m[10]`).
    fn heading(&self) -> f32 {
        self.rotation_quaternion().map_or_else(
            || self.yaw(),
            |q| {
                let m = Mat3::from_quat(q);
                m.z_axis.x.atan2(m.z_axis.z)
            },
        )
    }
}

/// Resolves target handles to live scene objects.
pub trait TargetLookup {
    /// Look up a target. `None` when the handle is stale or unknown.
    fn resolve(&self, id: TargetId) -> Option<&dyn Trackable>;
}

/// Resolved absolute transform of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetTransform {
    /// Absolute world-space position.
    pub position: Vec3,
    /// Absolute orientation.
    pub orientation: Orientation,
}

impl TargetTransform {
    /// Transform at `position` with zero rotation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Orientation::default(),
        }
    }

    /// Replace the orientation with a yaw-only Euler rotation.
    #[must_use]
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.orientation = Orientation::Euler(Vec3::new(0.0, yaw, 0.0));
        self
    }

    /// Replace the orientation with a quaternion.
    #[must_use]
    pub fn with_quaternion(mut self, rotation: Quat) -> Self {
        self.orientation = Orientation::Quaternion(rotation);
        self
    }
}

impl Trackable for TargetTransform {
    fn absolute_position(&self) -> Vec3 {
        self.position
    }

    fn rotation_quaternion(&self) -> Option<Quat> {
        match self.orientation {
            Orientation::Quaternion(q) => Some(q),
            Orientation::Euler(_) => None,
        }
    }

    fn yaw(&self) -> f32 {
        match self.orientation {
            Orientation::Euler(euler) => euler.y,
            Orientation::Quaternion(_) => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// SceneTargets
// ---------------------------------------------------------------------------

/// Flat registry of resolved target transforms keyed by [`TargetId`].
///
/// Stands in for the scene graph in tools and tests: whatever runs transform
/// propagation writes absolute transforms here before cameras update.
#[derive(Debug, Default)]
pub struct SceneTargets {
    targets: FxHashMap<TargetId, TargetTransform>,
    next_id: u32,
    exhausted: bool,
}

impl SceneTargets {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target and return its handle.
    ///
    /// Handles are not reused until every `u32` value has been handed out.
    /// Past that point the lowest id not currently registered is recycled,
    /// so a stale handle may start resolving to a newer target.
    pub fn insert(&mut self, transform: TargetTransform) -> TargetId {
        let id = self.allocate_id();
        let _ = self.targets.insert(id, transform);
        id
    }

    fn allocate_id(&mut self) -> TargetId {
        if self.exhausted {
            let raw = (0..=u32::MAX)
                .find(|raw| !self.targets.contains_key(&TargetId(*raw)))
                .unwrap_or(u32::MAX);
            return TargetId(raw);
        }
        let id = TargetId(self.next_id);
        if let Some(next) = self.next_id.checked_add(1) {
            self.next_id = next;
        } else {
            log::warn!("target id space exhausted, recycling free ids");
            self.exhausted = true;
        }
        id
    }

    /// Remove a target. Outstanding handles stop resolving.
    pub fn remove(&mut self, id: TargetId) -> Option<TargetTransform> {
        self.targets.remove(&id)
    }

    /// Immutable access to a target's transform.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&TargetTransform> {
        self.targets.get(&id)
    }

    /// Mutable access, for moving a target between frames.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut TargetTransform> {
        self.targets.get_mut(&id)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TargetLookup for SceneTargets {
    fn resolve(&self, id: TargetId) -> Option<&dyn Trackable> {
        let target: &dyn Trackable = self.targets.get(&id)?;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn heading_uses_scalar_yaw_without_quaternion() {
        let t = TargetTransform::at(Vec3::ZERO).with_yaw(0.7);
        assert!(t.rotation_quaternion().is_none());
        assert!((t.heading() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn heading_from_quaternion_matches_y_rotation() {
        for angle in [0.0_f32, 0.4, FRAC_PI_2, 2.5, -1.2] {
            let t = TargetTransform::at(Vec3::ZERO)
                .with_quaternion(Quat::from_rotation_y(angle));
            assert!(
                (t.heading() - angle).abs() < 1e-5,
                "expected {angle}, got {}",
                t.heading()
            );
        }
    }

    #[test]
    fn quaternion_takes_precedence_over_yaw() {
        let t = TargetTransform::at(Vec3::ZERO)
            .with_quaternion(Quat::from_rotation_y(1.0));
        // Scalar yaw is unused once a quaternion is present.
        assert_eq!(t.yaw(), 0.0);
        assert!((t.heading() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn removed_handles_stop_resolving() {
        let mut scene = SceneTargets::new();
        let a = scene.insert(TargetTransform::at(Vec3::X));
        let b = scene.insert(TargetTransform::at(Vec3::Y));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a).is_some());
        assert!(scene.resolve(a).is_none());
        let resolved = scene.resolve(b).map(|t| t.absolute_position());
        assert_eq!(resolved, Some(Vec3::Y));
    }

    #[test]
    fn handles_are_not_reused_after_removal() {
        let mut scene = SceneTargets::new();
        let a = scene.insert(TargetTransform::default());
        let _ = scene.remove(a);
        let b = scene.insert(TargetTransform::default());
        assert_ne!(a, b);
        assert!(scene.resolve(a).is_none());
    }

    #[test]
    fn moving_a_target_is_visible_through_lookup() {
        let mut scene = SceneTargets::new();
        let id = scene.insert(TargetTransform::default());
        if let Some(t) = scene.get_mut(id) {
            t.position = Vec3::new(3.0, 0.0, -2.0);
        }
        let pos = scene.resolve(id).map(|t| t.absolute_position());
        assert_eq!(pos, Some(Vec3::new(3.0, 0.0, -2.0)));
    }

    #[test]
    fn exhausted_id_space_recycles_free_handles() {
        let mut scene = SceneTargets::new();
        scene.next_id = u32::MAX - 1;
        let a = scene.insert(TargetTransform::default());
        let b = scene.insert(TargetTransform::at(Vec3::X));
        assert_eq!(a, TargetId(u32::MAX - 1));
        assert_eq!(b, TargetId(u32::MAX));

        let c = scene.insert(TargetTransform::at(Vec3::Y));
        assert_eq!(c, TargetId(0));
        let _ = scene.remove(a);
        let d = scene.insert(TargetTransform::at(Vec3::Z));
        assert_eq!(d, TargetId(1));

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.get(b).map(|t| t.position), Some(Vec3::X));
        assert_eq!(scene.get(c).map(|t| t.position), Some(Vec3::Y));
    }

    #[test]
    fn heading_of_a_tilted_quaternion_ignores_pitch_and_roll() {
        let q = Quat::from_euler(glam::EulerRot::YXZ, 0.9, 0.4, -0.3);
        let target = TargetTransform::at(Vec3::ZERO).with_quaternion(q);
        let expected = (2.0 * (q.x * q.z + q.y * q.w))
            .atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y));
        assert!((target.heading() - expected).abs() < 1e-5);
        assert!((target.heading() - 0.9).abs() < 1e-5);
    }
}
