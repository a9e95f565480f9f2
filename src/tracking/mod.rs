//! Per-frame pose trackers.
//!
//! A tracker reads the absolute transform of one scene object and rewrites
//! the camera position and look-at target from it. Trackers keep no
//! per-frame state: each update is a function of the current camera pose,
//! the target's transform, and the tracker's parameters.

mod chase;
mod orbit;

pub use chase::{clamp_speed, ChaseTracker};
pub use orbit::OrbitTracker;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    scene::{TargetId, TargetLookup, Trackable},
};

/// Strategy that rewrites a camera pose once per frame.
pub trait PoseTracker {
    /// Rewrite `camera` from the locked target's current transform.
    ///
    /// A missing or stale target leaves the camera untouched.
    fn update<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L);

    /// Hook run once when the tracker is attached to a camera.
    fn attach<L: TargetLookup + ?Sized>(&self, _camera: &mut Camera, _targets: &L) {}

    /// Handle of the tracked object, if any.
    fn locked_target(&self) -> Option<TargetId>;

    /// Bind, rebind, or clear the tracked object.
    fn set_locked_target(&mut self, target: Option<TargetId>);

    /// Stable type name used when presets are written out.
    fn class_name(&self) -> &'static str;
}

/// Resolve a locked handle, logging when it has gone stale.
fn resolve_locked<'a, L: TargetLookup + ?Sized>(
    locked: Option<TargetId>,
    targets: &'a L,
    class_name: &str,
) -> Option<&'a dyn Trackable> {
    let id = locked?;
    let target = targets.resolve(id);
    if target.is_none() {
        log::trace!("{class_name}: target {} no longer resolves", id.0);
    }
    target
}

/// Either tracker, selected at runtime or from a preset.
///
/// Serialized with an internal `type` tag holding the class name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Tracker {
    /// Damped follow camera.
    #[serde(rename = "ChaseTracker")]
    Chase(ChaseTracker),
    /// Rigid orbit camera.
    #[serde(rename = "OrbitTracker")]
    Orbit(OrbitTracker),
}

impl Default for Tracker {
    fn default() -> Self {
        Self::Chase(ChaseTracker::default())
    }
}

impl From<ChaseTracker> for Tracker {
    fn from(tracker: ChaseTracker) -> Self {
        Self::Chase(tracker)
    }
}

impl From<OrbitTracker> for Tracker {
    fn from(tracker: OrbitTracker) -> Self {
        Self::Orbit(tracker)
    }
}

impl PoseTracker for Tracker {
    fn update<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L) {
        match self {
            Self::Chase(t) => t.update(camera, targets),
            Self::Orbit(t) => t.update(camera, targets),
        }
    }

    fn attach<L: TargetLookup + ?Sized>(&self, camera: &mut Camera, targets: &L) {
        match self {
            Self::Chase(t) => t.attach(camera, targets),
            Self::Orbit(t) => t.attach(camera, targets),
        }
    }

    fn locked_target(&self) -> Option<TargetId> {
        match self {
            Self::Chase(t) => t.locked_target(),
            Self::Orbit(t) => t.locked_target(),
        }
    }

    fn set_locked_target(&mut self, target: Option<TargetId>) {
        match self {
            Self::Chase(t) => t.set_locked_target(target),
            Self::Orbit(t) => t.set_locked_target(target),
        }
    }

    fn class_name(&self) -> &'static str {
        match self {
            Self::Chase(t) => t.class_name(),
            Self::Orbit(t) => t.class_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{SceneTargets, TargetTransform};

    #[test]
    fn default_tracker_is_chase() {
        assert_eq!(Tracker::default().class_name(), "ChaseTracker");
        assert_eq!(
            Tracker::from(OrbitTracker::default()).class_name(),
            "OrbitTracker"
        );
    }

    #[test]
    fn rebinding_goes_through_the_enum() {
        let mut tracker = Tracker::from(OrbitTracker::default());
        assert_eq!(tracker.locked_target(), None);
        tracker.set_locked_target(Some(TargetId(7)));
        assert_eq!(tracker.locked_target(), Some(TargetId(7)));
        tracker.set_locked_target(None);
        assert_eq!(tracker.locked_target(), None);
    }

    #[test]
    fn enum_dispatch_matches_direct_call() {
        let mut scene = SceneTargets::new();
        let id = scene.insert(TargetTransform::at(Vec3::new(5.0, 1.0, -3.0)));
        let chase = ChaseTracker::new(Some(id));

        let mut direct = Camera::default();
        chase.update(&mut direct, &scene);

        let mut dispatched = Camera::default();
        Tracker::from(chase).update(&mut dispatched, &scene);

        assert_eq!(direct, dispatched);
    }

    #[test]
    fn stale_handle_resolves_to_none() {
        let mut scene = SceneTargets::new();
        let id = scene.insert(TargetTransform::default());
        assert!(resolve_locked(Some(id), &scene, "test").is_some());
        let _ = scene.remove(id);
        assert!(resolve_locked(Some(id), &scene, "test").is_none());
        assert!(resolve_locked(None, &scene, "test").is_none());
    }
}
