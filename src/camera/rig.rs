use crate::{
    camera::core::Camera,
    scene::{TargetId, TargetLookup},
    tracking::{PoseTracker, Tracker},
};

/// Generic per-frame input processing for a camera.
///
/// Runs before the tracker, so whatever it writes to the position or look-at
/// target is overwritten when a target is bound.
pub trait InputStep {
    /// Apply pending input to the camera.
    fn check_inputs(&mut self, camera: &mut Camera);
}

/// A camera whose pose is driven by a tracking strategy.
///
/// Each [`update`](Self::update) runs the input steps in order, then the
/// tracker. The camera pose is only written from inside that call.
pub struct TrackingCamera<T: PoseTracker = Tracker> {
    /// Underlying camera pose and projection.
    pub camera: Camera,
    tracker: T,
    inputs: Vec<Box<dyn InputStep>>,
}

impl<T: PoseTracker> TrackingCamera<T> {
    /// Wrap `camera` with `tracker` and run the tracker's attach hook.
    pub fn new<L: TargetLookup + ?Sized>(
        mut camera: Camera,
        tracker: T,
        targets: &L,
    ) -> Self {
        tracker.attach(&mut camera, targets);
        log::debug!(
            "{} attached (target {:?})",
            tracker.class_name(),
            tracker.locked_target()
        );
        Self {
            camera,
            tracker,
            inputs: Vec::new(),
        }
    }

    /// Append an input step. Steps run in insertion order.
    #[must_use]
    pub fn with_input<I: InputStep + 'static>(mut self, input: I) -> Self {
        self.inputs.push(Box::new(input));
        self
    }

    /// Advance one frame.
    pub fn update<L: TargetLookup + ?Sized>(&mut self, targets: &L) {
        for input in &mut self.inputs {
            input.check_inputs(&mut self.camera);
        }
        self.tracker.update(&mut self.camera, targets);
    }

    /// Bind, rebind, or clear the tracked object.
    pub fn bind_target(&mut self, target: Option<TargetId>) {
        if self.tracker.locked_target() != target {
            log::debug!(
                "{}: target {:?} -> {:?}",
                self.tracker.class_name(),
                self.tracker.locked_target(),
                target
            );
        }
        self.tracker.set_locked_target(target);
    }

    /// The tracking strategy.
    #[must_use]
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Mutable access to the tracking strategy's parameters.
    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Type name of the active tracker.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.tracker.class_name()
    }
}
