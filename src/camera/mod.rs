//! Camera pose and the tracking rig that drives it.
//!
//! [`Camera`] is the plain pose plus projection. [`TrackingCamera`] composes
//! it with input steps and a tracker and is what the frame loop updates.

/// Core camera struct and view/projection matrices.
pub mod core;
/// Tracking rig composing a camera, input steps, and a tracker.
pub mod rig;

pub use self::core::Camera;
pub use rig::{InputStep, TrackingCamera};
