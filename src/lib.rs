// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math compares against literal thresholds and chains mul/add.
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Per-frame camera trackers for real-time 3D scenes.
//!
//! A [`camera::TrackingCamera`] owns a plain [`camera::Camera`] pose and a
//! tracking strategy. Each frame it runs its generic input steps, then lets
//! the tracker overwrite the camera position and look-at target from the
//! current transform of a scene object.
//!
//! # Key entry points
//!
//! - [`tracking::ChaseTracker`] - damped follow camera with per-axis speed
//!   clamping
//! - [`tracking::OrbitTracker`] - rigid spherical offset around the target
//! - [`scene::TargetLookup`] - how trackers resolve their target handle each
//!   frame
//! - [`options::Options`] - TOML presets for camera and tracker parameters

pub mod camera;
pub mod error;
pub mod options;
pub mod scene;
pub mod tracking;
