//! Camera and tracker presets with TOML support.
//!
//! Presets hold the projection parameters and the tracker configuration,
//! including which scene object is tracked (by id). The tracker section is
//! tagged with the tracker's class name, so a preset file looks like:
//!
//! ```toml
//! [camera]
//! fovy = 50.0
//!
//! [tracker]
//! type = "ChaseTracker"
//! radius = 8.0
//! locked_target_id = 0
//! ```

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    camera::{Camera, TrackingCamera},
    error::FollowCamError,
    scene::TargetLookup,
    tracking::{PoseTracker, Tracker},
};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Tracker kind and parameters.
    pub tracker: Tracker,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn parse(content: &str) -> Result<Self, FollowCamError> {
        toml::from_str(content)
            .map_err(|e| FollowCamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FollowCamError> {
        let content = std::fs::read_to_string(path).map_err(FollowCamError::Io)?;
        let options = Self::parse(&content)?;
        log::info!(
            "Loaded {} preset from {}",
            options.tracker.class_name(),
            path.display()
        );
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FollowCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FollowCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FollowCamError::Io)?;
        }
        std::fs::write(path, content).map_err(FollowCamError::Io)?;
        log::info!("Saved preset to {}", path.display());
        Ok(())
    }

    /// Build a tracking camera from this preset.
    ///
    /// Runs the tracker's attach hook against `targets`, so an orbit preset
    /// with a resolvable target starts on its orbit.
    pub fn build_camera<L: TargetLookup + ?Sized>(
        &self,
        aspect: f32,
        targets: &L,
    ) -> TrackingCamera {
        let mut camera = Camera {
            aspect,
            ..Camera::default()
        };
        self.camera.apply(&mut camera);
        TrackingCamera::new(camera, self.tracker.clone(), targets)
    }
}
