//! Headless demo: drives a tracking camera around a target moving on a
//! circle and logs the camera pose.
//!
//! Usage: `follow-cam [preset.toml]`. Set `RUST_LOG=debug` for more detail.

use std::{f32::consts::PI, path::Path};

use follow_cam::{
    options::Options,
    scene::{SceneTargets, TargetTransform},
    tracking::PoseTracker,
};
use glam::Vec3;

const FRAMES: u32 = 240;
const LOG_EVERY: u32 = 30;
const PATH_RADIUS: f32 = 20.0;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)).unwrap_or_else(|e| {
            log::error!("Failed to load preset '{path}': {e}");
            Options::default()
        }),
        None => Options::default(),
    };

    let mut scene = SceneTargets::new();
    let target = scene.insert(TargetTransform::at(Vec3::new(PATH_RADIUS, 0.0, 0.0)));

    let mut rig = options.build_camera(16.0 / 9.0, &scene);
    if rig.tracker().locked_target().is_none() {
        rig.bind_target(Some(target));
    }
    log::info!("Tracking target {} with {}", target.0, rig.class_name());

    for frame in 0..FRAMES {
        let angle = frame as f32 * 0.02;
        if let Some(t) = scene.get_mut(target) {
            // Face along the direction of travel.
            *t = TargetTransform::at(Vec3::new(
                PATH_RADIUS * angle.cos(),
                0.0,
                PATH_RADIUS * angle.sin(),
            ))
            .with_yaw(PI - angle);
        }

        rig.update(&scene);

        if frame % LOG_EVERY == 0 {
            let camera = &rig.camera;
            log::info!(
                "frame {frame:>4}: position ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
            );

            // The look-at point should project to the middle of the screen.
            let clip = camera.build_matrix() * camera.target.extend(1.0);
            let ndc = clip.truncate() / clip.w;
            let forward = camera.forward();
            log::debug!(
                "frame {frame:>4}: forward ({:.3}, {:.3}, {:.3}) target ndc ({:.3}, {:.3}, {:.3})",
                forward.x,
                forward.y,
                forward.z,
                ndc.x,
                ndc.y,
                ndc.z,
            );
        }
    }
}
