//! Camera3D demo - headless per-frame camera loop
//!
//! Plays a scripted key sequence through the camera controller, rebuilds the
//! model/view/projection matrices every frame, and logs what a renderer would
//! upload. No window or GPU context is created.

use std::time::{Duration, Instant};

use camera_3d::cam3d::{self, Diagnostics};
use camera_3d::cam3d::camera::{Camera, CameraConfig, CameraMovement, FrameClock, FrameUniforms};
use camera_3d::cam3d::log::LogSeverity;
use camera_3d::{camera_info, camera_trace, camera_warn};
use glam::{Mat4, Vec3};
use winit::keyboard::KeyCode;

const SOURCE: &str = "cam3d::demo";

const WINDOW_WIDTH: u32 = 1200;
const WINDOW_HEIGHT: u32 = 800;
const FRAME_TIME: Duration = Duration::from_millis(16);
const FRAME_COUNT: u64 = 240;

/// Keys held during each second of the script
fn held_keys(elapsed: f32) -> &'static [KeyCode] {
    match elapsed as u32 {
        0 => &[KeyCode::KeyW],
        1 => &[KeyCode::KeyA, KeyCode::KeyW],
        2 => &[KeyCode::KeyS],
        _ => &[KeyCode::KeyD],
    }
}

fn run() -> cam3d::Result<()> {
    let config = CameraConfig {
        fov_y_degrees: 45.0,
        ..Default::default()
    };
    let mut camera = Camera::new(config)?;
    let aspect = WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32;
    let rotation_axis = Vec3::new(0.5, 1.0, 0.0).normalize();

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);

    camera_info!(
        SOURCE,
        "Running {} frames at {}x{} (aspect {:.3})",
        FRAME_COUNT,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        aspect
    );

    for frame in 1..=FRAME_COUNT {
        let now = start + FRAME_TIME * frame as u32;
        let delta = clock.tick_at(now);

        for key in held_keys(clock.elapsed()) {
            if let Some(movement) = CameraMovement::from_key(*key) {
                camera.process_movement(movement, delta);
            }
        }

        let model = Mat4::from_axis_angle(rotation_axis, clock.elapsed() * 50f32.to_radians());
        let uniforms = FrameUniforms::from_camera(&camera, model, aspect)?;

        for (name, matrix) in uniforms.named() {
            camera_trace!(SOURCE, "frame {} uniform {} = {:?}", frame, name, matrix);
        }

        if frame % 60 == 0 {
            camera_info!(
                SOURCE,
                "frame {}: t={:.2}s camera at {:.3} ({} bytes of uniforms)",
                frame,
                clock.elapsed(),
                camera.position(),
                uniforms.as_bytes().len()
            );
        }
    }

    camera_info!(SOURCE, "Finished after {} frames", clock.frame_count());
    Ok(())
}

fn main() {
    Diagnostics::set_min_severity(LogSeverity::Info);

    // The library already logged the error itself at ERROR.
    if run().is_err() {
        camera_warn!(SOURCE, "Demo aborted after an error");
        std::process::exit(1);
    }
}
