/// Controller — key-to-movement mapping and frame timing.
///
/// The window layer forwards pressed keys and calls `FrameClock::tick()`
/// once per frame; the resulting movement and delta go to
/// `Camera::process_movement()`.

use std::time::Instant;
use winit::keyboard::KeyCode;

/// Direction of a single movement step, relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along the view direction
    Forward,
    /// Against the view direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
}

impl CameraMovement {
    /// All movements, in key-polling order.
    pub const ALL: [CameraMovement; 4] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
    ];

    /// W/S/A/D and the arrow keys. Any other key maps to `None`.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(CameraMovement::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(CameraMovement::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(CameraMovement::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(CameraMovement::Right),
            _ => None,
        }
    }
}

/// Per-frame delta-time source.
///
/// ```
/// use camera_3d::cam3d::camera::FrameClock;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut clock = FrameClock::starting_at(start);
/// let dt = clock.tick_at(start + Duration::from_millis(16));
/// assert!((dt - 0.016).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    frame_count: u64,
}

impl FrameClock {
    /// Start timing now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start timing at a given instant (for deterministic driving).
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
            frame_count: 0,
        }
    }

    /// Seconds since the previous tick (or since creation on the first tick).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like `tick()`, using `now` instead of the wall clock.
    ///
    /// An instant earlier than the previous frame yields `0.0`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_frame).as_secs_f32();
        if now > self.last_frame {
            self.last_frame = now;
        }
        self.frame_count += 1;
        delta
    }

    /// Seconds from creation to the last tick.
    pub fn elapsed(&self) -> f32 {
        self.last_frame.duration_since(self.start).as_secs_f32()
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
