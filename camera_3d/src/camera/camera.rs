/// Camera — explicit per-frame camera state.
///
/// Replaces free-standing globals (position, front, up, frame timing) with a
/// value owned by the caller and handed to the matrix builders every frame.
/// The camera never touches GPU state.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result, log_and_return_error};
use super::controller::CameraMovement;
use super::transform;

const SOURCE: &str = "cam3d::Camera";

/// Camera configuration
///
/// Use struct-update syntax to override individual fields:
///
/// ```
/// use camera_3d::cam3d::camera::CameraConfig;
///
/// let config = CameraConfig { fov_y_degrees: 60.0, ..Default::default() };
/// assert_eq!(config.far, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Initial world position
    pub position: Vec3,
    /// Initial view direction (normalized on construction)
    pub front: Vec3,
    /// World up reference
    pub world_up: Vec3,
    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Movement speed in world units per second
    pub movement_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            front: Vec3::NEG_Z,
            world_up: Vec3::Y,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            movement_speed: 2.5,
        }
    }
}

impl CameraConfig {
    /// Check every field without building a camera.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| -> Result<()> {
            Err(log_and_return_error(SOURCE, Error::InvalidConfig(message)))
        };

        if !self.position.is_finite() {
            return invalid(format!("position must be finite, got {}", self.position));
        }
        if !self.front.is_finite() || self.front.length_squared() <= f32::EPSILON {
            return invalid(format!("front must be a finite non-zero vector, got {}", self.front));
        }
        if !self.world_up.is_finite() || self.world_up.length_squared() <= f32::EPSILON {
            return invalid(format!("world_up must be a finite non-zero vector, got {}", self.world_up));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return invalid(format!("fov_y_degrees must lie in (0, 180), got {}", self.fov_y_degrees));
        }
        if !(self.near > 0.0 && self.near.is_finite()) {
            return invalid(format!("near must be positive, got {}", self.near));
        }
        if !(self.far > self.near && self.far.is_finite()) {
            return invalid(format!("far ({}) must be beyond near ({})", self.far, self.near));
        }
        if !(self.movement_speed >= 0.0 && self.movement_speed.is_finite()) {
            return invalid(format!("movement_speed must be non-negative, got {}", self.movement_speed));
        }
        Ok(())
    }
}

/// Camera state for one viewer.
///
/// Cheap to copy; the demo keeps one and rebuilds the view/projection
/// matrices from it every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    world_up: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
    movement_speed: f32,
}

impl Camera {
    /// Create a camera from a validated configuration.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if any field is out of range.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        crate::camera_debug!(
            SOURCE,
            "Camera created at {} facing {} (fov {} deg)",
            config.position,
            config.front,
            config.fov_y_degrees
        );
        Ok(Self::from_valid_config(config))
    }

    /// Build from a config that already passed `validate()`.
    fn from_valid_config(config: CameraConfig) -> Self {
        Self {
            position: config.position,
            front: config.front.normalize(),
            world_up: config.world_up,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            movement_speed: config.movement_speed,
        }
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// World up reference.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Unit strafe direction, `normalize(front x world_up)`.
    ///
    /// Zero when `front` is parallel to `world_up`.
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.world_up).normalize_or_zero()
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Point the camera along `front`.
    ///
    /// # Errors
    ///
    /// `Error::DomainError` if `front` is zero or non-finite; the camera is
    /// left unchanged.
    pub fn set_front(&mut self, front: Vec3) -> Result<()> {
        match front.try_normalize() {
            Some(unit) => {
                self.front = unit;
                Ok(())
            }
            None => Err(log_and_return_error(
                SOURCE,
                Error::DomainError(format!("cannot face along {}", front)),
            )),
        }
    }

    /// Set the vertical field of view, in radians.
    ///
    /// # Errors
    ///
    /// `Error::DomainError` outside `(0, PI)`; the camera is left unchanged.
    pub fn set_fov_y(&mut self, fov_y: f32) -> Result<()> {
        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            return Err(log_and_return_error(
                SOURCE,
                Error::DomainError(format!("vertical field of view must lie in (0, PI), got {}", fov_y)),
            ));
        }
        self.fov_y = fov_y;
        Ok(())
    }

    /// Set the movement speed, in world units per second.
    ///
    /// # Errors
    ///
    /// `Error::DomainError` unless `speed` is finite and non-negative; the
    /// camera is left unchanged.
    pub fn set_movement_speed(&mut self, speed: f32) -> Result<()> {
        if !(speed >= 0.0 && speed.is_finite()) {
            return Err(log_and_return_error(
                SOURCE,
                Error::DomainError(format!("movement speed must be finite and non-negative, got {}", speed)),
            ));
        }
        self.movement_speed = speed;
        Ok(())
    }

    // ===== MATRICES =====

    /// View matrix: `look_at(position, position + front, world_up)`.
    pub fn view_matrix(&self) -> Result<Mat4> {
        transform::look_at(self.position, self.position + self.front, self.world_up)
    }

    /// Projection matrix for a viewport with the given `aspect` (width / height).
    pub fn projection_matrix(&self, aspect: f32) -> Result<Mat4> {
        transform::perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self, aspect: f32) -> Result<Mat4> {
        Ok(self.projection_matrix(aspect)? * self.view_matrix()?)
    }

    // ===== MOVEMENT =====

    /// Move by `movement_speed * delta_seconds` in the requested direction.
    ///
    /// Forward/Backward follow `front`; Left/Right follow `right()`.
    /// Negative or non-finite deltas are ignored.
    pub fn process_movement(&mut self, movement: CameraMovement, delta_seconds: f32) {
        if !(delta_seconds >= 0.0 && delta_seconds.is_finite()) {
            crate::camera_warn!(SOURCE, "Ignoring movement with delta {}", delta_seconds);
            return;
        }

        let velocity = self.movement_speed * delta_seconds;
        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right() * velocity,
            CameraMovement::Right => self.position += self.right() * velocity,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid_config(CameraConfig::default())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
