//! Matrix builders: perspective projection, translation, look-at view.
//!
//! Conventions (OpenGL style):
//! - Right-handed view space, the camera looks down its local -Z axis.
//! - Column vectors: a point is transformed as `M * p`.
//! - Clip-space depth maps to NDC `[-1, 1]`. A backend expecting `[0, 1]`
//!   depth needs a different third row in `perspective()`.
//!
//! All builders are pure. Invalid input is rejected with
//! `Error::DomainError` (and logged) instead of leaking NaN/Inf into the
//! uniforms uploaded downstream.

use std::f32::consts::PI;
use glam::{Mat4, Vec3, Vec4};
use crate::error::{Error, Result, log_and_return_error};

const SOURCE: &str = "cam3d::transform";

/// Minimum `|up x forward| / |up|` before `look_at` treats the world up
/// reference as parallel to the view direction.
const PARALLEL_EPSILON: f32 = 1e-6;

fn domain_error(message: String) -> Error {
    log_and_return_error(SOURCE, Error::DomainError(message))
}

/// Right-handed perspective projection with OpenGL depth range.
///
/// ```text
/// [ inv_tan/aspect  0        0                  0                 ]
/// [ 0               inv_tan  0                  0                 ]
/// [ 0               0        -(near+far)/range  -2*near*far/range ]
/// [ 0               0        -1                 0                 ]
/// ```
///
/// with `inv_tan = 1 / tan(fov_y / 2)` and `range = far - near`.
///
/// # Errors
///
/// `Error::DomainError` unless `0 < fov_y < PI`, `aspect > 0` and
/// `0 < near < far`, all finite.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    if !(fov_y.is_finite() && aspect.is_finite() && near.is_finite() && far.is_finite()) {
        return Err(domain_error(format!(
            "perspective parameters must be finite (fov_y={}, aspect={}, near={}, far={})",
            fov_y, aspect, near, far
        )));
    }
    if fov_y <= 0.0 || fov_y >= PI {
        return Err(domain_error(format!(
            "vertical field of view must lie in (0, PI) radians, got {}",
            fov_y
        )));
    }
    if aspect <= 0.0 {
        return Err(domain_error(format!("aspect ratio must be positive, got {}", aspect)));
    }
    if near <= 0.0 {
        return Err(domain_error(format!("near plane must be positive, got {}", near)));
    }
    if near == far {
        return Err(domain_error(format!("near plane equals far plane ({})", near)));
    }
    if far < near {
        return Err(domain_error(format!(
            "far plane ({}) must be beyond near plane ({})",
            far, near
        )));
    }

    let inv_tan = 1.0 / (fov_y * 0.5).tan();
    let range = far - near;

    let projection = Mat4::from_cols(
        Vec4::new(inv_tan / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, inv_tan, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(near + far) / range, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * near * far / range, 0.0),
    );

    // Extreme but in-range inputs can still overflow f32.
    if !projection.is_finite() {
        return Err(domain_error(format!(
            "perspective overflowed f32 (fov_y={}, aspect={}, near={}, far={})",
            fov_y, aspect, near, far
        )));
    }

    Ok(projection)
}

/// Affine translation by `(dx, dy, dz)`. Never fails.
pub fn translation(dx: f32, dy: f32, dz: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::X,
        Vec4::Y,
        Vec4::Z,
        Vec4::new(dx, dy, dz, 1.0),
    )
}

/// Right-handed look-at view matrix.
///
/// Builds the camera basis
/// - `forward = normalize(eye - target)` (the camera looks down `-forward`)
/// - `right = normalize(world_up x forward)`
/// - `up = forward x right`
///
/// and returns `R * T(-eye)` where the rows of `R` are `right, up, forward`.
/// The result is a rigid transform: `eye` maps to the origin and `target`
/// lands on the negative local Z axis.
///
/// # Errors
///
/// `Error::DomainError` if any input is non-finite, if `eye == target` (or
/// their offset cannot be normalized in f32), or if `world_up` is zero or
/// parallel to the view direction.
pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Result<Mat4> {
    if !(eye.is_finite() && target.is_finite() && world_up.is_finite()) {
        return Err(domain_error(format!(
            "look_at inputs must be finite (eye={}, target={}, up={})",
            eye, target, world_up
        )));
    }

    let offset = eye - target;
    if offset == Vec3::ZERO {
        return Err(domain_error(format!(
            "eye position equals target position ({})",
            eye
        )));
    }
    // Offsets whose length under- or overflows f32 have no usable direction.
    let forward = match offset.try_normalize() {
        Some(forward) => forward,
        None => {
            return Err(domain_error(format!(
                "eye {} and target {} are too close or too far apart to define a view direction",
                eye, target
            )));
        }
    };

    let side = world_up.cross(forward);
    let side_len = side.length();
    if side_len <= PARALLEL_EPSILON * world_up.length() {
        return Err(domain_error(format!(
            "world up {} is zero or parallel to the view direction {}",
            world_up, -forward
        )));
    }
    let right = side / side_len;
    let up = forward.cross(right);

    Ok(Mat4::from_cols(
        Vec4::new(right.x, up.x, forward.x, 0.0),
        Vec4::new(right.y, up.y, forward.y, 0.0),
        Vec4::new(right.z, up.z, forward.z, 0.0),
        Vec4::new(-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0),
    ))
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
