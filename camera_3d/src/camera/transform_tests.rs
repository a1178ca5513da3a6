use glam::{Mat3, Mat4, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use crate::error::Error;
use super::*;

const EPS: f32 = 1e-5;

fn ndc_depth(projection: &Mat4, view_z: f32) -> f32 {
    let clip = *projection * Vec4::new(0.0, 0.0, view_z, 1.0);
    clip.z / clip.w
}

fn assert_domain_error<T: std::fmt::Debug>(result: crate::error::Result<T>) {
    match result {
        Err(Error::DomainError(_)) => {}
        other => panic!("expected DomainError, got {:?}", other),
    }
}

// ============================================================================
// perspective
// ============================================================================

#[test]
fn test_perspective_near_maps_to_minus_one_far_to_plus_one() {
    for (fov, aspect, near, far) in [
        (FRAC_PI_4, 1200.0 / 800.0, 0.1, 100.0),
        (FRAC_PI_2, 1.0, 1.0, 10.0),
        (1.0, 16.0 / 9.0, 0.5, 500.0),
        (0.2, 0.5, 3.0, 4.0),
    ] {
        let projection = perspective(fov, aspect, near, far).unwrap();
        assert!((ndc_depth(&projection, -near) + 1.0).abs() < 1e-4);
        assert!((ndc_depth(&projection, -far) - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_perspective_layout() {
    let (fov, aspect, near, far) = (FRAC_PI_2, 2.0, 1.0, 3.0);
    let projection = perspective(fov, aspect, near, far).unwrap();

    // tan(45 deg) == 1
    assert!((projection.row(0) - Vec4::new(0.5, 0.0, 0.0, 0.0)).length() < EPS);
    assert!((projection.row(1) - Vec4::new(0.0, 1.0, 0.0, 0.0)).length() < EPS);
    assert!((projection.row(2) - Vec4::new(0.0, 0.0, -2.0, -3.0)).length() < EPS);
    assert_eq!(projection.row(3), Vec4::new(0.0, 0.0, -1.0, 0.0));
}

#[test]
fn test_perspective_matches_glam_gl_convention() {
    let ours = perspective(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0).unwrap();
    let glam = Mat4::perspective_rh_gl(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    assert!(ours.abs_diff_eq(glam, EPS));
}

#[test]
fn test_perspective_is_idempotent() {
    let a = perspective(0.8, 1.5, 0.1, 100.0).unwrap();
    let b = perspective(0.8, 1.5, 0.1, 100.0).unwrap();
    assert_eq!(a.to_cols_array(), b.to_cols_array());
}

#[test]
fn test_perspective_rejects_equal_planes() {
    assert_domain_error(perspective(FRAC_PI_4, 1.0, 5.0, 5.0));
}

#[test]
fn test_perspective_rejects_inverted_planes() {
    assert_domain_error(perspective(FRAC_PI_4, 1.0, 10.0, 1.0));
}

#[test]
fn test_perspective_rejects_non_positive_near() {
    assert_domain_error(perspective(FRAC_PI_4, 1.0, 0.0, 10.0));
    assert_domain_error(perspective(FRAC_PI_4, 1.0, -1.0, 10.0));
}

#[test]
fn test_perspective_rejects_fov_out_of_range() {
    assert_domain_error(perspective(0.0, 1.0, 0.1, 10.0));
    assert_domain_error(perspective(PI, 1.0, 0.1, 10.0));
    assert_domain_error(perspective(4.0, 1.0, 0.1, 10.0));
    assert_domain_error(perspective(-0.5, 1.0, 0.1, 10.0));
}

#[test]
fn test_perspective_rejects_bad_aspect() {
    assert_domain_error(perspective(FRAC_PI_4, 0.0, 0.1, 10.0));
    assert_domain_error(perspective(FRAC_PI_4, -1.5, 0.1, 10.0));
}

#[test]
fn test_perspective_rejects_non_finite() {
    assert_domain_error(perspective(f32::NAN, 1.0, 0.1, 10.0));
    assert_domain_error(perspective(FRAC_PI_4, f32::INFINITY, 0.1, 10.0));
    assert_domain_error(perspective(FRAC_PI_4, 1.0, 0.1, f32::INFINITY));
}

#[test]
fn test_perspective_rejects_overflow() {
    assert_domain_error(perspective(FRAC_PI_4, 1.0, 1e30, 3e38));
}

// ============================================================================
// translation
// ============================================================================

#[test]
fn test_translation_zero_is_identity() {
    assert_eq!(translation(0.0, 0.0, 0.0), Mat4::IDENTITY);
}

#[test]
fn test_translation_moves_origin() {
    let m = translation(1.5, -2.0, 7.25);
    assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.5, -2.0, 7.25, 1.0));
    assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_translation_leaves_directions_alone() {
    let m = translation(3.0, 4.0, 5.0);
    assert_eq!(m * Vec4::new(1.0, 2.0, 3.0, 0.0), Vec4::new(1.0, 2.0, 3.0, 0.0));
    assert_eq!(m, Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0)));
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_down_negative_z() {
    let view = look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();

    assert!(Mat3::from_mat4(view).abs_diff_eq(Mat3::IDENTITY, EPS));
    assert!((view.w_axis - Vec4::new(0.0, 0.0, -3.0, 1.0)).length() < EPS);
    assert!(view.abs_diff_eq(translation(0.0, 0.0, -3.0), EPS));
}

#[test]
fn test_look_at_maps_eye_to_origin_and_target_onto_axis() {
    let eye = Vec3::new(2.0, -1.0, 4.0);
    let forward_unit = Vec3::new(1.0, 2.0, -0.5).normalize();
    let view = look_at(eye, eye + forward_unit, Vec3::Y).unwrap();

    assert!(view.transform_point3(eye).length() < EPS);

    let target_cam = view.transform_point3(eye + forward_unit);
    assert!(target_cam.x.abs() < EPS);
    assert!(target_cam.y.abs() < EPS);
    assert!((target_cam.z + 1.0).abs() < EPS);
}

#[test]
fn test_look_at_rotation_is_orthonormal() {
    let view = look_at(Vec3::new(-3.0, 5.0, 2.0), Vec3::new(1.0, 0.5, -4.0), Vec3::Y).unwrap();
    let rows = [
        view.row(0).truncate(),
        view.row(1).truncate(),
        view.row(2).truncate(),
    ];

    for row in &rows {
        assert!((row.length() - 1.0).abs() < EPS);
    }
    assert!(rows[0].dot(rows[1]).abs() < EPS);
    assert!(rows[0].dot(rows[2]).abs() < EPS);
    assert!(rows[1].dot(rows[2]).abs() < EPS);
    assert_eq!(view.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    // proper rotation, no reflection
    assert!((Mat3::from_mat4(view).determinant() - 1.0).abs() < EPS);
}

#[test]
fn test_look_at_preserves_distances() {
    let view = look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-2.0, 0.0, 1.0), Vec3::Y).unwrap();
    let a = Vec3::new(4.0, -1.0, 0.5);
    let b = Vec3::new(-3.0, 2.0, 8.0);
    let before = a.distance(b);
    let after = view.transform_point3(a).distance(view.transform_point3(b));
    assert!((before - after).abs() < 1e-4);
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(1.0, 2.0, 5.0);
    let target = Vec3::new(0.0, 0.5, 0.0);
    let ours = look_at(eye, target, Vec3::Y).unwrap();
    let glam = Mat4::look_at_rh(eye, target, Vec3::Y);
    assert!(ours.abs_diff_eq(glam, EPS));
}

#[test]
fn test_look_at_accepts_non_unit_up() {
    let a = look_at(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();
    let b = look_at(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)).unwrap();
    assert!(a.abs_diff_eq(b, EPS));
}

#[test]
fn test_look_at_is_idempotent() {
    let eye = Vec3::new(0.3, 0.7, 2.0);
    let a = look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
    let b = look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
    assert_eq!(a.to_cols_array(), b.to_cols_array());
}

#[test]
fn test_look_at_rejects_eye_equal_target() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_domain_error(look_at(p, p, Vec3::Y));
}

#[test]
fn test_look_at_accepts_close_distinct_points() {
    let eye = Vec3::new(0.0, 0.0, 1e-7);
    let view = look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();

    assert!(Mat3::from_mat4(view).abs_diff_eq(Mat3::IDENTITY, EPS));
    let target = view.transform_point3(Vec3::ZERO);
    assert!(target.x.abs() < EPS && target.y.abs() < EPS);
    assert!(target.z < 0.0);
}

#[test]
fn test_look_at_rejects_unnormalizable_offset() {
    // |eye - target|^2 overflows f32
    match look_at(Vec3::new(0.0, 0.0, 1e20), Vec3::ZERO, Vec3::Y) {
        Err(Error::DomainError(message)) => {
            assert!(message.contains("target"), "unexpected message: {}", message);
            assert!(!message.contains("parallel"), "unexpected message: {}", message);
        }
        other => panic!("expected DomainError, got {:?}", other),
    }
}

#[test]
fn test_look_at_rejects_parallel_up() {
    assert_domain_error(look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y));
    assert_domain_error(look_at(Vec3::new(0.0, -5.0, 0.0), Vec3::ZERO, Vec3::Y));
}

#[test]
fn test_look_at_rejects_zero_up() {
    assert_domain_error(look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::ZERO));
}

#[test]
fn test_look_at_rejects_non_finite() {
    assert_domain_error(look_at(Vec3::new(f32::NAN, 0.0, 3.0), Vec3::ZERO, Vec3::Y));
    assert_domain_error(look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::new(0.0, f32::INFINITY, 0.0)));
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_target_projects_to_screen_center() {
    let view = look_at(Vec3::new(4.0, 3.0, 2.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y).unwrap();
    let projection = perspective(FRAC_PI_4, 1.5, 0.1, 100.0).unwrap();
    let ndc = (projection * view).project_point3(Vec3::new(0.0, 1.0, 0.0));

    assert!(ndc.x.abs() < EPS);
    assert!(ndc.y.abs() < EPS);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}
