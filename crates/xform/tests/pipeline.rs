use approx::assert_relative_eq;
use std::f32::consts::PI;
use xform::algebra::{Mat4, Vec3};
use xform::camera::{look_at, perspective, view_projection};

const EPS: f32 = 1e-6;

#[test]
fn full_pipeline_lands_point_in_ndc_cube() {
    // model: scale, rotate about y, push away from the camera
    let model = Mat4::from_translation_euler_scale(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(0.0, PI / 4.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
    );

    let eye = Vec3::new(0.0, 0.0, 5.0);
    let target = Vec3::ZERO;
    let up = Vec3::new(0.0, 1.0, 0.0);
    let view = look_at(eye, target, up).inverse();
    let proj = perspective(PI / 3.0, 1.0, 0.1, 100.0);

    let mvp = (proj * view) * model;
    let ndc = mvp.project_point3(Vec3::new(1.0, 0.0, 0.0));

    assert!((-1.0..=1.0).contains(&ndc.x), "NDC x out of range: {}", ndc.x);
    assert!((-1.0..=1.0).contains(&ndc.y), "NDC y out of range: {}", ndc.y);
    assert!((-1.0..=1.0).contains(&ndc.z), "NDC z out of range: {}", ndc.z);
}

#[test]
fn view_projection_helper_matches_pipeline() {
    let eye = Vec3::new(2.0, 3.0, 5.0);
    let target = Vec3::new(0.0, 1.0, 0.0);
    let up = Vec3::new(0.0, 1.0, 0.0);

    let vp = view_projection(eye, target, up, PI / 3.0, 1.5, 0.1, 100.0);
    let manual = perspective(PI / 3.0, 1.5, 0.1, 100.0) * look_at(eye, target, up).inverse();

    assert_relative_eq!(vp, manual, epsilon = EPS);
}

#[test]
fn world_point_at_target_projects_to_screen_center() {
    let eye = Vec3::new(0.0, 2.0, 8.0);
    let target = Vec3::new(0.0, 0.0, 0.0);
    let vp = view_projection(eye, target, Vec3::new(0.0, 1.0, 0.0), PI / 3.0, 1.0, 0.1, 100.0);

    let ndc = vp.project_point3(target);
    assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
}

#[test]
fn degenerate_camera_is_caught_by_finiteness_check() {
    // eye == target collapses the rotation block to zeros; the inverse of
    // that camera matrix is singular and the pipeline output non-finite
    let eye = Vec3::new(1.0, 1.0, 1.0);
    let vp = view_projection(eye, eye, Vec3::new(0.0, 1.0, 0.0), PI / 3.0, 1.0, 0.1, 100.0);
    assert!(!vp.is_finite());
}

#[test]
fn matrix_survives_serde_round_trip() {
    let m = Mat4::from_translation_euler_scale(
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(0.1, 0.2, 0.3),
        Vec3::new(2.0, 2.0, 2.0),
    );
    let json = serde_json::to_string(&m).unwrap();
    let back: Mat4 = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}
