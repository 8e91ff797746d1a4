//! Cross-checks of the matrix and quaternion kernels against glam.
//!
//! glam follows the same column-major, column-vector conventions, so most
//! results must agree element for element. The exception is
//! [`Matrix4x4::look_at`], whose X basis row is the mirror of glam's
//! `look_at_rh`.

use approx::assert_abs_diff_eq;
use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use lumen_math::{Matrix3x3, Matrix4x4, Quaternion, Vector2, Vector3};

const EPS: f32 = 1e-4;

fn sample_matrix() -> Matrix4x4 {
    Matrix4x4::IDENTITY
        .translate(Vector3::new(1.5, -2.0, 0.25))
        .rotate(0.6, Vector3::new(1.0, 2.0, -0.5))
        .map(|m| m.scale(Vector3::new(2.0, 0.5, 1.25)))
        .unwrap_or_default()
}

#[test]
fn test_perspective_matches_glam() {
    let ours = Matrix4x4::perspective(60.0, 16.0 / 9.0, 0.1, 200.0);
    let theirs = Mat4::perspective_rh_gl(60f32.to_radians(), 16.0 / 9.0, 0.1, 200.0);
    assert_abs_diff_eq!(ours, Matrix4x4::from(theirs), epsilon = EPS);
}

#[test]
fn test_inverse_matches_glam() {
    let m = sample_matrix();
    let ours = m.inverse().unwrap();
    let theirs = Mat4::from(m).inverse();
    assert_abs_diff_eq!(ours, Matrix4x4::from(theirs), epsilon = EPS);
    assert_abs_diff_eq!(m.determinant(), Mat4::from(m).determinant(), epsilon = EPS);
}

#[test]
fn test_product_matches_glam() {
    let a = sample_matrix();
    let b = Matrix4x4::perspective(45.0, 1.0, 1.0, 10.0);
    let theirs = Mat4::from(a) * Mat4::from(b);
    assert_abs_diff_eq!(a * b, Matrix4x4::from(theirs), epsilon = EPS);
}

#[test]
fn test_transform_builders_match_glam() {
    let axis = Vector3::new(0.0, 1.0, 1.0);
    let rotated = Matrix4x4::IDENTITY.rotate(1.2, axis).unwrap();
    let theirs = Mat4::from_axis_angle(Vec3::from(axis).normalize(), 1.2);
    assert_abs_diff_eq!(rotated, Matrix4x4::from(theirs), epsilon = EPS);

    let moved = Matrix4x4::IDENTITY.translate(Vector3::new(3.0, 4.0, 5.0));
    assert_eq!(moved, Matrix4x4::from(Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0))));

    let scaled = Matrix4x4::IDENTITY.scale(Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(scaled, Matrix4x4::from(Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0))));
}

#[test]
fn test_look_at_mirrors_glam_x_row() {
    let eye = Vector3::new(3.0, 2.0, 5.0);
    let target = Vector3::new(0.5, 0.0, -1.0);
    let ours = Matrix4x4::look_at(eye, target, Vector3::up());
    let theirs = Matrix4x4::from(Mat4::look_at_rh(eye.into(), target.into(), Vec3::Y));

    assert_abs_diff_eq!(ours.row(0), -theirs.row(0), epsilon = EPS);
    for r in 1..4 {
        assert_abs_diff_eq!(ours.row(r), theirs.row(r), epsilon = EPS);
    }
}

#[test]
fn test_mat3_matches_glam() {
    let ours = Matrix3x3::translation(Vector2::new(2.0, -1.0))
        * Matrix3x3::rotation(0.4)
        * Matrix3x3::scaling(Vector2::new(3.0, 0.5));
    let theirs = Mat3::from_translation(Vec2::new(2.0, -1.0))
        * Mat3::from_angle(0.4)
        * Mat3::from_scale(Vec2::new(3.0, 0.5));
    assert_abs_diff_eq!(ours, Matrix3x3::from(theirs), epsilon = EPS);
    assert_abs_diff_eq!(ours.determinant(), theirs.determinant(), epsilon = EPS);
    assert_abs_diff_eq!(ours.inverse().unwrap(), Matrix3x3::from(theirs.inverse()), epsilon = EPS);
}

#[test]
fn test_quaternion_matches_glam() {
    let axis = Vector3::new(1.0, -2.0, 0.5).normalize();
    let a = Quaternion::rotation(0.9, axis);
    let b = Quaternion::rotation(-0.4, Vector3::right());
    let qa = Quat::from_axis_angle(axis.into(), 0.9);
    let qb = Quat::from_axis_angle(Vec3::X, -0.4);

    assert_abs_diff_eq!(a, Quaternion::from(qa), epsilon = EPS);
    assert_abs_diff_eq!(a * b, Quaternion::from(qa * qb), epsilon = EPS);
    assert_abs_diff_eq!(a.to_matrix4(), Matrix4x4::from(Mat4::from_quat(qa)), epsilon = EPS);

    let v = Vector3::new(0.2, 0.7, -1.3);
    assert_abs_diff_eq!(a.rotate_vector(v), Vector3::from(qa * Vec3::from(v)), epsilon = EPS);
    assert_abs_diff_eq!(a.to_vec3(v), Vector3::from(qa.inverse() * Vec3::from(v)), epsilon = EPS);
}

#[test]
fn test_slerp_matches_glam() {
    let a = Quaternion::rotation(0.3, Vector3::up());
    let b = Quaternion::rotation(1.7, Vector3::up());
    let qa = Quat::from(a);
    let qb = Quat::from(b);
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        assert_abs_diff_eq!(a.slerp(b, t), Quaternion::from(qa.slerp(qb, t)), epsilon = 1e-4);
    }
}
