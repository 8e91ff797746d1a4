//! SIMD batch transforms.
//!
//! Column-major 4x4 matrices map directly onto `f32x4` lanes: a transformed
//! vector is a linear combination of the four column registers. These
//! helpers use the `wide` crate for portable SIMD on stable Rust and agree
//! with the scalar paths ([`Matrix4x4::mul_mat`], [`Vector3::apply_matrix4`],
//! [`Vector4::apply_matrix4`]) within float tolerance.
//!
//! # Example
//!
//! ```rust
//! use lumen_math::{simd, Matrix4x4, Vector3};
//!
//! let m = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 2.0, 3.0));
//! let out = simd::transform_points(&m, &[Vector3::ZERO, Vector3::ONE]);
//! assert_eq!(out[1], Vector3::new(2.0, 3.0, 4.0));
//! ```

use wide::f32x4;

use crate::{Matrix4x4, Vector3, Vector4};

#[inline]
fn columns(m: &Matrix4x4) -> [f32x4; 4] {
    let c = &m.m;
    [
        f32x4::from([c[0], c[1], c[2], c[3]]),
        f32x4::from([c[4], c[5], c[6], c[7]]),
        f32x4::from([c[8], c[9], c[10], c[11]]),
        f32x4::from([c[12], c[13], c[14], c[15]]),
    ]
}

#[inline]
fn combine(cols: &[f32x4; 4], x: f32, y: f32, z: f32, w: f32) -> [f32; 4] {
    (cols[0] * f32x4::splat(x)
        + cols[1] * f32x4::splat(y)
        + cols[2] * f32x4::splat(z)
        + cols[3] * f32x4::splat(w))
    .to_array()
}

/// 4x4 matrix product `a * b`.
pub fn mul_mat4(a: &Matrix4x4, b: &Matrix4x4) -> Matrix4x4 {
    let cols = columns(a);
    let mut out = [0.0f32; 16];
    for (j, chunk) in out.chunks_exact_mut(4).enumerate() {
        let k = j * 4;
        let col = combine(&cols, b.m[k], b.m[k + 1], b.m[k + 2], b.m[k + 3]);
        chunk.copy_from_slice(&col);
    }
    Matrix4x4::from_cols_array(out)
}

/// Transforms points `(x, y, z, 1)` by `mat`, dropping `w`.
pub fn transform_points(mat: &Matrix4x4, points: &[Vector3]) -> Vec<Vector3> {
    let cols = columns(mat);
    points
        .iter()
        .map(|p| {
            let [x, y, z, _] = combine(&cols, p.x, p.y, p.z, 1.0);
            Vector3::new(x, y, z)
        })
        .collect()
}

/// Full 4x4 transform of a batch of homogeneous vectors.
pub fn transform_vectors4(mat: &Matrix4x4, vectors: &[Vector4]) -> Vec<Vector4> {
    let cols = columns(mat);
    vectors
        .iter()
        .map(|v| Vector4::from_array(combine(&cols, v.x, v.y, v.z, v.w)))
        .collect()
}
