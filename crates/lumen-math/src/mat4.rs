//! 4x4 matrix type for model, view and projection transforms.
//!
//! [`Matrix4x4`] uses the same **column-major** storage and **column
//! vector** convention as [`Matrix3x3`](crate::Matrix3x3); elements
//! `m[12..15]` hold the translation. Composition reads right to left:
//! `projection * view * model`.
//!
//! # Camera and projection
//!
//! - [`Matrix4x4::look_at`] - view matrix from eye, target and up vector
//! - [`Matrix4x4::perspective`] - symmetric frustum from a vertical FOV in degrees
//! - [`Matrix4x4::make_frustum`] - general OpenGL-style frustum
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4x4, Vector3};
//!
//! let model = Matrix4x4::IDENTITY
//!     .translate(Vector3::new(0.0, 0.0, -5.0))
//!     .scale(Vector3::splat(2.0));
//! let view = Matrix4x4::look_at(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO, Vector3::up());
//! let proj = Matrix4x4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//! let mvp = proj * view * model;
//! assert!(mvp.is_finite());
//! ```

use std::ops::{Index, IndexMut, Mul};

use tracing::trace;

use crate::mat3::SINGULAR_EPSILON;
use crate::{Vector3, Vector4};

/// Elements with a magnitude below this are written as `0` in CSS strings.
const CSS_EPSILON: f32 = 1e-6;

/// A 4x4 matrix stored column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x4 {
    /// Elements in column-major order: `[col0, col1, col2, col3]`
    pub m: [f32; 16],
}

impl Matrix4x4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from sixteen column-major elements.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns the column-major elements.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Creates a matrix from column-major values.
    ///
    /// Extra values are ignored and missing ones are zero.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut m = [0.0; 16];
        for (dst, src) in m.iter_mut().zip(values) {
            *dst = *src;
        }
        Self { m }
    }

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self {
            m: [
                c0.x, c0.y, c0.z, c0.w, //
                c1.x, c1.y, c1.z, c1.w, //
                c2.x, c2.y, c2.z, c2.w, //
                c3.x, c3.y, c3.z, c3.w,
            ],
        }
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector4 {
        assert!(i < 4, "Matrix4x4 column out of bounds: {}", i);
        let c = i * 4;
        Vector4::new(self.m[c], self.m[c + 1], self.m[c + 2], self.m[c + 3])
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        assert!(i < 4, "Matrix4x4 row out of bounds: {}", i);
        Vector4::new(self.m[i], self.m[i + 4], self.m[i + 8], self.m[i + 12])
    }

    /// The texture-space bias matrix used for projective texturing.
    ///
    /// Maps clip-space `[-1, 1]` to `[0, 1]` with a flipped `y`.
    #[inline]
    pub const fn projective_texture() -> Self {
        Self::from_cols_array([
            0.5, 0.0, 0.0, 0.0, //
            0.0, -0.5, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.5, 0.5, 0.0, 1.0,
        ])
    }

    /// Resets to identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut t = *self;
        t.transpose_mut();
        t
    }

    /// Transposes in place.
    pub fn transpose_mut(&mut self) -> &mut Self {
        for col in 0..4 {
            for row in (col + 1)..4 {
                self.m.swap(col * 4 + row, row * 4 + col);
            }
        }
        self
    }

    /// Shared 2x2 sub-determinants used by [`determinant`](Self::determinant)
    /// and [`inverse`](Self::inverse).
    #[inline]
    fn minors(&self) -> [f32; 12] {
        let m = &self.m;
        [
            m[0] * m[5] - m[1] * m[4],
            m[0] * m[6] - m[2] * m[4],
            m[0] * m[7] - m[3] * m[4],
            m[1] * m[6] - m[2] * m[5],
            m[1] * m[7] - m[3] * m[5],
            m[2] * m[7] - m[3] * m[6],
            m[8] * m[13] - m[9] * m[12],
            m[8] * m[14] - m[10] * m[12],
            m[8] * m[15] - m[11] * m[12],
            m[9] * m[14] - m[10] * m[13],
            m[9] * m[15] - m[11] * m[13],
            m[10] * m[15] - m[11] * m[14],
        ]
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let b = self.minors();
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if `|det| < 1e-4`.
    pub fn inverse(&self) -> Option<Self> {
        let b = self.minors();
        let det = b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6];
        if det.abs() < SINGULAR_EPSILON {
            trace!(det, "Matrix4x4::inverse: singular");
            return None;
        }
        let inv = 1.0 / det;

        let a = &self.m;
        Some(Self::from_cols_array([
            (a[5] * b[11] - a[6] * b[10] + a[7] * b[9]) * inv,
            (a[2] * b[10] - a[1] * b[11] - a[3] * b[9]) * inv,
            (a[13] * b[5] - a[14] * b[4] + a[15] * b[3]) * inv,
            (a[10] * b[4] - a[9] * b[5] - a[11] * b[3]) * inv,
            (a[6] * b[8] - a[4] * b[11] - a[7] * b[7]) * inv,
            (a[0] * b[11] - a[2] * b[8] + a[3] * b[7]) * inv,
            (a[14] * b[2] - a[12] * b[5] - a[15] * b[1]) * inv,
            (a[8] * b[5] - a[10] * b[2] + a[11] * b[1]) * inv,
            (a[4] * b[10] - a[5] * b[8] + a[7] * b[6]) * inv,
            (a[1] * b[8] - a[0] * b[10] - a[3] * b[6]) * inv,
            (a[12] * b[4] - a[13] * b[2] + a[15] * b[0]) * inv,
            (a[9] * b[2] - a[8] * b[4] - a[11] * b[0]) * inv,
            (a[5] * b[7] - a[4] * b[9] - a[6] * b[6]) * inv,
            (a[0] * b[9] - a[1] * b[7] + a[2] * b[6]) * inv,
            (a[13] * b[1] - a[12] * b[3] - a[14] * b[0]) * inv,
            (a[8] * b[3] - a[9] * b[1] + a[10] * b[0]) * inv,
        ]))
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }
        Self { m: out }
    }

    /// Multiplies every element by `s`.
    #[inline]
    pub fn multiply_scalar(&self, s: f32) -> Self {
        Self { m: self.m.map(|v| v * s) }
    }

    /// Appends a translation: returns `self * T(v)`.
    pub fn translate(&self, v: Vector3) -> Self {
        let mut out = *self;
        for row in 0..4 {
            out.m[12 + row] =
                self.m[row] * v.x + self.m[4 + row] * v.y + self.m[8 + row] * v.z + self.m[12 + row];
        }
        out
    }

    /// Appends a non-uniform scale: returns `self * S(v)`.
    pub fn scale(&self, v: Vector3) -> Self {
        let mut out = *self;
        for row in 0..4 {
            out.m[row] *= v.x;
            out.m[4 + row] *= v.y;
            out.m[8 + row] *= v.z;
        }
        out
    }

    /// Appends a rotation of `radians` about `axis`: returns `self * R`.
    ///
    /// The axis is normalized first. Returns `None` for a zero-length axis.
    ///
    /// ```rust
    /// use lumen_math::{Matrix4x4, Vector3};
    ///
    /// let r = Matrix4x4::IDENTITY
    ///     .rotate(std::f32::consts::FRAC_PI_2, Vector3::up())
    ///     .unwrap();
    /// let v = Vector3::right().apply_matrix4(&r);
    /// assert!((v.z + 1.0).abs() < 1e-6);
    ///
    /// assert!(Matrix4x4::IDENTITY.rotate(1.0, Vector3::ZERO).is_none());
    /// ```
    pub fn rotate(&self, radians: f32, axis: Vector3) -> Option<Self> {
        let len = axis.length();
        if len == 0.0 {
            trace!("Matrix4x4::rotate: zero-length axis");
            return None;
        }
        let Vector3 { x, y, z } = axis * (1.0 / len);
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        let rot = Self::from_cols_array([
            x * x * t + c,
            x * y * t + z * s,
            x * z * t - y * s,
            0.0,
            x * y * t - z * s,
            y * y * t + c,
            y * z * t + x * s,
            0.0,
            x * z * t + y * s,
            y * z * t - x * s,
            z * z * t + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ]);
        Some(self.mul_mat(&rot))
    }

    /// [`rotate`](Self::rotate) with the angle in degrees.
    #[inline]
    pub fn rotate_degrees(&self, degrees: f32, axis: Vector3) -> Option<Self> {
        self.rotate(degrees.to_radians(), axis)
    }

    /// Builds a view matrix looking from `eye` towards `target`.
    ///
    /// The basis is `z = normalize(eye - target)`, `x = normalize(z x up)`,
    /// `y = normalize(x x z)`; these become the rows of the upper 3x3 and the
    /// translation column is `-(eye . axis)` per axis.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let z = (eye - target).normalize();
        let x = z.cross(up).normalize();
        let y = x.cross(z).normalize();

        Self::from_cols_array([
            x.x,
            y.x,
            z.x,
            0.0,
            x.y,
            y.y,
            z.y,
            0.0,
            x.z,
            y.z,
            z.z,
            0.0,
            -eye.dot(x),
            -eye.dot(y),
            -eye.dot(z),
            1.0,
        ])
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y_degrees` is the full vertical field of view.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let ymax = near * (fov_y_degrees.to_radians() * 0.5).tan();
        let xmax = ymax * aspect;
        Self::make_frustum(-xmax, xmax, -ymax, ymax, near, far)
    }

    /// OpenGL-style frustum projection mapping view depth `[-near, -far]`
    /// to NDC `[-1, 1]`.
    pub fn make_frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let vw = right - left;
        let vh = top - bottom;
        let depth = far - near;

        let mut m = [0.0; 16];
        m[0] = 2.0 * near / vw;
        m[5] = 2.0 * near / vh;
        m[8] = (right + left) / vw;
        m[9] = (top + bottom) / vh;
        m[10] = -(far + near) / depth;
        m[11] = -1.0;
        m[14] = -2.0 * far * near / depth;
        Self { m }
    }

    /// Formats the matrix as a CSS `matrix3d(...)` transform.
    ///
    /// ```rust
    /// use lumen_math::Matrix4x4;
    ///
    /// assert_eq!(
    ///     Matrix4x4::IDENTITY.to_css_matrix_string(),
    ///     "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1)"
    /// );
    /// ```
    pub fn to_css_matrix_string(&self) -> String {
        let values: Vec<String> = self
            .m
            .iter()
            .map(|&v| if v.abs() < CSS_EPSILON { 0.0 } else { v })
            .map(|v| v.to_string())
            .collect();
        format!("matrix3d({})", values.join(","))
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix4x4 * Vector4
impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        rhs.apply_matrix4(&self)
    }
}

// Matrix4x4 * Matrix4x4
impl Mul for Matrix4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Matrix4x4 * f32
impl Mul<f32> for Matrix4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl From<[f32; 16]> for Matrix4x4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self { m }
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix4x4> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix4x4) -> Self {
        glam::Mat4::from_cols_array(&m.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_mat_eq(a: &Matrix4x4, b: &Matrix4x4, eps: f32) {
        for (x, y) in a.m.iter().zip(b.m.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = eps);
        }
    }

    fn sample() -> Matrix4x4 {
        Matrix4x4::IDENTITY
            .translate(Vector3::new(1.0, -2.0, 3.0))
            .rotate(0.7, Vector3::new(1.0, 1.0, 0.0))
            .map(|m| m.scale(Vector3::new(2.0, 1.0, 0.5)))
            .unwrap_or(Matrix4x4::ZERO)
    }

    #[test]
    fn test_identity() {
        let mut m = sample();
        m.set_identity();
        assert_eq!(m, Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::default(), Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_mul_identity() {
        let a = sample();
        assert_eq!(a * Matrix4x4::IDENTITY, a);
        assert_eq!(Matrix4x4::IDENTITY * a, a);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let a = sample();
        let inv = a.inverse().expect("sample is invertible");
        assert_mat_eq(&(a * inv), &Matrix4x4::IDENTITY, 1e-5);
        assert_mat_eq(&(inv * a), &Matrix4x4::IDENTITY, 1e-5);
    }

    #[test]
    fn test_inverse_singular() {
        assert!(Matrix4x4::ZERO.inverse().is_none());
        let flat = Matrix4x4::IDENTITY.scale(Vector3::new(1.0, 1.0, 0.0));
        assert!(flat.inverse().is_none());
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix4x4::IDENTITY.determinant(), 1.0);
        let s = Matrix4x4::IDENTITY.scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(s.determinant(), 24.0);
        assert_abs_diff_eq!(sample().determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix4x4::from_cols_array(std::array::from_fn(|i| i as f32));
        let t = m.transpose();
        assert_eq!(t.row(1), m.col(1));
        assert_eq!(t.m[1], 4.0);
        assert_eq!(t.m[4], 1.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_translate() {
        let t = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.col(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
        let p = Vector3::new(1.0, 1.0, 1.0).apply_matrix4(&t);
        assert_eq!(p, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_scale_then_translate_order() {
        // translate is appended on the right, so it is scaled too
        let m = Matrix4x4::IDENTITY
            .scale(Vector3::splat(2.0))
            .translate(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::ZERO.apply_matrix4(&m), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_axes() {
        let r = Matrix4x4::IDENTITY
            .rotate(FRAC_PI_2, Vector3::new(0.0, 0.0, 1.0))
            .expect("non-zero axis");
        let v = Vector3::right().apply_matrix4(&r);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-6);

        // non-unit axis is normalized
        let r2 = Matrix4x4::IDENTITY
            .rotate(FRAC_PI_2, Vector3::new(0.0, 0.0, 5.0))
            .expect("non-zero axis");
        assert_mat_eq(&r, &r2, 1e-6);
    }

    #[test]
    fn test_rotate_degrees() {
        let a = Matrix4x4::IDENTITY.rotate(PI, Vector3::up());
        let b = Matrix4x4::IDENTITY.rotate_degrees(180.0, Vector3::up());
        assert_mat_eq(&a.unwrap_or(Matrix4x4::ZERO), &b.unwrap_or(Matrix4x4::IDENTITY), 1e-6);
    }

    #[test]
    fn test_rotate_zero_axis() {
        assert!(Matrix4x4::IDENTITY.rotate(0.5, Vector3::ZERO).is_none());
    }

    #[test]
    fn test_make_frustum() {
        let f = Matrix4x4::make_frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(f.m[0], 1.0);
        assert_eq!(f.m[5], 1.0);
        assert_eq!(f.m[8], 0.0);
        assert_eq!(f.m[10], -2.0);
        assert_eq!(f.m[11], -1.0);
        assert_eq!(f.m[14], -3.0);
        assert_eq!(f.m[15], 0.0);
    }

    #[test]
    fn test_perspective_maps_near_far() {
        let p = Matrix4x4::perspective(90.0, 1.0, 1.0, 10.0);
        let near = Vector4::new(0.0, 0.0, -1.0, 1.0).apply_matrix4(&p);
        let far = Vector4::new(0.0, 0.0, -10.0, 1.0).apply_matrix4(&p);
        assert_abs_diff_eq!(near.z / near.w, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.m[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_look_at() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let view = Matrix4x4::look_at(eye, Vector3::ZERO, Vector3::up());
        // eye goes to the origin
        let e = eye.apply_matrix4(&view);
        assert_abs_diff_eq!(e.length(), 0.0, epsilon = 1e-6);
        // target lies straight down -z
        let t = Vector3::ZERO.apply_matrix4(&view);
        assert_abs_diff_eq!(t.z, -5.0, epsilon = 1e-6);
        assert_eq!(view.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0));
        // up stays up
        let u = Vector3::new(0.0, 1.0, 5.0).apply_matrix4(&view);
        assert_abs_diff_eq!(u.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_multiply_scalar() {
        let m = Matrix4x4::IDENTITY * 3.0;
        assert_eq!(m.m[0], 3.0);
        assert_eq!(m.m[1], 0.0);
        assert_eq!(m, Matrix4x4::IDENTITY.multiply_scalar(3.0));
    }

    #[test]
    fn test_css_string() {
        let mut m = Matrix4x4::IDENTITY.translate(Vector3::new(10.0, 0.5, 0.0));
        m.m[1] = 1e-9;
        assert_eq!(m.to_css_matrix_string(), "matrix3d(1,0,0,0,0,1,0,0,0,0,1,0,10,0.5,0,1)");
    }

    #[test]
    fn test_projective_texture() {
        let p = Matrix4x4::projective_texture();
        let corner = Vector4::new(-1.0, -1.0, 0.0, 1.0).apply_matrix4(&p);
        assert_eq!(corner, Vector4::new(0.0, 1.0, 0.0, 1.0));
        let other = Vector4::new(1.0, 1.0, 0.0, 1.0).apply_matrix4(&p);
        assert_eq!(other, Vector4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_cols() {
        let m = Matrix4x4::from_cols(
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(m, Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::from_slice(&[2.0]).m[0], 2.0);
        assert_eq!(Matrix4x4::from_slice(&[2.0]).m[15], 0.0);
    }
}
