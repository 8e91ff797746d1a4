//! 3x3 matrix type for 2D affine transforms and 3D linear maps.
//!
//! # Convention
//!
//! Matrices are stored in **column-major** order and use **column vectors**,
//! matching OpenGL/WebGL uniform layout:
//!
//! ```text
//! | m[0] m[3] m[6] |   | x |
//! | m[1] m[4] m[7] | * | y |
//! | m[2] m[5] m[8] |   | z |
//! ```
//!
//! For 2D work the third column carries the translation and vectors are the
//! homogeneous point `(x, y, 1)`.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix3x3, Vector2};
//!
//! let m = Matrix3x3::translation(Vector2::new(10.0, 0.0))
//!     * Matrix3x3::scaling(Vector2::new(2.0, 2.0));
//! assert_eq!(Vector2::new(1.0, 1.0).apply_matrix3(&m), Vector2::new(12.0, 2.0));
//! ```

use std::ops::{Index, IndexMut, Mul};

use tracing::trace;

use crate::{Vector2, Vector3};

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-4;

/// A 3x3 matrix stored column-major.
///
/// # Example
///
/// ```rust
/// use lumen_math::{Matrix3x3, Vector3};
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(Matrix3x3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x3 {
    /// Elements in column-major order: `[col0, col1, col2]`
    pub m: [f32; 9],
}

impl Matrix3x3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 9] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from nine column-major elements.
    #[inline]
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Returns the column-major elements.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 9] {
        self.m
    }

    /// Creates a matrix from column-major values.
    ///
    /// Extra values are ignored and missing ones are zero.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut m = [0.0; 9];
        for (dst, src) in m.iter_mut().zip(values) {
            *dst = *src;
        }
        Self { m }
    }

    /// Creates a matrix from three column vectors.
    #[inline]
    pub const fn from_cols(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self {
            m: [c0.x, c0.y, c0.z, c1.x, c1.y, c1.z, c2.x, c2.y, c2.z],
        }
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector3 {
        assert!(i < 3, "Matrix3x3 column out of bounds: {}", i);
        Vector3::new(self.m[i * 3], self.m[i * 3 + 1], self.m[i * 3 + 2])
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3 {
        assert!(i < 3, "Matrix3x3 row out of bounds: {}", i);
        Vector3::new(self.m[i], self.m[i + 3], self.m[i + 6])
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
    #[inline]
    pub fn transpose_mut(&mut self) -> &mut Self {
        self.m.swap(1, 3);
        self.m.swap(2, 6);
        self.m.swap(5, 7);
        self
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[7] * m[5]) - m[3] * (m[1] * m[8] - m[7] * m[2])
            + m[6] * (m[1] * m[5] - m[4] * m[2])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if `|det| < 1e-4`.
    ///
    /// ```rust
    /// use lumen_math::Matrix3x3;
    ///
    /// assert!(Matrix3x3::ZERO.inverse().is_none());
    /// assert_eq!(Matrix3x3::IDENTITY.inverse(), Some(Matrix3x3::IDENTITY));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            trace!(det, "Matrix3x3::inverse: singular");
            return None;
        }

        let m = &self.m;
        let (a11, a12, a13) = (m[0], m[3], m[6]);
        let (a21, a22, a23) = (m[1], m[4], m[7]);
        let (a31, a32, a33) = (m[2], m[5], m[8]);
        let inv_det = 1.0 / det;

        // Adjugate (transposed cofactors), column-major
        Some(Self::from_cols_array([
            (a22 * a33 - a23 * a32) * inv_det,
            (a23 * a31 - a21 * a33) * inv_det,
            (a21 * a32 - a22 * a31) * inv_det,
            (a13 * a32 - a12 * a33) * inv_det,
            (a11 * a33 - a13 * a31) * inv_det,
            (a12 * a31 - a11 * a32) * inv_det,
            (a12 * a23 - a13 * a22) * inv_det,
            (a13 * a21 - a11 * a23) * inv_det,
            (a11 * a22 - a12 * a21) * inv_det,
        ]))
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] =
                    a[row] * b[col * 3] + a[3 + row] * b[col * 3 + 1] + a[6 + row] * b[col * 3 + 2];
            }
        }
        Self { m: out }
    }

    /// Multiplies every element by `s`.
    #[inline]
    pub fn multiply_scalar(&self, s: f32) -> Self {
        Self { m: self.m.map(|v| v * s) }
    }

    /// Transforms a vector, equivalent to `self * v`.
    #[inline]
    pub fn transform(&self, v: Vector3) -> Vector3 {
        v.apply_matrix3(self)
    }

    /// 2D rotation about the origin by `radians` (counter-clockwise).
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_cols_array([
            c, s, 0.0, //
            -s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// 2D scale by `(v.x, v.y)`.
    #[inline]
    pub const fn scaling(v: Vector2) -> Self {
        Self::from_cols_array([
            v.x, 0.0, 0.0, //
            0.0, v.y, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// 2D translation by `v`.
    #[inline]
    pub const fn translation(v: Vector2) -> Self {
        Self::from_cols_array([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            v.x, v.y, 1.0,
        ])
    }

    /// Appends a translation: returns `self * translation(v)`.
    ///
    /// The first two columns are kept and the third becomes the image of
    /// the point `(v.x, v.y, 1)`.
    pub fn translate(&self, v: Vector2) -> Self {
        let m = &self.m;
        Self::from_cols_array([
            m[0],
            m[1],
            m[2],
            m[3],
            m[4],
            m[5],
            m[0] * v.x + m[3] * v.y + m[6],
            m[1] * v.x + m[4] * v.y + m[7],
            m[2] * v.x + m[5] * v.y + m[8],
        ])
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix3x3 * Vector3
impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform(rhs)
    }
}

// Matrix3x3 * Matrix3x3
impl Mul for Matrix3x3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Matrix3x3 * f32
impl Mul<f32> for Matrix3x3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl From<[f32; 9]> for Matrix3x3 {
    #[inline]
    fn from(m: [f32; 9]) -> Self {
        Self { m }
    }
}

impl From<glam::Mat3> for Matrix3x3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix3x3> for glam::Mat3 {
    #[inline]
    fn from(m: Matrix3x3) -> Self {
        glam::Mat3::from_cols_array(&m.m)
    }
}
