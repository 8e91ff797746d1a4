//! 3D vector type.
//!
//! [`Vector3`] is the workhorse for positions, normals and directions, and
//! doubles as an RGB triple through the `r/g/b` accessors.
//!
//! Positions are transformed by [`Matrix4x4`] as the homogeneous point
//! `(x, y, z, 1)`; directions by the upper 3x3 via [`Matrix3x3`].
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4x4, Vector3};
//!
//! let model = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 0.0, 0.0));
//! let p = Vector3::zero().apply_matrix4(&model);
//! assert_eq!(p, Vector3::new(1.0, 0.0, 0.0));
//!
//! let n = Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0));
//! assert_eq!(n, Vector3::forward());
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::args::{self, Arg};
use crate::{Matrix3x3, Matrix4x4, Vector2, Vector4};

/// A 3D vector with `f32` components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, index `[0]..[2]`, or the color aliases
/// [`r`](Self::r), [`g`](Self::g), [`b`](Self::b).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component (R for colors)
    pub x: f32,
    /// Y component (G for colors)
    pub y: f32,
    /// Z component (B for colors)
    pub z: f32,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Builds a vector from a slice, truncating or zero-padding.
    ///
    /// A single value is broadcast; an empty slice gives the zero vector.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_array(args::resolve_slice(values, [0.0; 3]))
    }

    /// Builds a vector from a mixed argument list.
    ///
    /// ```rust
    /// use lumen_math::{Vector2, Vector3};
    ///
    /// let v = Vector3::from_args(&[Vector2::new(1.0, 2.0).into()]);
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));
    ///
    /// let v = Vector3::from_args(&[1.0.into(), Vector2::new(2.0, 3.0).into()]);
    /// assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn from_args(args: &[Arg<'_>]) -> Self {
        Self::from_array(args::resolve(args, [0.0; 3]))
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: `#[repr(C)]` struct of three `f32` fields.
        unsafe { std::slice::from_raw_parts(self as *const Self as *const f32, 3) }
    }

    /// Returns `(0, 0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns `(0, 1, 0)`.
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns `(0, -1, 0)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// Returns `(0, 0, 1)`.
    #[inline]
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns `(0, 0, -1)`.
    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// Returns `(1, 0, 0)`.
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns `(-1, 0, 0)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// The `(x, y)` pair.
    #[inline]
    pub const fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Overwrites `x` and `y`.
    #[inline]
    pub fn set_xy(&mut self, v: Vector2) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    /// Red channel (alias of `x`).
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green channel (alias of `y`).
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue channel (alias of `z`).
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// Red and green channels.
    #[inline]
    pub const fn rg(self) -> Vector2 {
        self.xy()
    }

    /// Sets the red channel.
    #[inline]
    pub fn set_r(&mut self, r: f32) -> &mut Self {
        self.x = r;
        self
    }

    /// Sets the green channel.
    #[inline]
    pub fn set_g(&mut self, g: f32) -> &mut Self {
        self.y = g;
        self
    }

    /// Sets the blue channel.
    #[inline]
    pub fn set_b(&mut self, b: f32) -> &mut Self {
        self.z = b;
        self
    }

    /// Sets the red and green channels.
    #[inline]
    pub fn set_rg(&mut self, rg: Vector2) -> &mut Self {
        self.set_xy(rg)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[doc(alias = "norm")]
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { self }
    }

    /// Normalizes in place. A zero vector is left unchanged.
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Negated vector.
    #[inline]
    pub fn minus(self) -> Self {
        -self
    }

    /// Linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Matrix-vector product `mat * self`.
    #[inline]
    pub fn apply_matrix3(self, mat: &Matrix3x3) -> Self {
        let m = &mat.m;
        Self::new(
            m[0] * self.x + m[3] * self.y + m[6] * self.z,
            m[1] * self.x + m[4] * self.y + m[7] * self.z,
            m[2] * self.x + m[5] * self.y + m[8] * self.z,
        )
    }

    /// Row-vector product `self * mat`: component `i` is `self` dotted with
    /// column `i`.
    #[inline]
    pub fn apply_matrix3_from_right(self, mat: &Matrix3x3) -> Self {
        let m = &mat.m;
        Self::new(
            self.x * m[0] + self.y * m[1] + self.z * m[2],
            self.x * m[3] + self.y * m[4] + self.z * m[5],
            self.x * m[6] + self.y * m[7] + self.z * m[8],
        )
    }

    /// Transforms the point `(x, y, z, 1)` by `mat`, dropping the `w` row.
    #[inline]
    pub fn apply_matrix4(self, mat: &Matrix4x4) -> Self {
        let m = &mat.m;
        Self::new(
            m[0] * self.x + m[4] * self.y + m[8] * self.z + m[12],
            m[1] * self.x + m[5] * self.y + m[9] * self.z + m[13],
            m[2] * self.x + m[6] * self.y + m[10] * self.z + m[14],
        )
    }

    /// Row-vector transform of the point `(x, y, z, 1)`, dropping `w`.
    #[inline]
    pub fn apply_matrix4_from_right(self, mat: &Matrix4x4) -> Self {
        let m = &mat.m;
        Self::new(
            self.x * m[0] + self.y * m[1] + self.z * m[2] + m[3],
            self.x * m[4] + self.y * m[5] + self.z * m[6] + m[7],
            self.x * m[8] + self.y * m[9] + self.z * m[10] + m[11],
        )
    }

    /// Projects the point through `mat` into normalized device coordinates.
    ///
    /// Returns `None` only when every clip coordinate falls outside
    /// `[-w, w]`. A point outside the volume along one or two axes still
    /// projects. Points behind the eye (`w < 0`) never pass the check.
    ///
    /// ```rust
    /// use lumen_math::{Matrix4x4, Vector3};
    ///
    /// let proj = Matrix4x4::perspective(90.0, 1.0, 1.0, 100.0);
    /// assert!(Vector3::new(0.0, 0.0, -10.0).apply_projection(&proj).is_some());
    /// assert!(Vector3::new(0.0, 0.0, 10.0).apply_projection(&proj).is_none());
    /// ```
    pub fn apply_projection(self, mat: &Matrix4x4) -> Option<Self> {
        let m = &mat.m;
        let w = m[3] * self.x + m[7] * self.y + m[11] * self.z + m[15];
        let clip = self.apply_matrix4(mat);
        let inside = |c: f32| -w <= c && c <= w;
        if inside(clip.x) || inside(clip.y) || inside(clip.z) {
            Some(clip / w)
        } else {
            None
        }
    }

    /// Reflects the vector about a surface with unit `normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * (2.0 * -self.dot(normal))
    }

    /// Unsigned angle in radians, in `[0, pi]`, between the direction
    /// `self -> to` and the direction of `self` from the origin.
    ///
    /// A zero `self` is nudged to `(1e-5, 0, 0)`.
    pub fn look_at_rad(self, to: Self) -> f32 {
        let from = if self == Self::ZERO { Self::new(0.00001, 0.0, 0.0) } else { self };
        let a = (to - from).normalize();
        let b = from.normalize();
        a.dot(b).clamp(-1.0, 1.0).acos()
    }

    /// [`look_at_rad`](Self::look_at_rad) in degrees.
    #[inline]
    pub fn look_at_deg(self, to: Self) -> f32 {
        self.look_at_rad(to).to_degrees()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

// Vector3 + Vector3
impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Vector3 - Vector3
impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vector3 * Vector3 (component-wise)
impl Mul for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_elem(rhs)
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_elem(rhs);
    }
}

// Vector3 * f32
impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

// f32 * Vector3
impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

// Vector3 / f32
impl Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_from_args() {
        let v2 = Vector2::new(1.0, 2.0);
        assert_eq!(Vector3::from_args(&[]), Vector3::ZERO);
        assert_eq!(Vector3::from_args(&[4.0.into()]), Vector3::splat(4.0));
        assert_eq!(Vector3::from_args(&[v2.into()]), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(Vector3::from_args(&[v2.into(), 9.0.into()]), Vector3::new(1.0, 2.0, 9.0));
        assert_eq!(Vector3::from_args(&[0.5.into(), v2.into()]), Vector3::new(0.5, 1.0, 2.0));
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Vector3::from_args(&[(&data).into()]), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_truncating_from() {
        let v4 = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vector3::from(v4), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_directions() {
        assert_eq!(Vector3::up(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Vector3::down(), -Vector3::up());
        assert_eq!(Vector3::forward(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3::back(), -Vector3::forward());
        assert_eq!(Vector3::right(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::left(), -Vector3::right());
    }

    #[test]
    fn test_accessors() {
        let mut v = Vector3::new(0.1, 0.2, 0.3);
        assert_eq!(v.r(), 0.1);
        assert_eq!(v.g(), 0.2);
        assert_eq!(v.b(), 0.3);
        assert_eq!(v.rg(), Vector2::new(0.1, 0.2));
        v.set_xy(Vector2::new(5.0, 6.0)).set_b(7.0);
        assert_eq!(v, Vector3::new(5.0, 6.0, 7.0));
        v.set_r(1.0).set_g(2.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        assert_eq!(v, Vector3::new(0.0, 3.0, 4.0));

        let mut m = v;
        m.normalize_mut();
        assert_abs_diff_eq!(m.y, 0.6, epsilon = 1e-6);

        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    }

    #[test]
    fn test_apply_matrix3() {
        let m = Matrix3x3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let v = Vector3::new(3.0, 5.0, 7.0).apply_matrix3(&m);
        assert_eq!(v, Vector3::new(72.0, 87.0, 102.0));
    }

    #[test]
    fn test_apply_matrix3_from_right() {
        let m = Matrix3x3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v.apply_matrix3_from_right(&m), Vector3::new(6.0, 15.0, 24.0));
        // row-vector product equals the transposed column product
        assert_eq!(v.apply_matrix3_from_right(&m), v.apply_matrix3(&m.transpose()));
    }

    #[test]
    fn test_apply_matrix4_translation() {
        let t = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::ZERO.apply_matrix4(&t), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_apply_matrix4_from_right() {
        let t = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 2.0, 3.0));
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(p.apply_matrix4_from_right(&t.transpose()), p.apply_matrix4(&t));
    }

    #[test]
    fn test_apply_projection() {
        let proj = Matrix4x4::perspective(90.0, 1.0, 1.0, 100.0);
        let ndc = Vector3::new(0.0, 0.0, -10.0).apply_projection(&proj);
        let ndc = ndc.expect("point in front of the camera");
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);

        // behind the camera
        assert!(Vector3::new(0.0, 0.0, 10.0).apply_projection(&proj).is_none());
        // outside the horizontal extent only: y and z still pass
        let side = Vector3::new(50.0, 0.0, -10.0).apply_projection(&proj);
        let side = side.expect("partially visible point projects");
        assert_abs_diff_eq!(side.x, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(side.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_apply_projection_clipped_on_every_axis() {
        let proj = Matrix4x4::perspective(90.0, 1.0, 1.0, 100.0);
        // w = 200: x and y beyond w, z beyond the far plane
        assert!(Vector3::new(500.0, -500.0, -200.0).apply_projection(&proj).is_none());
        // behind the eye w is negative, so no axis can pass
        assert!(Vector3::new(0.5, 0.5, 5.0).apply_projection(&proj).is_none());
    }

    #[test]
    fn test_reflect() {
        let r = Vector3::new(1.0, 1.0, 1.0).reflect(Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(r, Vector3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_look_at() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(from.look_at_rad(Vector3::new(1.0, 1.0, 0.0)), FRAC_PI_2, epsilon = 1e-5);
        assert_abs_diff_eq!(from.look_at_rad(Vector3::new(1.0, -1.0, 0.0)), FRAC_PI_2, epsilon = 1e-5);
        assert_abs_diff_eq!(from.look_at_rad(Vector3::ZERO), PI, epsilon = 1e-5);
        assert_abs_diff_eq!(from.look_at_deg(Vector3::new(2.0, 0.0, 1.0)), 45.0, epsilon = 1e-3);
        assert!(Vector3::ZERO.look_at_rad(Vector3::new(0.0, 1.0, 0.0)).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.5).to_string(), "1,2,3.5");
    }

    #[test]
    fn test_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a * a, Vector3::new(1.0, 4.0, 9.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(a - a, Vector3::ZERO);
        let mut b = a;
        b *= 3.0;
        assert_eq!(b, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(a.lerp(b, 0.5), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g.cross(glam::Vec3::X), glam::Vec3::from(v.cross(Vector3::right())));
        assert_eq!(Vector3::from(g), v);
    }
}
