//! 2D vector type.
//!
//! [`Vector2`] covers screen-space points, texture coordinates and 2D
//! directions. Affine 2D transforms are applied with [`Matrix3x3`], treating
//! the vector as the homogeneous point `(x, y, 1)`.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix3x3, Vector2};
//!
//! let p = Vector2::new(1.0, 0.0);
//! let rotated = p.apply_matrix3(&Matrix3x3::rotation(std::f32::consts::FRAC_PI_2));
//! assert!((rotated.y - 1.0).abs() < 1e-6);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::args::{self, Arg};
use crate::{Matrix3x3, Vector3, Vector4};

/// A 2D vector with `f32` components.
///
/// # Example
///
/// ```rust
/// use lumen_math::Vector2;
///
/// let a = Vector2::new(3.0, 4.0);
/// assert_eq!(a.length(), 5.0);
/// assert_eq!(a[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Builds a vector from a slice.
    ///
    /// Extra values are ignored, missing ones are zero and a single value is
    /// broadcast. An empty slice gives the zero vector.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_array(args::resolve_slice(values, [0.0; 2]))
    }

    /// Builds a vector from a mixed argument list. See [`Arg`].
    ///
    /// ```rust
    /// use lumen_math::Vector2;
    ///
    /// assert_eq!(Vector2::from_args(&[]), Vector2::ZERO);
    /// assert_eq!(Vector2::from_args(&[2.0.into()]), Vector2::splat(2.0));
    /// ```
    #[inline]
    pub fn from_args(args: &[Arg<'_>]) -> Self {
        Self::from_array(args::resolve(args, [0.0; 2]))
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: `#[repr(C)]` struct of two `f32` fields.
        unsafe { std::slice::from_raw_parts(self as *const Self as *const f32, 2) }
    }

    /// Returns `(0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns `(0, 1)`.
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns `(0, -1)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// Returns `(1, 0)`.
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Returns `(-1, 0)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar cross product `x1 * y2 - y1 * x2`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
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
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Multiplies both components by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
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
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Transforms the point `(x, y, 1)` by `mat` and keeps the first two rows.
    #[inline]
    pub fn apply_matrix3(self, mat: &Matrix3x3) -> Self {
        let m = &mat.m;
        Self::new(
            m[0] * self.x + m[3] * self.y + m[6],
            m[1] * self.x + m[4] * self.y + m[7],
        )
    }

    /// Reflects the vector about a surface with unit `normal`.
    ///
    /// ```rust
    /// use lumen_math::Vector2;
    ///
    /// let r = Vector2::new(1.0, -1.0).reflect(Vector2::up());
    /// assert_eq!(r, Vector2::new(1.0, 1.0));
    /// ```
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * (2.0 * -self.dot(normal))
    }

    /// Closest point to `p` on the segment `e0..e1`.
    ///
    /// A degenerate segment returns `e0`.
    pub fn detect_point_on_line(e0: Self, e1: Self, p: Self) -> Self {
        let dir = e1 - e0;
        let a = dir.length_squared();
        if a == 0.0 {
            return e0;
        }
        let b = dir.dot(e0 - p);
        let t = (-b / a).clamp(0.0, 1.0);
        e0 + dir * t
    }

    /// Signed angle in radians between the direction `self -> to` and the
    /// direction of `self` from the origin.
    ///
    /// The result is negated when the cross product of the two unit vectors is
    /// positive. A zero `self` is nudged to `(1e-5, 0)`.
    pub fn look_at_rad(self, to: Self) -> f32 {
        let from = if self == Self::ZERO { Self::new(0.00001, 0.0) } else { self };
        let a = (to - from).normalize();
        let b = from.normalize();
        let angle = a.dot(b).clamp(-1.0, 1.0).acos();
        if a.cross(b) > 0.0 { -angle } else { angle }
    }

    /// [`look_at_rad`](Self::look_at_rad) in degrees.
    #[inline]
    pub fn look_at_deg(self, to: Self) -> f32 {
        self.look_at_rad(to).to_degrees()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

// Vector2 + Vector2
impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Vector2 - Vector2
impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vector2 * Vector2 (component-wise)
impl Mul for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_elem(rhs)
    }
}

impl MulAssign for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_elem(rhs);
    }
}

// Vector2 * f32
impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

// f32 * Vector2
impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.scale(self)
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

// Vector2 / f32
impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector4> for Vector2 {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_constructors() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::from_slice(&[]), Vector2::ZERO);
        assert_eq!(Vector2::from_slice(&[3.0]), Vector2::new(3.0, 3.0));
        assert_eq!(Vector2::from_slice(&[1.0, 2.0, 3.0]), Vector2::new(1.0, 2.0));
        assert_eq!(Vector2::from(Vector3::new(1.0, 2.0, 3.0)), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_directions() {
        assert_eq!(Vector2::up(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::down(), Vector2::new(0.0, -1.0));
        assert_eq!(Vector2::right(), Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::left(), Vector2::new(-1.0, 0.0));
        assert_eq!(Vector2::zero(), Vector2::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);
        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(a * b, Vector2::new(3.0, 10.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(a.minus(), Vector2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0, 4.0);
        let n = v.normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_eq!(v, Vector2::new(3.0, 4.0));

        let mut z = Vector2::ZERO;
        z.normalize_mut();
        assert_eq!(z, Vector2::ZERO);
    }

    #[test]
    fn test_apply_matrix3_rotation() {
        let r = Vector2::new(1.0, 0.0).apply_matrix3(&Matrix3x3::rotation(FRAC_PI_2));
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_apply_matrix3_translation() {
        let t = Matrix3x3::translation(Vector2::new(2.0, -1.0));
        assert_eq!(Vector2::new(1.0, 1.0).apply_matrix3(&t), Vector2::new(3.0, 0.0));
    }

    #[test]
    fn test_reflect() {
        let r = Vector2::new(1.0, 1.0).reflect(Vector2::new(-1.0, 0.0));
        assert_eq!(r, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn test_detect_point_on_line() {
        let e0 = Vector2::new(0.0, 0.0);
        let e1 = Vector2::new(10.0, 0.0);
        assert_eq!(Vector2::detect_point_on_line(e0, e1, Vector2::new(5.0, 3.0)), Vector2::new(5.0, 0.0));
        assert_eq!(Vector2::detect_point_on_line(e0, e1, Vector2::new(-4.0, 1.0)), e0);
        assert_eq!(Vector2::detect_point_on_line(e0, e1, Vector2::new(20.0, 1.0)), e1);
        assert_eq!(Vector2::detect_point_on_line(e1, e1, Vector2::new(1.0, 1.0)), e1);
    }

    #[test]
    fn test_look_at() {
        // from (1,0) towards (1,1): direction (0,1) is 90 degrees off (1,0)
        let from = Vector2::new(1.0, 0.0);
        let a = from.look_at_rad(Vector2::new(1.0, 1.0));
        assert_abs_diff_eq!(a, FRAC_PI_2, epsilon = 1e-5);

        let b = from.look_at_rad(Vector2::new(1.0, -1.0));
        assert_abs_diff_eq!(b, -FRAC_PI_2, epsilon = 1e-5);

        let c = from.look_at_deg(Vector2::new(2.0, 1.0));
        assert_abs_diff_eq!(c, 45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(from.look_at_rad(Vector2::new(0.0, 0.0)), PI, epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_from_origin() {
        let a = Vector2::ZERO.look_at_rad(Vector2::new(1.0, 0.0));
        assert!(a.is_finite());
        assert_abs_diff_eq!(a, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.0, 2.5).to_string(), "1,2.5");
    }

    #[test]
    fn test_index() {
        let mut v = Vector2::new(1.0, 2.0);
        v[1] = 5.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v.as_slice(), &[1.0, 5.0]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vector2::ZERO;
        let _ = v[2];
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vector2::new(1.5, -2.0);
        let g: glam::Vec2 = v.into();
        assert_eq!(Vector2::from(g), v);
    }
}
