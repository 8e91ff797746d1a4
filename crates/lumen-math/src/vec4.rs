//! 4D vector type.
//!
//! [`Vector4`] holds homogeneous points and RGBA colors. The direction
//! factories (`zero`, `up`, ...) return homogeneous *points*, so their `w`
//! is 1; the [`ZERO`](Vector4::ZERO) constant and `Default` are all zeros.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::args::{self, Arg};
use crate::{Matrix4x4, Vector2, Vector3};

/// A 4D vector with `f32` components.
///
/// # Example
///
/// ```rust
/// use lumen_math::{Vector3, Vector4};
///
/// let p = Vector4::from_args(&[Vector3::new(1.0, 2.0, 3.0).into(), 1.0.into()]);
/// assert_eq!(p.xyz(), Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(p.w, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
    /// X component (R for colors)
    pub x: f32,
    /// Y component (G for colors)
    pub y: f32,
    /// Z component (B for colors)
    pub z: f32,
    /// W component (homogeneous weight or alpha)
    pub w: f32,
}

impl Vector4 {
    /// All zeros (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All ones (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Builds a vector from a slice, truncating or zero-padding.
    ///
    /// A single value is broadcast; an empty slice gives all zeros.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_array(args::resolve_slice(values, [0.0; 4]))
    }

    /// Builds a vector from a mixed argument list.
    ///
    /// Two or three values zero-fill the remaining components, so
    /// `(Vector2, Vector2)` and `(x, Vector2, w)` both produce full vectors.
    #[inline]
    pub fn from_args(args: &[Arg<'_>]) -> Self {
        Self::from_array(args::resolve(args, [0.0; 4]))
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: `#[repr(C)]` struct of four `f32` fields.
        unsafe { std::slice::from_raw_parts(self as *const Self as *const f32, 4) }
    }

    /// The origin point `(0, 0, 0, 1)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns `(0, 1, 0, 1)`.
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Returns `(0, -1, 0, 1)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0, 1.0)
    }

    /// Returns `(0, 0, 1, 1)`.
    #[inline]
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Returns `(0, 0, -1, 1)`.
    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0, 1.0)
    }

    /// Returns `(1, 0, 0, 1)`.
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Returns `(-1, 0, 0, 1)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0, 1.0)
    }

    /// The `(x, y)` pair.
    #[inline]
    pub const fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The `(x, y, z)` triple.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Overwrites `x` and `y`.
    #[inline]
    pub fn set_xy(&mut self, v: Vector2) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    /// Overwrites `x`, `y` and `z`.
    #[inline]
    pub fn set_xyz(&mut self, v: Vector3) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
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

    /// Red, green and blue channels.
    #[inline]
    pub const fn rgb(self) -> Vector3 {
        self.xyz()
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

    /// Sets the red, green and blue channels.
    #[inline]
    pub fn set_rgb(&mut self, rgb: Vector3) -> &mut Self {
        self.set_xyz(rgb)
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean length over all four components.
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
    /// A zero vector becomes the origin point `(0, 0, 0, 1)`.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 { self * (1.0 / len) } else { Self::zero() }
    }

    /// Normalizes in place. See [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z, self.w * other.w)
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
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
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Full matrix-vector product `mat * self`.
    #[inline]
    pub fn apply_matrix4(self, mat: &Matrix4x4) -> Self {
        let m = &mat.m;
        let Self { x, y, z, w } = self;
        Self::new(
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        )
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

// Vector4 + Vector4
impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Vector4 - Vector4
impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vector4 * Vector4 (component-wise)
impl Mul for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_elem(rhs)
    }
}

impl MulAssign for Vector4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_elem(rhs);
    }
}

// Vector4 * f32
impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

// f32 * Vector4
impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        rhs.scale(self)
    }
}

impl MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

// Vector4 / f32
impl Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vector4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Vector4> for glam::Vec4 {
    #[inline]
    fn from(v: Vector4) -> Self {
        glam::Vec4::from_array(v.to_array())
    }
}
