//! Rotation quaternions.
//!
//! [`Quaternion`] stores the scalar part first, `(w; x, y, z)`. A rotation
//! of angle `θ` about the unit axis `n` is `(cos(θ/2); sin(θ/2) n)`.
//!
//! Products use the Hamilton convention
//! `(a; U)(b; V) = (ab - U.V; aV + bU + U x V)`, so `p * q` applies `q`
//! first when rotating vectors with [`rotate_vector`](Quaternion::rotate_vector).
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Quaternion, Vector3};
//!
//! let q = Quaternion::rotation(std::f32::consts::FRAC_PI_2, Vector3::up());
//! let v = q.rotate_vector(Vector3::right());
//! assert!((v.z + 1.0).abs() < 1e-6);
//!
//! // same rotation as a matrix
//! let m = q.to_matrix4();
//! let w = Vector3::right().apply_matrix4(&m);
//! assert!((w - v).length() < 1e-6);
//! ```

use std::ops::{Index, IndexMut, Mul};

use crate::args::{self, Arg};
use crate::{Matrix4x4, Vector3};

/// A quaternion `(w; x, y, z)`.
///
/// `Default` is the identity rotation `(1; 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// Scalar (real) part
    pub w: f32,
    /// First imaginary component
    pub x: f32,
    /// Second imaginary component
    pub y: f32,
    /// Third imaginary component
    pub z: f32,
}

impl Quaternion {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its scalar and vector parts.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion with all four components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from `[w, x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Builds a quaternion from `[w, x, y, z]` values.
    ///
    /// An empty slice gives the identity, a single value is broadcast to
    /// all four components and missing trailing components are zero.
    #[inline]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_array(args::resolve_slice(values, Self::IDENTITY.to_array()))
    }

    /// Builds a quaternion from a mixed argument list. Same rules as
    /// [`from_slice`](Self::from_slice).
    #[inline]
    pub fn from_args(args: &[Arg<'_>]) -> Self {
        Self::from_array(args::resolve(args, Self::IDENTITY.to_array()))
    }

    /// Rotation of `radians` about `axis`.
    ///
    /// The axis is used as given; pass a unit vector for a unit quaternion.
    #[inline]
    pub fn rotation(radians: f32, axis: Vector3) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Norm of the quaternion.
    #[doc(alias = "norm")]
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit quaternion. A zero quaternion becomes the identity.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 { self * (1.0 / len) } else { Self::IDENTITY }
    }

    /// Normalizes in place. See [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn multiply_scalar(self, s: f32) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Inverse rotation.
    ///
    /// This is the conjugate, which is the true inverse only for unit
    /// quaternions.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate()
    }

    /// Hamilton product `self * other`.
    #[inline]
    pub fn mul_quat(self, q: Self) -> Self {
        let p = self;
        Self::new(
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y - p.x * q.z + p.y * q.w + p.z * q.x,
            p.w * q.z + p.x * q.y - p.y * q.x + p.z * q.w,
        )
    }

    /// Rotation matrix equivalent to this (unit) quaternion.
    pub fn to_matrix4(self) -> Matrix4x4 {
        let Self { w, x, y, z } = self;
        let (x2, y2, z2) = (2.0 * x * x, 2.0 * y * y, 2.0 * z * z);
        let (xy, yz, zx) = (2.0 * x * y, 2.0 * y * z, 2.0 * z * x);
        let (wx, wy, wz) = (2.0 * w * x, 2.0 * w * y, 2.0 * w * z);

        Matrix4x4::from_cols_array([
            1.0 - y2 - z2,
            xy + wz,
            zx - wy,
            0.0,
            xy - wz,
            1.0 - z2 - x2,
            yz + wx,
            0.0,
            zx + wy,
            yz - wx,
            1.0 - x2 - y2,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Spherical linear interpolation from `self` (t = 0) to `other` (t = 1).
    ///
    /// When the inputs are parallel (`1 - dot^2 <= 0`) `self` is returned.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        // rounding leaves self.dot(self) a hair off 1 for most unit quaternions
        if self == other {
            return self;
        }
        let cos_half = self.dot(other);
        let ss = 1.0 - cos_half * cos_half;
        if ss <= 0.0 {
            return self;
        }

        let sin_half = ss.sqrt();
        let ph = cos_half.acos();
        let pt = ph * t;
        let t1 = (ph - pt).sin() / sin_half;
        let t2 = pt.sin() / sin_half;
        self * t1 + other * t2
    }

    /// Vector part of `self^-1 * (0; v) * self`.
    ///
    /// For a unit quaternion this rotates `v` by the inverse rotation, i.e.
    /// it maps a world-space vector into the frame described by `self`.
    pub fn to_vec3(self, v: Vector3) -> Vector3 {
        let pure = Self::new(0.0, v.x, v.y, v.z);
        self.inverse().mul_quat(pure).mul_quat(self).xyz()
    }

    /// Rotates `v` by this unit quaternion (`q v q^-1`).
    ///
    /// Agrees with `v.apply_matrix4(&self.to_matrix4())`.
    pub fn rotate_vector(self, v: Vector3) -> Vector3 {
        let q = self.xyz();
        let tmp = v * self.w + q.cross(v);
        let tmp_w = q.dot(v);
        q * tmp_w + tmp * self.w + q.cross(tmp)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Quaternion * Quaternion
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_quat(rhs)
    }
}

// Quaternion * f32
impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

// Quaternion + Quaternion, used by slerp
impl std::ops::Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quaternion index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("Quaternion index out of bounds: {}", i),
        }
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
