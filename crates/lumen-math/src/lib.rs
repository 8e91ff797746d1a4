//! # lumen-math
//!
//! Linear algebra kernel for real-time graphics.
//!
//! This crate provides the value types a rendering pipeline composes:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - points, directions and colors
//! - [`Matrix3x3`], [`Matrix4x4`] - 2D affine and 3D model/view/projection transforms
//! - [`Quaternion`] - rotations, composition and slerp
//! - [`Spline`] plus scalar helpers ([`lerp`], [`fade`], [`saturate`])
//! - [`simd`] - batch transforms using `wide`
//!
//! # Design
//!
//! All matrices are stored **column-major** and use **column vectors**
//! (the OpenGL/WebGL layout), so `m[12..15]` of a [`Matrix4x4`] is the
//! translation and `a * b` applies `b` first.
//!
//! Every type is `Copy`; operations return new values. In-place variants
//! carry a `_mut` suffix or `set_` prefix. Degenerate inputs never panic:
//! [`Matrix4x4::inverse`], [`Matrix4x4::rotate`] and
//! [`Vector3::apply_projection`] return `None` instead.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{Matrix4x4, Quaternion, Vector3};
//!
//! let spin = Quaternion::rotation(0.5, Vector3::up());
//! let model = Matrix4x4::IDENTITY.translate(Vector3::new(0.0, 1.0, 0.0)) * spin.to_matrix4();
//! let view = Matrix4x4::look_at(Vector3::new(0.0, 2.0, 6.0), Vector3::ZERO, Vector3::up());
//! let proj = Matrix4x4::perspective(45.0, 4.0 / 3.0, 0.1, 100.0);
//!
//! let ndc = Vector3::ZERO.apply_projection(&(proj * view * model));
//! assert!(ndc.is_some());
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop conversions
//! - [`wide`] - Portable SIMD for batch transforms
//! - [`approx`] - Float comparisons for all kernel types
//! - `lumen-core` - Error types
//!
//! # Used By
//!
//! - `lumen-color` - RGB/HSV triples as [`Vector3`]
//! - `lumen-mesh` - Vertex generation
//! - `lumen-cli` - Camera matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod approx_impl;
mod args;
mod interp;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;
pub mod simd;

pub use args::Arg;
pub use interp::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
}
