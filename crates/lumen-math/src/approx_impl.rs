//! `approx` comparisons for the kernel types.
//!
//! Every type compares element-wise, so vectors, matrices and quaternions
//! work with `assert_abs_diff_eq!`, `assert_relative_eq!` and
//! `assert_ulps_eq!` directly:
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use lumen_math::{Matrix4x4, Vector3};
//!
//! let m = Matrix4x4::IDENTITY.translate(Vector3::new(1.0, 2.0, 3.0));
//! let inv = m.inverse().unwrap();
//! assert_abs_diff_eq!(m * inv, Matrix4x4::IDENTITY, epsilon = 1e-6);
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix3x3, Matrix4x4, Quaternion, Vector2, Vector3, Vector4};

macro_rules! impl_approx {
    ($t:ty, $to_array:ident) => {
        impl AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.$to_array()
                    .iter()
                    .zip(other.$to_array().iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.$to_array()
                    .iter()
                    .zip(other.$to_array().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $t {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.$to_array()
                    .iter()
                    .zip(other.$to_array().iter())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!(Vector2, to_array);
impl_approx!(Vector3, to_array);
impl_approx!(Vector4, to_array);
impl_approx!(Quaternion, to_array);
impl_approx!(Matrix3x3, to_cols_array);
impl_approx!(Matrix4x4, to_cols_array);
