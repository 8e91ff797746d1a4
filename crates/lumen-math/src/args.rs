//! Flexible constructor arguments.
//!
//! The vector and quaternion types can be built from a mixed list of
//! scalars, slices and other vectors, e.g. `(x, Vector2)` or
//! `(Vector2, Vector2)`. [`Arg`] is the tagged union those constructors
//! accept; every argument is flattened in order and the result is then
//! fitted to the target arity:
//!
//! | flattened values | result                                  |
//! |------------------|-----------------------------------------|
//! | 0                | the type's default                      |
//! | 1                | broadcast to every component            |
//! | fewer than N     | remaining components are zero           |
//! | more than N      | truncated                               |
//!
//! ```rust
//! use lumen_math::{Vector2, Vector4};
//!
//! let v = Vector4::from_args(&[1.0.into(), Vector2::new(2.0, 3.0).into(), 4.0.into()]);
//! assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
//! ```

use crate::{Quaternion, Vector2, Vector3, Vector4};

/// One argument of a variadic constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// A single number.
    Scalar(f32),
    /// A borrowed run of numbers.
    Slice(&'a [f32]),
    /// Components copied out of a vector or quaternion (`len` of them are used).
    Components {
        /// Component storage, padded with zeros.
        values: [f32; 4],
        /// Number of meaningful components.
        len: usize,
    },
}

impl Arg<'_> {
    /// The numbers this argument contributes, in order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        match self {
            Arg::Scalar(s) => std::slice::from_ref(s),
            Arg::Slice(values) => values,
            Arg::Components { values, len } => &values[..*len],
        }
    }
}

impl From<f32> for Arg<'_> {
    #[inline]
    fn from(s: f32) -> Self {
        Arg::Scalar(s)
    }
}

impl<'a> From<&'a [f32]> for Arg<'a> {
    #[inline]
    fn from(values: &'a [f32]) -> Self {
        Arg::Slice(values)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for Arg<'a> {
    #[inline]
    fn from(values: &'a [f32; N]) -> Self {
        Arg::Slice(values.as_slice())
    }
}

impl From<Vector2> for Arg<'_> {
    #[inline]
    fn from(v: Vector2) -> Self {
        Arg::Components {
            values: [v.x, v.y, 0.0, 0.0],
            len: 2,
        }
    }
}

impl From<Vector3> for Arg<'_> {
    #[inline]
    fn from(v: Vector3) -> Self {
        Arg::Components {
            values: [v.x, v.y, v.z, 0.0],
            len: 3,
        }
    }
}

impl From<Vector4> for Arg<'_> {
    #[inline]
    fn from(v: Vector4) -> Self {
        Arg::Components {
            values: v.to_array(),
            len: 4,
        }
    }
}

impl From<Quaternion> for Arg<'_> {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Arg::Components {
            values: q.to_array(),
            len: 4,
        }
    }
}

/// Flattens `args` and fits the values to `N` components.
///
/// `default` is used when no values were supplied at all.
pub(crate) fn resolve<const N: usize>(args: &[Arg<'_>], default: [f32; N]) -> [f32; N] {
    let mut out = [0.0; N];
    let mut count = 0;

    for value in args.iter().flat_map(|arg| arg.as_slice().iter().copied()) {
        if count < N {
            out[count] = value;
        }
        count += 1;
    }

    match count {
        0 => default,
        1 => [out[0]; N],
        _ => out,
    }
}

/// Fits a plain slice to `N` components with the same rules as [`resolve`].
#[inline]
pub(crate) fn resolve_slice<const N: usize>(values: &[f32], default: [f32; N]) -> [f32; N] {
    resolve(&[Arg::Slice(values)], default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_uses_default() {
        assert_eq!(resolve::<3>(&[], [0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(resolve::<4>(&[], [1.0, 0.0, 0.0, 0.0]), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_resolve_single_broadcasts() {
        assert_eq!(resolve::<4>(&[Arg::Scalar(2.5)], [0.0; 4]), [2.5; 4]);
        assert_eq!(resolve_slice::<3>(&[7.0], [0.0; 3]), [7.0; 3]);
    }

    #[test]
    fn test_resolve_pads_and_truncates() {
        assert_eq!(resolve_slice::<4>(&[1.0, 2.0], [0.0; 4]), [1.0, 2.0, 0.0, 0.0]);
        assert_eq!(resolve_slice::<2>(&[1.0, 2.0, 3.0, 4.0], [0.0; 2]), [1.0, 2.0]);
    }

    #[test]
    fn test_resolve_mixed_args() {
        let v2 = Vector2::new(2.0, 3.0);
        let args = [Arg::from(1.0), Arg::from(v2), Arg::from(4.0)];
        assert_eq!(resolve::<4>(&args, [0.0; 4]), [1.0, 2.0, 3.0, 4.0]);

        let v3 = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(resolve::<4>(&[v3.into(), 4.0.into()], [0.0; 4]), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_arg_from_array_ref() {
        let data = [1.0, 2.0, 3.0];
        let arg = Arg::from(&data);
        assert_eq!(arg.as_slice(), &[1.0, 2.0, 3.0]);
    }
}
