//! Interpolation utilities.
//!
//! Scalar helpers ([`lerp`], [`fade`], [`clamp`], [`saturate`],
//! [`smoothstep`]) plus [`Spline`], a natural cubic spline through evenly
//! spaced control values.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::{lerp, Spline};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! let spline = Spline::new(&[0.0, 1.0, 0.0])?;
//! assert_eq!(spline.evaluate(1.0), 1.0);
//! # Ok::<(), lumen_core::Error>(())
//! ```

use lumen_core::{Error, Result};

/// Linear interpolation: `a + (b - a) * t`.
///
/// ```rust
/// use lumen_math::lerp;
///
/// assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at `t = 0` and `t = 1`.
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Clamps a value to `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to `[0, 1]`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Hermite smoothstep between two edges.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Natural cubic spline through `n + 1` evenly spaced control values.
///
/// Segment `j` covers `t` in `[j, j + 1]` and evaluates
/// `a[j] + b[j] dt + c[j] dt^2 + d[j] dt^3` with `dt = t - j`. The second
/// derivative is zero at both ends.
///
/// # Example
///
/// ```rust
/// use lumen_math::Spline;
///
/// let s = Spline::new(&[0.0, 2.0, 4.0, 6.0])?;
/// assert_eq!(s.segments(), 3);
/// // collinear points give a straight line
/// assert!((s.evaluate(1.5) - 3.0).abs() < 1e-5);
/// # Ok::<(), lumen_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spline {
    a: Vec<f32>,
    b: Vec<f32>,
    c: Vec<f32>,
    d: Vec<f32>,
}

impl Spline {
    /// Fits a spline through `values`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `values` is empty.
    pub fn new(values: &[f32]) -> Result<Self> {
        let mut spline = Self::default();
        spline.fit(values)?;
        Ok(spline)
    }

    /// Re-fits the spline in place, reusing its buffers.
    ///
    /// On error the previous fit is left untouched.
    pub fn fit(&mut self, values: &[f32]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::empty_input("spline"));
        }
        let num = values.len() - 1;

        self.a.clear();
        self.a.extend_from_slice(values);
        let a = &self.a;

        // Second-derivative coefficients: tridiagonal system with c[0] = c[num] = 0
        let c = &mut self.c;
        c.clear();
        c.resize(num + 1, 0.0);
        for i in 1..num {
            c[i] = 3.0 * (a[i - 1] - 2.0 * a[i] + a[i + 1]);
        }

        let mut w = vec![0.0f32; num + 1];
        for i in 1..num {
            let tmp = 4.0 - w[i - 1];
            c[i] = (c[i] - c[i - 1]) / tmp;
            w[i] = 1.0 / tmp;
        }
        for i in (1..num).rev() {
            c[i] -= c[i + 1] * w[i];
        }

        let b = &mut self.b;
        let d = &mut self.d;
        b.clear();
        b.resize(num + 1, 0.0);
        d.clear();
        d.resize(num + 1, 0.0);
        for i in 0..num {
            d[i] = (c[i + 1] - c[i]) / 3.0;
            b[i] = a[i + 1] - a[i] - c[i] - d[i];
        }

        Ok(())
    }

    /// Number of segments (control values minus one).
    #[inline]
    pub fn segments(&self) -> usize {
        self.a.len().saturating_sub(1)
    }

    /// Evaluates the spline at parameter `t` in `[0, segments]`.
    ///
    /// Values outside the range extrapolate the first or last segment. A
    /// spline with a single control value is constant.
    pub fn evaluate(&self, t: f32) -> f32 {
        let num = self.segments();
        if num == 0 {
            return self.a.first().copied().unwrap_or(0.0);
        }

        let floor = t.floor();
        let j = if floor < 0.0 {
            0
        } else {
            (floor as usize).min(num - 1)
        };
        let dt = t - j as f32;
        self.a[j] + (self.b[j] + (self.c[j] + self.d[j] * dt) * dt) * dt
    }
}
