//! Improved Perlin noise with octave summation.

use lumen_core::{Error, Result};
use tracing::debug;

use crate::Xorshift;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Permutation entries before duplication.
const TABLE_SIZE: usize = 256;

/// Gradient noise driven by a seeded permutation table.
///
/// Each octave doubles the frequency and halves the amplitude of the
/// previous one. A single octave stays close to `[-1, 1]`; each extra
/// octave widens the bound by half the previous amplitude. Integer lattice
/// points of a single octave are exactly 0.
///
/// The permutation table is read-only after construction, so a single
/// instance can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinNoise {
    octaves: u32,
    perm: Vec<u8>,
}

impl PerlinNoise {
    /// Builds the permutation table from `seed`, or from the clock if `None`.
    ///
    /// The table holds 256 draws of `floor(random * 256)` (not a shuffled
    /// permutation) repeated twice. An `octaves` count of 0 becomes 1.
    pub fn new(seed: Option<u32>, octaves: u32) -> Self {
        let mut rng = match seed {
            Some(seed) => Xorshift::new(seed),
            None => Xorshift::from_time(),
        };

        let base: Vec<u8> = (0..TABLE_SIZE)
            .map(|_| (rng.next_f64() * TABLE_SIZE as f64).floor() as u8)
            .collect();
        let mut perm = Vec::with_capacity(TABLE_SIZE * 2);
        perm.extend_from_slice(&base);
        perm.extend_from_slice(&base);

        let octaves = octaves.max(1);
        debug!(?seed, octaves, "Built Perlin permutation table");
        Self { octaves, perm }
    }

    /// Number of summed octaves.
    #[inline]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Sets the octave count; 0 leaves it unchanged.
    pub fn set_octaves(&mut self, octaves: u32) {
        if octaves > 0 {
            self.octaves = octaves;
        }
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Single-octave noise at `(x, y, z)`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
        let xi = (fx as i64 & 255) as usize;
        let yi = (fy as i64 & 255) as usize;
        let zi = (fz as i64 & 255) as usize;
        let (x, y, z) = (x - fx, y - fy, z - fz);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(self.p(aa), x, y, z), grad(self.p(ba), x - 1.0, y, z)),
                lerp(u, grad(self.p(ab), x, y - 1.0, z), grad(self.p(bb), x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(self.p(aa + 1), x, y, z - 1.0),
                    grad(self.p(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(self.p(ab + 1), x, y - 1.0, z - 1.0),
                    grad(self.p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    fn octave_sum(&self, x: f64, y: f64, z: f64) -> f64 {
        let (mut x, mut y, mut z) = (x, y, z);
        let mut amp = 1.0;
        let mut result = 0.0;
        for _ in 0..self.octaves {
            result += self.sample(x, y, z) * amp;
            x *= 2.0;
            y *= 2.0;
            z *= 2.0;
            amp *= 0.5;
        }
        result
    }

    /// 1D octave noise.
    #[inline]
    pub fn noise1(&self, x: f64) -> f64 {
        self.octave_sum(x, 0.0, 0.0)
    }

    /// 2D octave noise.
    #[inline]
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        self.octave_sum(x, y, 0.0)
    }

    /// 3D octave noise.
    #[inline]
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.octave_sum(x, y, z)
    }

    /// Octave noise over 1, 2 or 3 coordinates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArity`] for any other coordinate count.
    ///
    /// ```rust
    /// use lumen_noise::PerlinNoise;
    ///
    /// let perlin = PerlinNoise::new(Some(1), 1);
    /// assert_eq!(perlin.noise(&[0.5, 0.5])?, perlin.noise2(0.5, 0.5));
    /// assert!(perlin.noise(&[]).is_err());
    /// # Ok::<(), lumen_core::Error>(())
    /// ```
    pub fn noise(&self, coords: &[f64]) -> Result<f64> {
        match *coords {
            [x] => Ok(self.noise1(x)),
            [x, y] => Ok(self.noise2(x, y)),
            [x, y, z] => Ok(self.noise3(x, y, z)),
            _ => Err(Error::invalid_arity("1, 2 or 3", coords.len())),
        }
    }

    /// Samples 2D noise on a `width` x `height` grid, row-major.
    ///
    /// Cell `(col, row)` evaluates `noise2(col * scale, row * scale)`.
    /// Rows are evaluated in parallel with the `parallel` feature.
    pub fn sample_grid(&self, width: usize, height: usize, scale: f64) -> Vec<f64> {
        let mut out = vec![0.0f64; width * height];
        if out.is_empty() {
            return out;
        }

        let fill_row = |(y, row): (usize, &mut [f64])| {
            let fy = y as f64 * scale;
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.noise2(x as f64 * scale, fy);
            }
        };

        #[cfg(feature = "parallel")]
        out.par_chunks_mut(width).enumerate().for_each(fill_row);
        #[cfg(not(feature = "parallel"))]
        out.chunks_mut(width).enumerate().for_each(fill_row);

        debug!(width, height, scale, octaves = self.octaves, "Sampled noise grid");
        out
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of 12 cube-edge gradients picked by the hash.
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_table_from_seed() {
        let perlin = PerlinNoise::new(Some(5), 1);
        assert_eq!(perlin.perm.len(), 512);
        assert_eq!(&perlin.perm[..256], &perlin.perm[256..]);

        let mut rng = Xorshift::new(5);
        let first = (rng.next_f64() * 256.0).floor() as u8;
        assert_eq!(perlin.perm[0], first);
    }

    #[test]
    fn test_deterministic() {
        let a = PerlinNoise::new(Some(1234), 3);
        let b = PerlinNoise::new(Some(1234), 3);
        for i in 0..50 {
            let t = i as f64 * 0.173;
            assert_eq!(a.noise3(t, t * 0.5, -t), b.noise3(t, t * 0.5, -t));
        }
        assert_eq!(a, b);
        assert_ne!(a, PerlinNoise::new(Some(4321), 3));
    }

    #[test]
    fn test_lattice_points_are_zero() {
        let perlin = PerlinNoise::new(Some(77), 1);
        for i in -3..4 {
            let v = i as f64;
            assert_eq!(perlin.noise1(v), 0.0);
            assert_eq!(perlin.noise2(v, v + 1.0), 0.0);
            assert_eq!(perlin.noise3(v, 2.0, -v), 0.0);
        }
    }

    #[test]
    fn test_single_octave_range() {
        let perlin = PerlinNoise::new(Some(9), 1);
        for i in 0..500 {
            let t = i as f64 * 0.0937;
            let n = perlin.noise3(t, t * 1.7, t * 0.3);
            assert!((-1.1..=1.1).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn test_octaves_sum() {
        let one = PerlinNoise::new(Some(3), 1);
        let two = PerlinNoise::new(Some(3), 2);
        let (x, y) = (0.31, 0.77);
        let expected = one.noise2(x, y) + 0.5 * one.noise2(x * 2.0, y * 2.0);
        assert_abs_diff_eq!(two.noise2(x, y), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_octave_accessors() {
        let mut perlin = PerlinNoise::new(Some(1), 0);
        assert_eq!(perlin.octaves(), 1);
        perlin.set_octaves(4);
        assert_eq!(perlin.octaves(), 4);
        perlin.set_octaves(0);
        assert_eq!(perlin.octaves(), 4);
    }

    #[test]
    fn test_noise_dispatch() {
        let perlin = PerlinNoise::new(Some(8), 2);
        assert_eq!(perlin.noise(&[0.4]).unwrap(), perlin.noise1(0.4));
        assert_eq!(perlin.noise(&[0.4, 1.2, 2.5]).unwrap(), perlin.noise3(0.4, 1.2, 2.5));

        let err = perlin.noise(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(err.is_input_error());
        assert!(perlin.noise(&[]).is_err());
    }

    #[test]
    fn test_negative_coordinates() {
        let perlin = PerlinNoise::new(Some(21), 2);
        let n = perlin.noise2(-12.3, -0.7);
        assert!(n.is_finite());
    }

    #[test]
    fn test_sample_grid() {
        let perlin = PerlinNoise::new(Some(11), 3);
        let grid = perlin.sample_grid(7, 4, 0.13);
        assert_eq!(grid.len(), 28);
        assert_eq!(grid[2 * 7 + 5], perlin.noise2(5.0 * 0.13, 2.0 * 0.13));
        assert!(perlin.sample_grid(0, 10, 1.0).is_empty());
    }
}
