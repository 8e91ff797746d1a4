//! xorshift128 pseudo-random generator.

use std::time::{SystemTime, UNIX_EPOCH};

/// Scale mapping a `u32` onto `[0, 1)`: `2^-32`.
const U32_TO_UNIT: f64 = 2.3283064365386963e-10;

/// Knuth's multiplier for the seed expansion.
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// xorshift128 generator (Marsaglia).
///
/// Not cryptographically secure. Cloning a generator forks its sequence.
///
/// # Example
///
/// ```rust
/// use lumen_noise::Xorshift;
///
/// let mut a = Xorshift::new(7);
/// let mut b = Xorshift::new(7);
/// assert_eq!(a.next_u32(), b.next_u32());
///
/// let r = a.next_f64();
/// assert!((0.0..1.0).contains(&r));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift {
    state: [u32; 4],
}

impl Xorshift {
    /// Seeds the generator.
    ///
    /// The four state words come from the recurrence
    /// `s = 1812433253 * (s ^ (s >> 30)) + i` for `i` in `1..=4`, after one
    /// discarded round with `i = 0`.
    pub fn new(seed: u32) -> Self {
        let mut s = seed;
        let mut state = [0u32; 4];
        for i in 0..=4u32 {
            s = SEED_MULTIPLIER.wrapping_mul(s ^ (s >> 30)).wrapping_add(i);
            if i > 0 {
                state[i as usize - 1] = s;
            }
        }
        Self { state }
    }

    /// Seeds from the system clock (milliseconds since the Unix epoch).
    pub fn from_time() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self::new(millis as u32)
    }

    /// Current state words.
    #[inline]
    pub fn state(&self) -> [u32; 4] {
        self.state
    }

    /// Next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let [x, y, z, last] = self.state;
        let mut t = x;
        t ^= t << 11;
        t ^= t >> 8;
        let w = last ^ (last >> 19) ^ t;
        self.state = [y, z, last, w];
        w
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * U32_TO_UNIT
    }
}

impl Iterator for Xorshift {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_expansion() {
        let rng = Xorshift::new(0);
        // s1 = 1812433253 * 0 + 1
        let s1 = 1u32;
        let s2 = SEED_MULTIPLIER.wrapping_mul(s1 ^ (s1 >> 30)).wrapping_add(2);
        assert_eq!(rng.state()[0], 1);
        assert_eq!(rng.state()[1], s2);
    }

    #[test]
    fn test_step() {
        let mut rng = Xorshift::new(123);
        let [x, y, z, w] = rng.state();
        let mut t = x;
        t ^= t << 11;
        t ^= t >> 8;
        let expected = (w ^ (w >> 19)) ^ t;
        assert_eq!(rng.next_u32(), expected);
        assert_eq!(rng.state(), [y, z, w, expected]);
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<u32> = Xorshift::new(2024).take(32).collect();
        let b: Vec<u32> = Xorshift::new(2024).take(32).collect();
        let c: Vec<u32> = Xorshift::new(2025).take(32).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = Xorshift::new(99);
        let mut sum = 0.0;
        for _ in 0..10_000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r));
            sum += r;
        }
        let mean = sum / 10_000.0;
        assert!((mean - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_from_time_runs() {
        let mut rng = Xorshift::from_time();
        assert!(rng.next_f64() < 1.0);
    }
}
