//! # lumen-noise
//!
//! Deterministic pseudo-random numbers and gradient noise for procedural
//! textures and terrain.
//!
//! - [`Xorshift`] - xorshift128 generator with a 32-bit seed
//! - [`PerlinNoise`] - improved Perlin noise in 1, 2 or 3 dimensions,
//!   summed over octaves
//!
//! Both are fully determined by their seed, so the same seed reproduces
//! the same texture on every platform.
//!
//! # Usage
//!
//! ```rust
//! use lumen_noise::PerlinNoise;
//!
//! let perlin = PerlinNoise::new(Some(42), 4);
//! let h = perlin.noise2(0.37, 1.21);
//! assert_eq!(h, PerlinNoise::new(Some(42), 4).noise2(0.37, 1.21));
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - [`PerlinNoise::sample_grid`] evaluates rows
//!   with rayon
//!
//! # Dependencies
//!
//! - `lumen-core` - Error types
//! - [`tracing`] - Table construction diagnostics
//! - `rayon` - Parallel grid sampling (optional)
//!
//! # Used By
//!
//! - `lumen-cli` - `lumen noise` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod perlin;
mod xorshift;

pub use perlin::*;
pub use xorshift::*;
