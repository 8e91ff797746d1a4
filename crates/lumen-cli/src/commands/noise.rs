//! Noise preview command.

use crate::NoiseArgs;
use anyhow::{Context, Result, bail};
use lumen_noise::PerlinNoise;

/// Shades from dark to bright.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Runs the noise command, printing an ASCII shade map.
pub fn run(args: NoiseArgs, verbose: bool) -> Result<()> {
    if !args.scale.is_finite() || args.scale <= 0.0 {
        bail!("Scale must be a positive number, got {}", args.scale);
    }

    let perlin = PerlinNoise::new(args.seed, args.octaves);
    let samples = perlin.sample_grid(args.width, args.height, args.scale);

    if args.json {
        return super::print_json(&samples);
    }

    let bound = shade_bound(perlin.octaves())?;
    if args.width > 0 {
        for row in samples.chunks(args.width) {
            let line: String = row.iter().map(|&n| shade(n, bound)).collect();
            println!("{}", line);
        }
    }

    if verbose {
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &n| (lo.min(n), hi.max(n)));
        println!("octaves: {}  min: {:.4}  max: {:.4}", perlin.octaves(), min, max);
    }

    Ok(())
}

/// Octave sums stay within +-(2 - 2^(1-n)).
fn shade_bound(octaves: u32) -> Result<f64> {
    let octaves = i32::try_from(octaves).context("Octave count too large")?;
    Ok(2.0 - 2f64.powi(1 - octaves))
}

fn shade(n: f64, bound: f64) -> char {
    let t = ((n / bound + 1.0) * 0.5).clamp(0.0, 1.0);
    let idx = (t * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx] as char
}
