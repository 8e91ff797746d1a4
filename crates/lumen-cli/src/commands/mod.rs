//! CLI command implementations

pub mod camera;
pub mod color;
pub mod mesh;
pub mod noise;

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
