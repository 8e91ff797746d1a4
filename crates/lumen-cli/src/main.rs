//! lumen - inspect generated geometry, noise, colors and camera matrices
//!
//! Thin front end over the lumen library crates, useful for eyeballing
//! generator output and checking transform setups from a shell.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lumen_math::Vector3;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about = "Inspect lumen meshes, noise, colors and camera matrices")]
#[command(long_about = "
Command-line front end for the lumen graphics math libraries.

Examples:
  lumen mesh sphere --rows 16 --cols 32          # Vertex/triangle counts and bounds
  lumen mesh plane --width 2 --height 2 --json   # Full vertex buffers as JSON
  lumen noise --seed 42 --octaves 4 -W 64 -H 24  # ASCII shade map
  lumen color rgb 255 128 0                      # RGB -> HSV
  lumen color hsv 210 50 80                      # HSV -> RGB
  lumen camera --eye 0,2,6 --fov 60 --css        # View/projection matrices
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (enables debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mesh and report its buffers
    #[command(visible_alias = "m")]
    Mesh(MeshArgs),

    /// Render Perlin noise as an ASCII shade map
    #[command(visible_alias = "n")]
    Noise(NoiseArgs),

    /// Convert between RGB and HSV
    Color(ColorArgs),

    /// Build look-at and perspective matrices
    #[command(visible_alias = "cam")]
    Camera(CameraArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MeshKind {
    Plane,
    Sphere,
    Torus,
}

#[derive(Args)]
struct MeshArgs {
    /// Mesh generator
    #[arg(value_enum)]
    kind: MeshKind,

    /// Rows (rings for sphere and torus)
    #[arg(short, long, default_value = "8")]
    rows: u32,

    /// Columns (sectors for sphere and torus)
    #[arg(short, long, default_value = "8")]
    cols: u32,

    /// Plane half-extent along X
    #[arg(long, default_value = "1.0")]
    width: f32,

    /// Plane half-extent along Z
    #[arg(long, default_value = "1.0")]
    height: f32,

    /// Sphere radius
    #[arg(long, default_value = "1.0")]
    radius: f32,

    /// Torus tube radius
    #[arg(long, default_value = "0.5")]
    inner: f32,

    /// Torus ring scale
    #[arg(long, default_value = "2.0")]
    outer: f32,

    /// Vertex color as r,g,b,a
    #[arg(long, value_parser = parse_rgba)]
    color: Option<[f32; 4]>,

    /// Output the full mesh as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NoiseArgs {
    /// Seed (defaults to the system clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Octave count
    #[arg(short, long, default_value = "4")]
    octaves: u32,

    /// Columns in the map
    #[arg(short = 'W', long, default_value = "64")]
    width: usize,

    /// Rows in the map
    #[arg(short = 'H', long, default_value = "24")]
    height: usize,

    /// Sample spacing in noise space
    #[arg(long, default_value = "0.08")]
    scale: f64,

    /// Output raw samples as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ColorArgs {
    #[command(subcommand)]
    mode: ColorMode,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum ColorMode {
    /// Convert 0-255 RGB to HSV
    Rgb {
        /// Red (0-255)
        r: f32,
        /// Green (0-255)
        g: f32,
        /// Blue (0-255)
        b: f32,
    },
    /// Convert HSV (degrees, percent, percent) to RGB
    Hsv {
        /// Hue (0-360)
        h: f32,
        /// Saturation (0-100)
        s: f32,
        /// Value (0-100)
        v: f32,
    },
}

#[derive(Args)]
struct CameraArgs {
    /// Camera position as x,y,z
    #[arg(long, default_value = "0,0,5", value_parser = parse_vec3, allow_hyphen_values = true)]
    eye: Vector3,

    /// Look-at target as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    target: Vector3,

    /// Up direction as x,y,z
    #[arg(long, default_value = "0,1,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    up: Vector3,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "45")]
    fov: f32,

    /// Aspect ratio (width / height)
    #[arg(long, default_value = "1.7777778")]
    aspect: f32,

    /// Near clip distance
    #[arg(long, default_value = "0.1")]
    near: f32,

    /// Far clip distance
    #[arg(long, default_value = "100")]
    far: f32,

    /// World-space point to project to normalized device coordinates
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    point: Option<Vector3>,

    /// Also print CSS matrix3d() strings
    #[arg(long)]
    css: bool,
}

fn parse_floats<const N: usize>(s: &str) -> std::result::Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated numbers, got '{}'", N, s));
    }
    let mut out = [0.0f32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

fn parse_vec3(s: &str) -> std::result::Result<Vector3, String> {
    parse_floats::<3>(s).map(Vector3::from_array)
}

fn parse_rgba(s: &str) -> std::result::Result<[f32; 4], String> {
    parse_floats::<4>(s)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Mesh(args) => commands::mesh::run(args, cli.verbose),
        Commands::Noise(args) => commands::noise::run(args, cli.verbose),
        Commands::Color(args) => commands::color::run(args, cli.verbose),
        Commands::Camera(args) => commands::camera::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, -2,3.5").unwrap(), Vector3::new(1.0, -2.0, 3.5));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,x,3").is_err());
    }

    #[test]
    fn test_parse_mesh_args() {
        let cli = Cli::try_parse_from(["lumen", "mesh", "torus", "-r", "3", "--color", "1,0,0,1"]).unwrap();
        match cli.command {
            Commands::Mesh(args) => {
                assert_eq!(args.kind, MeshKind::Torus);
                assert_eq!(args.rows, 3);
                assert_eq!(args.cols, 8);
                assert_eq!(args.color, Some([1.0, 0.0, 0.0, 1.0]));
            }
            _ => panic!("expected mesh command"),
        }
    }

    #[test]
    fn test_parse_camera_negative_eye() {
        let cli = Cli::try_parse_from(["lumen", "camera", "--eye", "-3,2,-1"]).unwrap();
        match cli.command {
            Commands::Camera(args) => assert_eq!(args.eye, Vector3::new(-3.0, 2.0, -1.0)),
            _ => panic!("expected camera command"),
        }
    }
}
