//! Mesh generation command.
//!
//! Builds a plane, sphere or torus and reports buffer sizes and bounds, or
//! dumps every buffer as JSON.

use crate::{MeshArgs, MeshKind};
use anyhow::{Context, Result};
use lumen_mesh::Mesh;
use tracing::debug;

/// Runs the mesh command.
pub fn run(args: MeshArgs, verbose: bool) -> Result<()> {
    debug!(kind = ?args.kind, rows = args.rows, cols = args.cols, "mesh command");

    let mesh = match args.kind {
        MeshKind::Plane => Mesh::plane(args.width, args.height, args.rows, args.cols, args.color),
        MeshKind::Sphere => Mesh::sphere(args.rows, args.cols, args.radius, args.color),
        MeshKind::Torus => {
            Mesh::torus(args.rows, args.cols, args.inner, args.outer, args.color)
        }
    }
    .with_context(|| format!("Failed to generate {:?} mesh", args.kind))?;

    if args.json {
        super::print_json(&mesh)
    } else {
        print_text(&args, &mesh, verbose);
        Ok(())
    }
}

fn print_text(args: &MeshArgs, mesh: &Mesh, verbose: bool) {
    println!("{:?} {}x{}", args.kind, args.rows, args.cols);
    println!("  Vertices:   {}", mesh.vertex_count());
    println!("  Triangles:  {}", mesh.triangle_count());
    if let Some((lo, hi)) = mesh.bounds() {
        println!("  Bounds min: {}", lo);
        println!("  Bounds max: {}", hi);
    }

    if verbose {
        let floats = mesh.position.len() + mesh.normal.len() + mesh.color.len() + mesh.texture_coord.len();
        let bytes = floats * size_of::<f32>() + mesh.index.len() * size_of::<u32>();
        println!("  Buffer size: {} bytes", bytes);
        for i in 0..mesh.vertex_count().min(4) {
            if let (Some(p), Some(n)) = (mesh.vertex_position(i), mesh.vertex_normal(i)) {
                println!("  v{}: pos ({}) normal ({})", i, p, n);
            }
        }
    }
}
