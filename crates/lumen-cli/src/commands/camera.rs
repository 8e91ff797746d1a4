//! Camera matrix command.
//!
//! Prints the look-at view matrix, the perspective projection and their
//! product, optionally projecting a world-space point to NDC.

use crate::CameraArgs;
use anyhow::{Result, bail};
use lumen_math::{Matrix4x4, Vector3};
use tracing::debug;

/// Runs the camera command.
pub fn run(args: CameraArgs, verbose: bool) -> Result<()> {
    if args.near <= 0.0 || args.far <= args.near {
        bail!("Clip planes must satisfy 0 < near < far (near={}, far={})", args.near, args.far);
    }
    if (args.eye - args.target).length_squared() == 0.0 {
        bail!("Eye and target must differ");
    }

    let view = Matrix4x4::look_at(args.eye, args.target, args.up);
    let proj = Matrix4x4::perspective(args.fov, args.aspect, args.near, args.far);
    let view_proj = proj * view;
    debug!(fov = args.fov, aspect = args.aspect, "camera matrices built");

    print_matrix("View", &view);
    print_matrix("Projection", &proj);
    if verbose {
        print_matrix("View-projection", &view_proj);
        match view.inverse() {
            Some(inv) => print_matrix("Inverse view", &inv),
            None => println!("Inverse view: singular"),
        }
    }

    if let Some(point) = args.point {
        report_point(point, &view_proj);
    }

    if args.css {
        println!("view: {}", view.to_css_matrix_string());
        println!("projection: {}", proj.to_css_matrix_string());
    }

    Ok(())
}

fn print_matrix(label: &str, m: &Matrix4x4) {
    println!("{}:", label);
    for r in 0..4 {
        let row = m.row(r);
        println!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", row.x, row.y, row.z, row.w);
    }
}

fn report_point(point: Vector3, view_proj: &Matrix4x4) {
    match point.apply_projection(view_proj) {
        Some(ndc) => println!("Point {} -> NDC {}", point, ndc),
        None => println!("Point {} is outside the view frustum", point),
    }
}
