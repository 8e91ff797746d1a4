//! Torus around the Y axis.

use std::f32::consts::PI;

use lumen_core::Result;
use lumen_math::Vector3;
use tracing::debug;

use crate::mesh::{DEFAULT_COLOR, Mesh, check_dimensions, grid_counts};

impl Mesh {
    /// Generates a torus-like ring around the Y axis.
    ///
    /// `rows` steps around the tube cross-section and `cols` steps around
    /// the Y axis. The horizontal extent of a ring point scales with
    /// `inner_radius * outer_radius`; its height is `inner_radius`. The T
    /// texture coordinate is shifted half a turn so the seam sits on the
    /// inside of the ring.
    ///
    /// # Errors
    ///
    /// [`lumen_core::Error::InvalidDimensions`] if `rows` or `cols` is zero.
    pub fn torus(
        rows: u32,
        cols: u32,
        inner_radius: f32,
        outer_radius: f32,
        color: Option<[f32; 4]>,
    ) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let (vertices, triangles) = grid_counts(rows, cols);
        let color = color.unwrap_or(DEFAULT_COLOR);
        let mut mesh = Mesh::with_capacity(vertices, triangles);

        for r in 0..=rows {
            let ring = PI * 2.0 / rows as f32 * r as f32;
            let (ry, rr) = ring.sin_cos();
            let mut t = r as f32 / rows as f32 + 0.5;
            if t > 1.0 {
                t -= 1.0;
            }

            for c in 0..=cols {
                let sector = PI * 2.0 / cols as f32 * c as f32;
                let (sin, cos) = sector.sin_cos();
                let extent = rr * inner_radius * outer_radius;
                mesh.push_vertex(
                    Vector3::new(extent * cos, ry * inner_radius, extent * sin),
                    Vector3::new(rr * cos, ry, rr * sin),
                    color,
                    [c as f32 / cols as f32, 1.0 - t],
                );
            }
        }

        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let i = stride * r + c;
                mesh.push_triangle(i, i + stride, i + 1);
                mesh.push_triangle(i + stride, i + stride + 1, i + 1);
            }
        }

        debug!(
            rows,
            cols,
            inner_radius,
            outer_radius,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Generated torus"
        );
        Ok(mesh)
    }
}
