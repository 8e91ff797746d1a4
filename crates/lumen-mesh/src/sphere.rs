//! UV sphere.

use std::f32::consts::PI;

use lumen_core::Result;
use lumen_math::Vector3;
use tracing::debug;

use crate::mesh::{DEFAULT_COLOR, Mesh, check_dimensions, grid_counts};

impl Mesh {
    /// Generates a UV sphere of `radius` centered at the origin.
    ///
    /// `rows` rings run from the north pole (`+Y`) to the south pole and
    /// `cols` sectors wrap around the Y axis. Normals are unit length and
    /// point outward.
    ///
    /// # Errors
    ///
    /// [`lumen_core::Error::InvalidDimensions`] if `rows` or `cols` is zero.
    pub fn sphere(rows: u32, cols: u32, radius: f32, color: Option<[f32; 4]>) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let (vertices, triangles) = grid_counts(rows, cols);
        let color = color.unwrap_or(DEFAULT_COLOR);
        let mut mesh = Mesh::with_capacity(vertices, triangles);

        for r in 0..=rows {
            let ring = PI / rows as f32 * r as f32;
            let (rr, ry) = ring.sin_cos();
            for c in 0..=cols {
                let sector = PI * 2.0 / cols as f32 * c as f32;
                let (sin, cos) = sector.sin_cos();
                let n = Vector3::new(rr * cos, ry, rr * sin);
                mesh.push_vertex(
                    n * radius,
                    n,
                    color,
                    [1.0 - c as f32 / cols as f32, r as f32 / rows as f32],
                );
            }
        }

        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let i = stride * r + c;
                mesh.push_triangle(i, i + 1, i + stride + 1);
                mesh.push_triangle(i, i + stride + 1, i + stride);
            }
        }

        debug!(
            rows,
            cols,
            radius,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Generated sphere"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_counts() {
        let mesh = Mesh::sphere(8, 12, 1.0, None).unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 13);
        assert_eq!(mesh.triangle_count(), 2 * 8 * 12);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.index.iter().all(|&i| i < count));
    }

    #[test]
    fn test_vertices_on_surface() {
        let radius = 2.5;
        let mesh = Mesh::sphere(6, 10, radius, None).unwrap();
        for i in 0..mesh.vertex_count() {
            let p = mesh.vertex_position(i).unwrap();
            let n = mesh.vertex_normal(i).unwrap();
            assert_abs_diff_eq!(p.length(), radius, epsilon = 1e-5);
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(n * radius, p, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_poles() {
        let mesh = Mesh::sphere(4, 4, 1.0, None).unwrap();
        let north = mesh.vertex_position(0).unwrap();
        let south = mesh.vertex_position(mesh.vertex_count() - 1).unwrap();
        assert_abs_diff_eq!(north, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(south.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_texture_coords() {
        let mesh = Mesh::sphere(2, 4, 1.0, None).unwrap();
        assert_eq!(&mesh.texture_coord[0..2], &[1.0, 0.0]);
        // last vertex of the first ring
        assert_eq!(&mesh.texture_coord[8..10], &[0.0, 0.0]);
        let last = mesh.texture_coord.len();
        assert_eq!(&mesh.texture_coord[last - 2..], &[0.0, 1.0]);
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(Mesh::sphere(0, 4, 1.0, None).is_err());
        assert!(Mesh::sphere(4, 0, 1.0, None).is_err());
    }
}
