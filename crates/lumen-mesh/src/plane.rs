//! Flat grid on the XZ plane.

use lumen_core::Result;
use lumen_math::Vector3;
use tracing::debug;

use crate::mesh::{DEFAULT_COLOR, Mesh, check_dimensions, grid_counts};

impl Mesh {
    /// Generates a `rows` x `cols` grid on the XZ plane facing `+Y`.
    ///
    /// The plane spans `[-width, width]` on X and `[-height, height]` on Z.
    /// Vertices are laid out column by column; X runs from `+width` at
    /// column 0 to `-width` at the last column and the S texture coordinate
    /// runs from 0 to -1 along with it.
    ///
    /// # Errors
    ///
    /// [`lumen_core::Error::InvalidDimensions`] if `rows` or `cols` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_mesh::Mesh;
    ///
    /// let quad = Mesh::plane(2.0, 2.0, 1, 1, None)?;
    /// assert_eq!(quad.vertex_count(), 4);
    /// assert_eq!(quad.index.len(), 6);
    /// # Ok::<(), lumen_core::Error>(())
    /// ```
    pub fn plane(
        width: f32,
        height: f32,
        rows: u32,
        cols: u32,
        color: Option<[f32; 4]>,
    ) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let (vertices, triangles) = grid_counts(rows, cols);
        let color = color.unwrap_or(DEFAULT_COLOR);
        let mut mesh = Mesh::with_capacity(vertices, triangles);

        for c in 0..=cols {
            let s = c as f32 / cols as f32;
            let col_unit = -(s * 2.0 - 1.0);
            for r in 0..=rows {
                let t = r as f32 / rows as f32;
                let row_unit = t * 2.0 - 1.0;
                mesh.push_vertex(
                    Vector3::new(width * col_unit, 0.0, height * row_unit),
                    Vector3::up(),
                    color,
                    [-s, t],
                );
            }
        }

        // column-major layout: a column holds rows + 1 vertices
        let stride = rows + 1;
        for c in 0..cols {
            for r in 0..rows {
                let base = stride * c + r;
                let (i0, i1, i2, i3) = (base, base + 1, base + stride, base + stride + 1);
                mesh.push_triangle(i0, i1, i2);
                mesh.push_triangle(i3, i2, i1);
            }
        }

        debug!(
            rows,
            cols,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Generated plane"
        );
        Ok(mesh)
    }
}
