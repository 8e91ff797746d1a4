//! Flat vertex buffer container shared by all generators.

use lumen_core::{Error, Result};
use lumen_math::Vector3;

/// Vertex color used when a generator receives `None`.
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Generated geometry as flat attribute arrays.
///
/// Attributes are interleaved per vertex within each buffer, not across
/// buffers: `position` and `normal` hold 3 floats per vertex, `color` 4 and
/// `texture_coord` 2. `index` holds 3 entries per triangle.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Vertex positions (xyz)
    pub position: Vec<f32>,
    /// Vertex normals (xyz)
    pub normal: Vec<f32>,
    /// Vertex colors (rgba)
    pub color: Vec<f32>,
    /// Texture coordinates (st)
    pub texture_coord: Vec<f32>,
    /// Triangle indices
    pub index: Vec<u32>,
}

impl Mesh {
    pub(crate) fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            position: Vec::with_capacity(vertices * 3),
            normal: Vec::with_capacity(vertices * 3),
            color: Vec::with_capacity(vertices * 4),
            texture_coord: Vec::with_capacity(vertices * 2),
            index: Vec::with_capacity(triangles * 3),
        }
    }

    #[inline]
    pub(crate) fn push_vertex(
        &mut self,
        position: Vector3,
        normal: Vector3,
        color: [f32; 4],
        st: [f32; 2],
    ) {
        self.position.extend_from_slice(&position.to_array());
        self.normal.extend_from_slice(&normal.to_array());
        self.color.extend_from_slice(&color);
        self.texture_coord.extend_from_slice(&st);
    }

    #[inline]
    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.index.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.position.len() / 3
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index.len() / 3
    }

    /// Position of vertex `i`, or `None` past the end.
    pub fn vertex_position(&self, i: usize) -> Option<Vector3> {
        self.position.get(i * 3..i * 3 + 3).map(Vector3::from_slice)
    }

    /// Normal of vertex `i`, or `None` past the end.
    pub fn vertex_normal(&self, i: usize) -> Option<Vector3> {
        self.normal.get(i * 3..i * 3 + 3).map(Vector3::from_slice)
    }

    /// Axis-aligned bounding box as `(min, max)`; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        let mut points = self.position.chunks_exact(3).map(Vector3::from_slice);
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

pub(crate) fn check_dimensions(rows: u32, cols: u32) -> Result<()> {
    if rows == 0 {
        return Err(Error::invalid_dimensions(rows, cols, "rows must be at least 1"));
    }
    if cols == 0 {
        return Err(Error::invalid_dimensions(rows, cols, "cols must be at least 1"));
    }
    Ok(())
}

/// Vertex and triangle counts for a `rows` x `cols` grid.
#[inline]
pub(crate) fn grid_counts(rows: u32, cols: u32) -> (usize, usize) {
    let (r, c) = (rows as usize, cols as usize);
    ((r + 1) * (c + 1), 2 * r * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.bounds().is_none());
        assert!(mesh.vertex_position(0).is_none());
    }

    #[test]
    fn test_push_and_bounds() {
        let mut mesh = Mesh::with_capacity(2, 0);
        mesh.push_vertex(Vector3::new(-1.0, 2.0, 0.0), Vector3::up(), DEFAULT_COLOR, [0.0, 0.0]);
        mesh.push_vertex(Vector3::new(3.0, -2.0, 5.0), Vector3::up(), DEFAULT_COLOR, [1.0, 1.0]);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.color.len(), 8);
        assert_eq!(mesh.vertex_position(1), Some(Vector3::new(3.0, -2.0, 5.0)));
        assert_eq!(mesh.vertex_normal(0), Some(Vector3::up()));

        let (lo, hi) = mesh.bounds().unwrap();
        assert_eq!(lo, Vector3::new(-1.0, -2.0, 0.0));
        assert_eq!(hi, Vector3::new(3.0, 2.0, 5.0));
    }

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(0, 3).unwrap_err().is_dimension_error());
        assert!(check_dimensions(3, 0).unwrap_err().is_dimension_error());
        assert_eq!(grid_counts(2, 3), (12, 12));
    }
}
