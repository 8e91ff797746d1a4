//! # lumen-mesh
//!
//! Parametric mesh generators producing flat vertex buffers ready for
//! upload as GPU vertex attributes.
//!
//! | Generator        | Surface                         | Winding        |
//! |------------------|---------------------------------|----------------|
//! | [`Mesh::plane`]  | XZ plane facing `+Y`            | per grid cell  |
//! | [`Mesh::sphere`] | UV sphere around the origin     | per quad       |
//! | [`Mesh::torus`]  | Ring around the `Y` axis        | per quad       |
//!
//! Every generator lays out `(rows + 1) * (cols + 1)` vertices and
//! `2 * rows * cols` triangles. Seam vertices are duplicated so texture
//! coordinates stay continuous.
//!
//! # Usage
//!
//! ```rust
//! use lumen_mesh::Mesh;
//!
//! let sphere = Mesh::sphere(16, 32, 1.0, None)?;
//! assert_eq!(sphere.vertex_count(), 17 * 33);
//! assert_eq!(sphere.triangle_count(), 2 * 16 * 32);
//! # Ok::<(), lumen_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - `lumen-math` - Vertex attribute math
//! - `lumen-core` - Error types
//! - [`tracing`] - Generation diagnostics
//!
//! # Used By
//!
//! - `lumen-cli` - `lumen mesh` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mesh;
mod plane;
mod sphere;
mod torus;

pub use mesh::*;
