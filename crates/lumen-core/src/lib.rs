//! # lumen-core
//!
//! Core types shared across the lumen workspace.
//!
//! The numeric kernel in `lumen-math` signals singular inputs with sentinel
//! values (`Option::None`) and never fails loudly. The peripheral utilities
//! that take shape parameters (meshes, splines, noise dispatch) report
//! invalid input through the [`Error`] type defined here.
//!
//! ## Crate Structure
//!
//! ```text
//! lumen-core (this crate)
//!    ^
//!    |
//!    +-- lumen-math (vectors, matrices, quaternions, spline)
//!    +-- lumen-mesh (plane, sphere, torus)
//!    +-- lumen-noise (xorshift, perlin)
//!    +-- lumen-color (rgb/hsv)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// ```
/// use lumen_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
