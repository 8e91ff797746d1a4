//! Error types for lumen operations.
//!
//! The vector/matrix/quaternion kernel never raises: singular matrices,
//! zero rotation axes and clipped projections come back as `None`. This
//! module covers the remaining failure modes of the peripheral utilities:
//!
//! - Mesh generation with a zero row or column count
//! - Spline fitting without control values
//! - Noise sampling with an unsupported number of coordinates
//!
//! # Usage
//!
//! ```rust
//! use lumen_core::{Error, Result};
//!
//! fn check_grid(rows: u32, cols: u32) -> Result<()> {
//!     if rows == 0 || cols == 0 {
//!         return Err(Error::invalid_dimensions(rows, cols, "grid must have at least one cell"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_grid(0, 4).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `lumen-math` - Spline fitting
//! - `lumen-mesh` - Plane/Sphere/Torus parameter checks
//! - `lumen-noise` - Coordinate arity dispatch

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the lumen utilities.
///
/// # Categories
///
/// - **Shape errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Input errors**: [`EmptyInput`](Error::EmptyInput), [`InvalidArity`](Error::InvalidArity)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Grid dimensions cannot produce a mesh.
    ///
    /// Returned by the mesh generators when `rows` or `cols` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen_core::Error;
    ///
    /// let err = Error::invalid_dimensions(0, 8, "rows must be at least 1");
    /// assert!(err.to_string().contains("0x8"));
    /// ```
    #[error("invalid grid dimensions: {rows}x{cols} ({reason})")]
    InvalidDimensions {
        /// Requested row count
        rows: u32,
        /// Requested column count
        cols: u32,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// An operation received no input values.
    #[error("{what} requires at least one value")]
    EmptyInput {
        /// Name of the operation or input
        what: &'static str,
    },

    /// Wrong number of coordinates or components.
    ///
    /// `expected` describes the accepted counts, e.g. `"1, 2 or 3"`.
    #[error("arity mismatch: expected {expected}, got {got}")]
    InvalidArity {
        /// Accepted arity description
        expected: &'static str,
        /// Actual count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(rows: u32, cols: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::EmptyInput`] error.
    #[inline]
    pub fn empty_input(what: &'static str) -> Self {
        Self::EmptyInput { what }
    }

    /// Creates an [`Error::InvalidArity`] error.
    #[inline]
    pub fn invalid_arity(expected: &'static str, got: usize) -> Self {
        Self::InvalidArity { expected, got }
    }

    /// Returns `true` if this is a dimension error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }

    /// Returns `true` if this error was caused by missing or miscounted input.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::InvalidArity { .. })
    }
}
