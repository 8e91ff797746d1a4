//! # lumen-color
//!
//! RGB and HSV conversion for UI color pickers and procedural palettes.
//!
//! Channels use the ranges common to web color tools:
//!
//! | Model | Component | Range      |
//! |-------|-----------|------------|
//! | RGB   | r, g, b   | `[0, 255]` |
//! | HSV   | h         | `[0, 360)` |
//! | HSV   | s, v      | `[0, 100]` |
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_color::{convert_hsv_to_rgb, convert_rgb_to_hsv};
//!
//! let hsv = convert_rgb_to_hsv(255.0, 0.0, 0.0);
//! assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 100.0, 100.0));
//!
//! let rgb = convert_hsv_to_rgb(hsv.h, hsv.s, hsv.v);
//! assert_eq!((rgb.r, rgb.g, rgb.b), (255.0, 0.0, 0.0));
//! ```
//!
//! # Dependencies
//!
//! - `lumen-math` - [`Vector3`](lumen_math::Vector3) conversions

#![warn(missing_docs)]

mod hsv;

pub use hsv::*;
