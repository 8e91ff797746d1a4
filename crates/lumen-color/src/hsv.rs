//! RGB <-> HSV conversion.
//!
//! Hue is the angle on the color wheel with red at 0, green at 120 and
//! blue at 240. Saturation and value are percentages of the brightest
//! channel.

use lumen_math::Vector3;

/// An RGB color with channels in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

/// An HSV color: hue in degrees `[0, 360)`, saturation and value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue angle in degrees
    pub h: f32,
    /// Saturation percentage
    pub s: f32,
    /// Value (brightness) percentage
    pub v: f32,
}

impl Rgb {
    /// Creates a color from 0-255 channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts to HSV. See [`convert_rgb_to_hsv`].
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        convert_rgb_to_hsv(self.r, self.g, self.b)
    }
}

impl Hsv {
    /// Creates a color from hue degrees and saturation/value percentages.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Converts to RGB. See [`convert_hsv_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        convert_hsv_to_rgb(self.h, self.s, self.v)
    }
}

fn hue(r: f32, g: f32, b: f32, max: f32, min: f32) -> f32 {
    let chroma = max - min;
    if chroma == 0.0 {
        return 0.0;
    }

    let h = if r >= g && r >= b {
        60.0 * ((g - b) / chroma)
    } else if g >= r && g >= b {
        60.0 * ((b - r) / chroma) + 120.0
    } else {
        60.0 * ((r - g) / chroma) + 240.0
    };

    if h < 0.0 { h + 360.0 } else { h }
}

/// Converts 0-255 RGB channels to HSV.
///
/// Ties between equal maximum channels resolve in red, green, blue order.
/// Grays get hue 0 and black gets saturation 0.
///
/// ```rust
/// use lumen_color::convert_rgb_to_hsv;
///
/// let hsv = convert_rgb_to_hsv(0.0, 0.0, 255.0);
/// assert_eq!(hsv.h, 240.0);
/// ```
pub fn convert_rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let h = hue(r, g, b, max, min);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max * 100.0 };
    let v = max / 255.0 * 100.0;

    Hsv { h, s, v }
}

/// Converts HSV (hue degrees, saturation and value percentages) to 0-255 RGB.
///
/// Each 60-degree sector interpolates one channel linearly between the
/// darkest and brightest channel.
pub fn convert_hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let max = v / 100.0 * 255.0;
    let min = max - (s / 100.0) * max;
    let range = max - min;
    let ramp = |t: f32| t / 60.0 * range + min;

    let (r, g, b) = if h <= 60.0 {
        (max, ramp(h), min)
    } else if h <= 120.0 {
        (ramp(120.0 - h), max, min)
    } else if h <= 180.0 {
        (min, max, ramp(h - 120.0))
    } else if h <= 240.0 {
        (min, ramp(240.0 - h), max)
    } else if h <= 300.0 {
        (ramp(h - 240.0), min, max)
    } else {
        (max, min, ramp(360.0 - h))
    };

    Rgb { r, g, b }
}

impl From<Rgb> for Vector3 {
    #[inline]
    fn from(c: Rgb) -> Self {
        Vector3::new(c.r, c.g, c.b)
    }
}

impl From<Vector3> for Rgb {
    #[inline]
    fn from(v: Vector3) -> Self {
        Rgb::new(v.r(), v.g(), v.b())
    }
}

impl From<Hsv> for Vector3 {
    #[inline]
    fn from(c: Hsv) -> Self {
        Vector3::new(c.h, c.s, c.v)
    }
}

impl From<Vector3> for Hsv {
    #[inline]
    fn from(v: Vector3) -> Self {
        Hsv::new(v.x, v.y, v.z)
    }
}
