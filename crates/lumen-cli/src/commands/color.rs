//! RGB <-> HSV conversion command.

use crate::{ColorArgs, ColorMode};
use anyhow::Result;
use lumen_color::{Hsv, Rgb};

/// Runs the color command.
pub fn run(args: ColorArgs, _verbose: bool) -> Result<()> {
    match args.mode {
        ColorMode::Rgb { r, g, b } => {
            let hsv = Rgb::new(r, g, b).to_hsv();
            if args.json {
                return super::print_json(&hsv);
            }
            println!("rgb({}, {}, {}) -> hsv({:.2}, {:.2}%, {:.2}%)", r, g, b, hsv.h, hsv.s, hsv.v);
        }
        ColorMode::Hsv { h, s, v } => {
            let rgb = Hsv::new(h, s, v).to_rgb();
            if args.json {
                return super::print_json(&rgb);
            }
            println!("hsv({}, {}%, {}%) -> rgb({:.2}, {:.2}, {:.2})", h, s, v, rgb.r, rgb.g, rgb.b);
        }
    }
    Ok(())
}
