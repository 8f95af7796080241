//! Colour gating in HSV space.
//!
//! Lane markings are yellow or white. The gate converts every pixel to the
//! 8-bit HSV convention (hue halved into `[0, 180)`, saturation and value in
//! `[0, 255]`), keeps pixels inside either configured range, and blacks out
//! everything else. The RGB values of kept pixels are passed through
//! untouched so the following grayscale stage sees the original intensities.

mod gate;
mod hsv;

pub use gate::{HsvColorGate, HsvRange};
pub use hsv::rgb_to_hsv;
