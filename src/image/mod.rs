//! Raster buffers used across the pipeline.
//!
//! - [`RgbFrame`]: borrowed, validated 3-channel input frame.
//! - [`RgbImageU8`]: owned 3-channel buffer (canvas, colour-gated frame, output).
//! - [`GrayImageU8`]: owned single-channel 8-bit maps (edges, masks, luma).
//! - [`ImageF32`]: owned single-channel float buffer for filtering.
pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::rgb::{RgbFrame, RgbImageU8};
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::GrayImageU8;
