//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used by the blur and gradient stages. Values keep the 0..255 scale of the
//! 8-bit source so edge thresholds can be expressed in intensity units.
use super::traits::{ImageView, ImageViewMut};
use super::u8::GrayImageU8;

#[derive(Clone, Debug, Default)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Widen an 8-bit map without rescaling.
    pub fn from_gray(gray: &GrayImageU8) -> Self {
        Self {
            w: gray.w,
            h: gray.h,
            data: gray.data.iter().map(|&v| v as f32).collect(),
        }
    }

    /// Round and saturate back to 8 bits.
    pub fn to_gray(&self) -> GrayImageU8 {
        GrayImageU8 {
            w: self.w,
            h: self.h,
            data: self
                .data
                .iter()
                .map(|&v| v.round().clamp(0.0, 255.0) as u8)
                .collect(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
