//! Packed 3-channel 8-bit rasters in RGB order.
use crate::error::{LaneError, LaneResult};

const CHANNELS: usize = 3;

/// Borrowed input frame. Construction validates the `H × W × 3` shape, so
/// every downstream stage can index without bounds surprises.
#[derive(Clone, Copy, Debug)]
pub struct RgbFrame<'a> {
    w: usize,
    h: usize,
    data: &'a [u8],
}

impl<'a> RgbFrame<'a> {
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> LaneResult<Self> {
        let expected = w * h * CHANNELS;
        if w == 0 || h == 0 || data.len() != expected {
            return Err(LaneError::ShapeMismatch {
                width: w,
                height: h,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Interleaved RGB bytes of row `y` (`3 * width` long).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned RGB buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl RgbImageU8 {
    /// All-zero (black) buffer.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h * CHANNELS],
        }
    }

    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> LaneResult<Self> {
        RgbFrame::new(w, h, &data)?;
        Ok(Self { w, h, data })
    }

    /// Borrow as an input frame. An empty buffer cannot be viewed.
    pub fn as_frame(&self) -> LaneResult<RgbFrame<'_>> {
        RgbFrame::new(self.w, self.h, &self.data)
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.w + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// True when every byte is zero.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rejects_wrong_length() {
        let data = vec![0u8; 4 * 3 * 3 - 1];
        let err = RgbFrame::new(4, 3, &data).unwrap_err();
        match err {
            LaneError::ShapeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 36);
                assert_eq!(actual, 35);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn frame_rejects_zero_size() {
        assert!(RgbFrame::new(0, 5, &[]).is_err());
    }

    #[test]
    fn pixel_access_uses_rgb_order() {
        let mut img = RgbImageU8::new(3, 2);
        img.put_pixel(2, 1, [10, 20, 30]);
        let frame = img.as_frame().unwrap();
        assert_eq!(frame.pixel(2, 1), [10, 20, 30]);
        assert_eq!(&frame.row(1)[6..9], &[10, 20, 30]);
        assert!(!img.is_blank());
    }
}
