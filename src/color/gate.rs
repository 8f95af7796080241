use super::hsv::rgb_to_hsv;
use crate::image::{RgbFrame, RgbImageU8};
use crate::stages::ColorGate;
use serde::{Deserialize, Serialize};

/// Inclusive per-channel HSV range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Union of HSV ranges; a pixel survives if any range contains it.
#[derive(Clone, Debug)]
pub struct HsvColorGate {
    ranges: Vec<HsvRange>,
}

impl HsvColorGate {
    pub fn new(ranges: impl IntoIterator<Item = HsvRange>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    #[inline]
    pub fn accepts(&self, rgb: [u8; 3]) -> bool {
        let hsv = rgb_to_hsv(rgb);
        self.ranges.iter().any(|r| r.contains(hsv))
    }
}

impl ColorGate for HsvColorGate {
    fn apply(&self, frame: &RgbFrame<'_>) -> RgbImageU8 {
        let (w, h) = (frame.width(), frame.height());
        let mut out = RgbImageU8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let px = frame.pixel(x, y);
                if self.accepts(px) {
                    out.put_pixel(x, y, px);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane_gate() -> HsvColorGate {
        HsvColorGate::new([
            HsvRange::new([15, 100, 150], [30, 255, 255]),
            HsvRange::new([0, 0, 215], [255, 50, 255]),
        ])
    }

    #[test]
    fn keeps_white_and_yellow_drops_asphalt() {
        let gate = lane_gate();
        let mut img = RgbImageU8::new(3, 1);
        img.put_pixel(0, 0, [240, 240, 240]);
        img.put_pixel(1, 0, [230, 200, 40]);
        img.put_pixel(2, 0, [90, 90, 95]);

        let out = gate.apply(&img.as_frame().unwrap());
        assert_eq!(out.pixel(0, 0), [240, 240, 240]);
        assert_eq!(out.pixel(1, 0), [230, 200, 40]);
        assert_eq!(out.pixel(2, 0), [0, 0, 0]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = HsvRange::new([10, 10, 10], [20, 20, 20]);
        assert!(r.contains([10, 20, 15]));
        assert!(!r.contains([9, 20, 15]));
        assert!(!r.contains([10, 21, 15]));
    }
}
