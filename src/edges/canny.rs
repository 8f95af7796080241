//! Canny edge detection on a smoothed luma image.
//!
//! Non-maximum suppression picks the two comparison neighbours along the
//! gradient direction, quantised into 0°, 45°, 90° and 135° bins. A pixel
//! survives if it beats the first neighbour strictly and the second one
//! non-strictly, which keeps exactly one pixel on flat-topped ridges.
//! Survivors above `high` seed the edges; survivors above `low` join an edge
//! only when 8-connected to a seed.
use super::blur::{gaussian_blur, GaussianKernel};
use super::grad::{sobel_gradients, Grad};
use super::gray::grayscale;
use crate::image::{GrayImageU8, ImageF32, ImageView, RgbImageU8};
use crate::stages::EdgeMap;
use log::debug;
use std::time::Instant;

const TAN_22_5_DEG: f32 = 0.414_213_56;

const EDGE: u8 = 255;

// Per-pixel NMS/hysteresis state.
const SUPPRESSED: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

fn suppress_non_maxima(grad: &Grad, low: f32, high: f32) -> Vec<u8> {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut state = vec![SUPPRESSED; w * h];
    if w < 3 || h < 3 {
        return state;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0) == (gy >= 0.0);

            // (before, after) along the gradient
            let (neighbor1, neighbor2) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag > neighbor1 && mag >= neighbor2 {
                state[y * w + x] = if mag > high { STRONG } else { WEAK };
            }
        }
    }
    state
}

fn hysteresis(state: &mut [u8], w: usize, h: usize) -> GrayImageU8 {
    let mut out = GrayImageU8::new(w, h);
    let mut stack: Vec<usize> = state
        .iter()
        .enumerate()
        .filter_map(|(i, &s)| (s == STRONG).then_some(i))
        .collect();
    for &i in &stack {
        out.data[i] = EDGE;
    }

    while let Some(idx) = stack.pop() {
        let x = (idx % w) as isize;
        let y = (idx / w) as isize;
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let n = ny as usize * w + nx as usize;
                if state[n] == WEAK {
                    state[n] = STRONG;
                    out.data[n] = EDGE;
                    stack.push(n);
                }
            }
        }
    }
    out
}

/// Canny on an already smoothed float image. Thresholds are in the L1
/// gradient units of a 0..255 input.
pub fn canny(smoothed: &ImageF32, low: f32, high: f32) -> GrayImageU8 {
    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let grad = sobel_gradients(smoothed);
    let mut state = suppress_non_maxima(&grad, low, high);
    hysteresis(&mut state, smoothed.w, smoothed.h)
}

/// Default [`EdgeMap`]: luma → Gaussian blur → Canny.
#[derive(Clone, Debug)]
pub struct CannyEdgeMap {
    kernel: GaussianKernel,
    low: f32,
    high: f32,
}

impl CannyEdgeMap {
    pub fn new(kernel: GaussianKernel, low: f32, high: f32) -> Self {
        Self { kernel, low, high }
    }
}

impl EdgeMap for CannyEdgeMap {
    fn edges(&self, image: &RgbImageU8) -> GrayImageU8 {
        let start = Instant::now();
        let gray = ImageF32::from_gray(&grayscale(image));
        // round-trip through u8 like an 8-bit blur would
        let blurred = ImageF32::from_gray(&gaussian_blur(&gray, &self.kernel).to_gray());
        let edges = canny(&blurred, self.low, self.high);
        debug!(
            "CannyEdgeMap {}x{} edges={} elapsed_ms={:.3}",
            image.w,
            image.h,
            edges.count_nonzero(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        edges
    }
}
