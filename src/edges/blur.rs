//! Separable Gaussian smoothing.
//!
//! Small odd kernels (1, 3, 5, 7) use the fixed binomial-like taps that
//! common imaging libraries apply when no sigma is given; larger kernels derive
//! `sigma = 0.3 * ((k - 1) * 0.5 - 1) + 0.8`. Borders reflect without
//! repeating the edge pixel (`dcb|abcd|cba`).
use crate::image::{ImageF32, ImageView, ImageViewMut};

const TAPS_1: [f32; 1] = [1.0];
const TAPS_3: [f32; 3] = [0.25, 0.5, 0.25];
/// `[1, 4, 6, 4, 1] / 16`
const TAPS_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const TAPS_7: [f32; 7] = [
    0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
];

/// Normalised 1D Gaussian taps for a `size × size` kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build taps for an odd kernel size. Returns `None` for even or zero sizes.
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 || size % 2 == 0 {
            return None;
        }
        let taps = match size {
            1 => TAPS_1.to_vec(),
            3 => TAPS_3.to_vec(),
            5 => TAPS_5.to_vec(),
            7 => TAPS_7.to_vec(),
            _ => sampled_taps(size),
        };
        Some(Self { taps })
    }

    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

fn sampled_taps(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let scale = -0.5 / (sigma * sigma);
    let radius = (size / 2) as f32;
    let mut taps: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - radius;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Reflect-101 index into `[0, len)`.
#[inline]
fn reflect_101(idx: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let period = 2 * last;
    let mut i = idx.rem_euclid(period);
    if i > last {
        i = period - i;
    }
    i as usize
}

/// Blur `src` with the separable kernel; horizontal pass first.
pub fn gaussian_blur(src: &ImageF32, kernel: &GaussianKernel) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 || kernel.taps().len() == 1 {
        return src.clone();
    }
    let taps = kernel.taps();
    let radius = kernel.radius() as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - radius, h);
            let src_row = horiz.row(sy);
            for (dst_px, &v) in dst_row.iter_mut().zip(src_row) {
                *dst_px += tap * v;
            }
        }
    }
    out
}
