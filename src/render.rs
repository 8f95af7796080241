//! Lane canvas rendering and final compositing.
use crate::image::{RgbFrame, RgbImageU8};
use crate::lanes::LaneLine;
use crate::stages::Compositor;
use serde::{Deserialize, Serialize};

/// Appearance of a rendered lane line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: [u8; 3],
    /// Stroke width in pixels (>= 1).
    pub thickness: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            thickness: 10,
        }
    }
}

/// Paint a straight stroke from `p0` to `p1` with round caps.
///
/// A pixel is painted when its distance to the segment is at most half the
/// thickness. Endpoints may lie outside the canvas; the stroke is clipped.
pub fn draw_segment(canvas: &mut RgbImageU8, p0: [i32; 2], p1: [i32; 2], style: &LineStyle) {
    if canvas.w == 0 || canvas.h == 0 {
        return;
    }
    let radius = f64::from(style.thickness.max(1)) / 2.0;
    let reach = radius.ceil() as i64;
    let (ax, ay) = (f64::from(p0[0]), f64::from(p0[1]));
    let (bx, by) = (f64::from(p1[0]), f64::from(p1[1]));

    let (cw, ch) = (canvas.w as i64, canvas.h as i64);
    let clamp_x = |v: i64| v.clamp(0, cw - 1);
    let clamp_y = |v: i64| v.clamp(0, ch - 1);
    let x_lo = i64::from(p0[0].min(p1[0])) - reach;
    let x_hi = i64::from(p0[0].max(p1[0])) + reach;
    let y_lo = i64::from(p0[1].min(p1[1])) - reach;
    let y_hi = i64::from(p0[1].max(p1[1])) + reach;
    if x_hi < 0 || y_hi < 0 || x_lo >= cw || y_lo >= ch {
        return;
    }

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let r_sq = radius * radius;
    for y in clamp_y(y_lo)..=clamp_y(y_hi) {
        for x in clamp_x(x_lo)..=clamp_x(x_hi) {
            let (px, py) = (x as f64, y as f64);
            let t = if len_sq > 0.0 {
                (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (cx, cy) = (ax + t * dx - px, ay + t * dy - py);
            if cx * cx + cy * cy <= r_sq {
                canvas.put_pixel(x as usize, y as usize, style.color);
            }
        }
    }
}

/// Render a lane line from its base point to its horizon point.
pub fn draw_lane_line(canvas: &mut RgbImageU8, line: &LaneLine, style: &LineStyle) {
    draw_segment(canvas, line.base, line.horizon, style);
}

/// `out = frame * alpha + canvas * beta + gamma`, rounded and saturated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            alpha: 0.8,
            beta: 1.0,
            gamma: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedCompositor {
    weights: BlendWeights,
}

impl WeightedCompositor {
    pub fn new(weights: BlendWeights) -> Self {
        Self { weights }
    }
}

impl Compositor for WeightedCompositor {
    fn blend(&self, canvas: &RgbImageU8, frame: &RgbFrame<'_>) -> RgbImageU8 {
        let BlendWeights { alpha, beta, gamma } = self.weights;
        let data = frame
            .as_bytes()
            .iter()
            .zip(&canvas.data)
            .map(|(&f, &c)| {
                let v = f32::from(f) * alpha + f32::from(c) * beta + gamma;
                v.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        RgbImageU8 {
            w: frame.width(),
            h: frame.height(),
            data,
        }
    }
}
