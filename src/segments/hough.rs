use super::options::HoughOptions;
use super::segment::LineSegment;
use crate::image::GrayImageU8;
use crate::stages::SegmentDetector;
use log::debug;
use rand::prelude::*;
use std::time::Instant;

const SHIFT: u32 = 16;

/// Progressive probabilistic Hough transform over a binary edge map.
#[derive(Clone, Debug, Default)]
pub struct ProbabilisticHough {
    options: HoughOptions,
}

impl ProbabilisticHough {
    pub fn new(options: HoughOptions) -> Self {
        Self { options }
    }
}

impl SegmentDetector for ProbabilisticHough {
    fn detect(&self, edges: &GrayImageU8) -> Vec<LineSegment> {
        let start = Instant::now();
        let segments = HoughExtractor::new(edges, &self.options).extract();
        debug!(
            "ProbabilisticHough {}x{} segments={} elapsed_ms={:.3}",
            edges.w,
            edges.h,
            segments.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        segments
    }
}

/// Direction of one traced line in fixed point along the dominant axis.
#[derive(Clone, Copy)]
struct Walk {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
    // true when x is the integer (dominant) axis
    x_major: bool,
}

impl Walk {
    #[inline]
    fn pixel(&self, x: i64, y: i64) -> (i64, i64) {
        if self.x_major {
            (x, y >> SHIFT)
        } else {
            (x >> SHIFT, y)
        }
    }
}

pub(super) struct HoughExtractor<'a> {
    options: &'a HoughOptions,
    width: usize,
    height: usize,
    mask: Vec<u8>,
    accum: Vec<i32>,
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    points: Vec<(usize, usize)>,
}

impl<'a> HoughExtractor<'a> {
    pub(super) fn new(edges: &GrayImageU8, options: &'a HoughOptions) -> Self {
        let (width, height) = (edges.w, edges.h);
        let num_angle = ((std::f32::consts::PI / options.theta).round() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / options.rho).round() as usize).max(1);
        let irho = 1.0 / options.rho;
        let trig = (0..num_angle)
            .map(|n| {
                let ang = n as f32 * options.theta;
                (ang.cos() * irho, ang.sin() * irho)
            })
            .collect();

        let mut mask = vec![0u8; width * height];
        let mut points = Vec::new();
        for (idx, &v) in edges.data.iter().enumerate() {
            if v != 0 {
                mask[idx] = 1;
                points.push((idx % width, idx / width));
            }
        }

        Self {
            options,
            width,
            height,
            mask,
            accum: vec![0; num_angle * num_rho],
            trig,
            num_rho,
            points,
        }
    }

    #[inline]
    fn rho_index(&self, n: usize, x: usize, y: usize) -> Option<usize> {
        let (c, s) = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round() as isize + (self.num_rho as isize - 1) / 2;
        (r >= 0 && (r as usize) < self.num_rho).then_some(r as usize)
    }

    /// Add the point's votes; returns the strongest angle bin and its count.
    fn vote(&mut self, x: usize, y: usize) -> (usize, i32) {
        let mut max_val = self.options.vote_threshold as i32 - 1;
        let mut max_n = 0;
        for n in 0..self.trig.len() {
            if let Some(r) = self.rho_index(n, x, y) {
                let cell = &mut self.accum[n * self.num_rho + r];
                *cell += 1;
                if max_val < *cell {
                    max_val = *cell;
                    max_n = n;
                }
            }
        }
        (max_n, max_val)
    }

    fn unvote(&mut self, x: usize, y: usize) {
        for n in 0..self.trig.len() {
            if let Some(r) = self.rho_index(n, x, y) {
                self.accum[n * self.num_rho + r] -= 1;
            }
        }
    }

    fn walk_for(&self, n: usize, x: usize, y: usize) -> Walk {
        let (c, s) = self.trig[n];
        // line direction is perpendicular to the normal (c, s)
        let a = -s;
        let b = c;
        let (x, y) = (x as i64, y as i64);
        let half = 1i64 << (SHIFT - 1);
        if a.abs() > b.abs() {
            Walk {
                x0: x,
                y0: (y << SHIFT) + half,
                dx: if a > 0.0 { 1 } else { -1 },
                dy: (b * (1i64 << SHIFT) as f32 / a.abs()).round() as i64,
                x_major: true,
            }
        } else {
            Walk {
                x0: (x << SHIFT) + half,
                y0: y,
                dx: (a * (1i64 << SHIFT) as f32 / b.abs()).round() as i64,
                dy: if b > 0.0 { 1 } else { -1 },
                x_major: false,
            }
        }
    }

    #[inline]
    fn in_bounds(&self, px: i64, py: i64) -> bool {
        px >= 0 && py >= 0 && (px as usize) < self.width && (py as usize) < self.height
    }

    /// Farthest set pixel reachable in each direction, bridging short gaps.
    fn trace(&self, walk: &Walk) -> [(i64, i64); 2] {
        let mut ends = [(0i64, 0i64); 2];
        let max_gap = self.options.max_line_gap;
        for (k, end) in ends.iter_mut().enumerate() {
            let sign = if k == 0 { 1 } else { -1 };
            let (dx, dy) = (walk.dx * sign, walk.dy * sign);
            let (mut x, mut y) = (walk.x0, walk.y0);
            let mut gap = 0u32;
            loop {
                let (px, py) = walk.pixel(x, y);
                if !self.in_bounds(px, py) {
                    break;
                }
                if self.mask[py as usize * self.width + px as usize] != 0 {
                    gap = 0;
                    *end = (px, py);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
                x += dx;
                y += dy;
            }
        }
        ends
    }

    /// Clear the traced pixels; a kept line also withdraws their votes.
    fn consume(&mut self, walk: &Walk, ends: &[(i64, i64); 2], keep: bool) {
        for (k, &end) in ends.iter().enumerate() {
            let sign = if k == 0 { 1 } else { -1 };
            let (dx, dy) = (walk.dx * sign, walk.dy * sign);
            let (mut x, mut y) = (walk.x0, walk.y0);
            loop {
                let (px, py) = walk.pixel(x, y);
                if !self.in_bounds(px, py) {
                    break;
                }
                let idx = py as usize * self.width + px as usize;
                if self.mask[idx] != 0 {
                    if keep {
                        self.unvote(px as usize, py as usize);
                    }
                    self.mask[idx] = 0;
                }
                if (px, py) == end {
                    break;
                }
                x += dx;
                y += dy;
            }
        }
    }

    pub(super) fn extract(mut self) -> Vec<LineSegment> {
        let mut rng = StdRng::seed_from_u64(self.options.seed);
        let mut order = std::mem::take(&mut self.points);
        order.shuffle(&mut rng);

        let min_len = i64::from(self.options.min_line_length);
        let mut segments = Vec::new();
        for (x, y) in order {
            // already claimed by an earlier line
            if self.mask[y * self.width + x] == 0 {
                continue;
            }
            let (max_n, max_val) = self.vote(x, y);
            if max_val < self.options.vote_threshold as i32 {
                continue;
            }

            let walk = self.walk_for(max_n, x, y);
            let ends = self.trace(&walk);
            let good_line = (ends[1].0 - ends[0].0).abs() >= min_len
                || (ends[1].1 - ends[0].1).abs() >= min_len;
            self.consume(&walk, &ends, good_line);

            if good_line {
                segments.push(LineSegment::new(
                    ends[0].0 as i32,
                    ends[0].1 as i32,
                    ends[1].0 as i32,
                    ends[1].1 as i32,
                ));
            }
        }
        segments
    }
}
