//! Trapezoid region of interest in front of the vehicle.
//!
//! The polygon spans the full bottom edge of the frame and narrows to a short
//! apex just below the vertical centre. Its vertices depend only on the frame
//! size and the apex offset, so every frame of one resolution gets the same
//! mask.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use crate::stages::RegionMask;
use serde::Serialize;

/// Default distance (px) of the apex below the frame centre, and the apex width.
pub const DEFAULT_APEX_OFFSET: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionPolygon {
    pub vertices: [[i32; 2]; 4],
}

impl RegionPolygon {
    /// Vertices `(0, H)`, `(W/2, H/2 + o)`, `(W/2 + o, H/2 + o)`, `(W, H)`,
    /// with halves floored.
    pub fn for_frame(width: usize, height: usize, apex_offset: i32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let o = f64::from(apex_offset);
        let v1 = [0, height as i32];
        let v2 = [(w / 2.0).floor() as i32, (h / 2.0 + o).floor() as i32];
        let v3 = [(w / 2.0 + o).floor() as i32, (h / 2.0).floor() as i32 + apex_offset];
        let v4 = [width as i32, height as i32];
        Self {
            vertices: [v1, v2, v3, v4],
        }
    }

    /// Even-odd containment of `(px, py)`, counting points on an edge as inside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let v = &self.vertices;
        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            let (xi, yi) = (f64::from(v[i][0]), f64::from(v[i][1]));
            let (xj, yj) = (f64::from(v[j][0]), f64::from(v[j][1]));
            if on_segment(px, py, xi, yi, xj, yj) {
                return true;
            }
            if (yi > py) != (yj > py) {
                let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
                if px < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

fn on_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
    if cross.abs() > 1e-9 {
        return false;
    }
    px >= ax.min(bx) && px <= ax.max(bx) && py >= ay.min(by) && py <= ay.max(by)
}

/// Default [`RegionMask`]: keeps edge pixels whose integer coordinate lies in
/// the polygon.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolygonRegionMask;

impl RegionMask for PolygonRegionMask {
    fn mask(&self, edges: &GrayImageU8, polygon: &RegionPolygon) -> GrayImageU8 {
        let mut out = GrayImageU8::new(edges.w, edges.h);
        for y in 0..edges.h {
            let src = edges.row(y);
            let dst = out.row_mut(y);
            for (x, (&v, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
                if v != 0 && polygon.contains(x as f64, y as f64) {
                    *d = v;
                }
            }
        }
        out
    }
}
