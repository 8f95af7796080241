use serde::{Deserialize, Serialize};

/// Raw segment from the detector: two integer endpoints in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// `dy / dx`, or `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.x1 == self.x2 {
            return None;
        }
        Some(f64::from(self.y2 - self.y1) / f64::from(self.x2 - self.x1))
    }

    pub fn endpoints(&self) -> [(i32, i32); 2] {
        [(self.x1, self.y1), (self.x2, self.y2)]
    }

    pub fn length(&self) -> f64 {
        let dx = f64::from(self.x2 - self.x1);
        let dy = f64::from(self.y2 - self.y1);
        (dx * dx + dy * dy).sqrt()
    }
}
