use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

/// Plausible slope window for one side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeBounds {
    pub min_slope: f64,
    pub max_slope: f64,
}

impl SlopeBounds {
    /// Strict containment, used to gate raw segments.
    #[inline]
    pub fn admits(&self, slope: f64) -> bool {
        self.min_slope < slope && slope < self.max_slope
    }

    /// Inclusive containment, used to accept a fitted slope.
    #[inline]
    pub fn contains(&self, slope: f64) -> bool {
        self.min_slope <= slope && slope <= self.max_slope
    }
}

/// Centre column and per-side slope windows for one frame size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneBounds {
    pub mid_x: f64,
    pub left: SlopeBounds,
    pub right: SlopeBounds,
}

impl LaneBounds {
    /// `right = ((H/2)/W, H/(W/2))`, `left` is its mirror.
    pub fn for_frame(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        let right = SlopeBounds {
            min_slope: (h / 2.0) / w,
            max_slope: h / (w / 2.0),
        };
        let left = SlopeBounds {
            min_slope: -right.max_slope,
            max_slope: -right.min_slope,
        };
        Self {
            mid_x: w / 2.0,
            left,
            right,
        }
    }

    pub fn side(&self, side: Side) -> &SlopeBounds {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounds_for_960x540() {
        let b = LaneBounds::for_frame(960, 540);
        assert_relative_eq!(b.mid_x, 480.0);
        assert_relative_eq!(b.right.min_slope, 0.28125);
        assert_relative_eq!(b.right.max_slope, 1.125);
        assert_relative_eq!(b.left.min_slope, -1.125);
        assert_relative_eq!(b.left.max_slope, -0.28125);
    }

    #[test]
    fn bounds_are_a_pure_function_of_size() {
        assert_eq!(LaneBounds::for_frame(1280, 720), LaneBounds::for_frame(1280, 720));
    }

    #[test]
    fn admits_is_strict_contains_is_inclusive() {
        let b = SlopeBounds {
            min_slope: 0.5,
            max_slope: 1.0,
        };
        assert!(!b.admits(0.5));
        assert!(b.contains(0.5));
        assert!(b.admits(0.75));
        assert!(!b.contains(1.01));
    }
}
