use super::bounds::{LaneBounds, Side};
use crate::segments::LineSegment;
use serde::Serialize;

/// Endpoints accepted for one side, in detection order.
///
/// Points `2i` and `2i + 1` are the two endpoints of the `i`-th accepted
/// segment, which the averaged-pair fit relies on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<(i32, i32)>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw points; consecutive points are paired as above.
    pub fn from_points(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn push_segment(&mut self, seg: &LineSegment) {
        self.points.extend(seg.endpoints());
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    /// Endpoint pairs of the accepted segments. A trailing odd point is ignored.
    pub fn pairs(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        self.points.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Why segments were dropped, and how many each side kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierCounts {
    pub vertical: usize,
    pub straddling: usize,
    pub slope_rejected: usize,
    pub left_accepted: usize,
    pub right_accepted: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub left: PointSet,
    pub right: PointSet,
    pub counts: ClassifierCounts,
}

/// Splits segments into left/right lane candidates by position and slope.
#[derive(Clone, Copy, Debug)]
pub struct LaneClassifier {
    bounds: LaneBounds,
}

impl LaneClassifier {
    pub fn new(bounds: LaneBounds) -> Self {
        Self { bounds }
    }

    /// Side a segment lies on, if both endpoints are strictly on one side.
    fn position(&self, seg: &LineSegment) -> Option<Side> {
        let (x1, x2) = (f64::from(seg.x1), f64::from(seg.x2));
        let mid = self.bounds.mid_x;
        if x1 > mid && x2 > mid {
            Some(Side::Right)
        } else if x1 < mid && x2 < mid {
            Some(Side::Left)
        } else {
            None
        }
    }

    pub fn classify(&self, segments: &[LineSegment]) -> Classification {
        let mut out = Classification::default();
        for seg in segments {
            let Some(slope) = seg.slope() else {
                out.counts.vertical += 1;
                continue;
            };
            let Some(side) = self.position(seg) else {
                out.counts.straddling += 1;
                continue;
            };
            if !self.bounds.side(side).admits(slope) {
                out.counts.slope_rejected += 1;
                continue;
            }
            match side {
                Side::Left => {
                    out.left.push_segment(seg);
                    out.counts.left_accepted += 1;
                }
                Side::Right => {
                    out.right.push_segment(seg);
                    out.counts.right_accepted += 1;
                }
            }
        }
        out
    }
}
