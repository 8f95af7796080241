//! Lane core: side classification and per-side line fitting.
//!
//! Overview
//! - [`LaneBounds`] derives the slope window of each side from the frame size.
//!   In image coordinates (y down) the right boundary rises to the right with
//!   a positive slope and the left boundary has a negative slope.
//! - [`LaneClassifier`] routes every detected segment to at most one side. It
//!   drops vertical segments, segments touching or straddling the centre
//!   column, and segments whose slope leaves the side's open window.
//! - [`LaneFitter`] fits a least-squares line per side. When that slope leaves
//!   the closed window (clustered or nearly vertical support), it averages the
//!   per-segment slopes and intercepts instead. The line is then projected to
//!   the bottom row and to the horizon two thirds down the frame.
//!
//! Everything here is a pure function of the segments and the frame size.
//! "No line" is a normal outcome, never an error.

mod bounds;
mod classify;
mod fit;

pub use bounds::{LaneBounds, Side, SlopeBounds};
pub use classify::{Classification, ClassifierCounts, LaneClassifier, PointSet};
pub use fit::{
    averaged_pair_fit, horizon_row, least_squares_fit, FitStrategy, FittedLine, LaneFitter,
    LaneLine,
};

use crate::segments::LineSegment;

/// Outcome of the lane core for one frame.
#[derive(Clone, Debug)]
pub struct LaneEstimate {
    pub bounds: LaneBounds,
    pub classification: Classification,
    pub left: Option<LaneLine>,
    pub right: Option<LaneLine>,
}

impl LaneEstimate {
    pub fn lines(&self) -> impl Iterator<Item = &LaneLine> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Classify `segments` and fit both sides for a `width × height` frame.
pub fn estimate_lanes(segments: &[LineSegment], width: usize, height: usize) -> LaneEstimate {
    let bounds = LaneBounds::for_frame(width, height);
    let classification = LaneClassifier::new(bounds).classify(segments);
    let fitter = LaneFitter::new(height);
    let left = fitter.fit_side(Side::Left, &classification.left, &bounds.left);
    let right = fitter.fit_side(Side::Right, &classification.right, &bounds.right);
    LaneEstimate {
        bounds,
        classification,
        left,
        right,
    }
}
