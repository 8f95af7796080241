#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod lanes;
pub mod stages;
pub mod types;

// Default stage implementations and tool configuration.
pub mod color;
pub mod config;
pub mod edges;
pub mod region;
pub mod render;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{draw_lane_pipeline, LaneDetector, PipelineConfig};
pub use crate::error::{LaneError, LaneResult};
pub use crate::types::LaneDetection;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{LaneReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() -> LaneResult<()> {
/// let (w, h) = (960usize, 540usize);
/// let rgb = vec![0u8; w * h * 3];
///
/// let detector = LaneDetector::new(PipelineConfig::default())?;
/// let report = detector.process_with_diagnostics(&RgbFrame::new(w, h, &rgb)?);
/// println!(
///     "found={} latency_ms={:.3}",
///     report.result.found(),
///     report.result.latency_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{RgbFrame, RgbImageU8};
    pub use crate::lanes::{LaneLine, Side};
    pub use crate::segments::LineSegment;
    pub use crate::{LaneDetection, LaneDetector, LaneResult, PipelineConfig};
}
