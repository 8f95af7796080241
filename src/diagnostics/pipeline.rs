use crate::diagnostics::TimingBreakdown;
use crate::image::RgbImageU8;
use crate::lanes::{ClassifierCounts, LaneBounds};
use crate::region::RegionPolygon;
use crate::segments::LineSegment;
use crate::types::LaneDetection;
use serde::Serialize;

/// Result produced by [`LaneDetector::process_with_diagnostics`](crate::LaneDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneReport {
    pub result: LaneDetection,
    pub trace: PipelineTrace,
    #[serde(skip)]
    pub output: RgbImageU8,
}

/// What each stage of one invocation produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub region: RegionPolygon,
    pub bounds: LaneBounds,
    pub color_pixels: usize,
    pub edge_pixels: usize,
    pub masked_edge_pixels: usize,
    pub segments: SegmentStage,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub detected: Vec<LineSegment>,
    pub classifier: ClassifierCounts,
}
