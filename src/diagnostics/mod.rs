//! Diagnostics data model returned by the detector and written by the tools.
//!
//! `LaneReport` is the entry point: it bundles the lane result, a
//! `PipelineTrace` describing what each stage saw and how long it took, and
//! the composited output frame (not serialized).

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, LaneReport, PipelineTrace, SegmentStage};
pub use timing::{StageTiming, TimingBreakdown};
