//! Lane detector orchestrating the per-frame pipeline.
//!
//! Stage order (fixed):
//! 1. colour gate (yellow ∪ white in HSV),
//! 2. edge map (luma → Gaussian blur → Canny),
//! 3. region mask (trapezoid in front of the vehicle),
//! 4. segment detector (probabilistic Hough),
//! 5. lane core (classification + per-side fit, see [`crate::lanes`]),
//! 6. rendering both lines onto one blank canvas,
//! 7. compositing the canvas over the original frame.
//!
//! Modules
//! - [`params`] – the [`PipelineConfig`] value consumed by every stage.
//! - `pipeline` – the [`LaneDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::PipelineConfig;
pub use pipeline::{draw_lane_pipeline, LaneDetector};
