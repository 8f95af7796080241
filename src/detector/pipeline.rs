//! Detector pipeline driving lane detection end-to-end.
//!
//! [`LaneDetector`] owns one boxed implementation per stage. `process` returns
//! the composited frame; `process_with_diagnostics` also reports the fitted
//! lines, stage counters and timings.
//!
//! ```no_run
//! use lane_detector::{LaneDetector, PipelineConfig};
//! use lane_detector::image::RgbFrame;
//!
//! # fn example(width: usize, height: usize, rgb: &[u8]) -> lane_detector::LaneResult<()> {
//! let detector = LaneDetector::new(PipelineConfig::default())?;
//! let report = detector.process_with_diagnostics(&RgbFrame::new(width, height, rgb)?);
//! println!("lanes found: {}", report.result.found());
//! # Ok(())
//! # }
//! ```
use super::params::PipelineConfig;
use crate::color::HsvColorGate;
use crate::diagnostics::{
    InputDescriptor, LaneReport, PipelineTrace, SegmentStage, TimingBreakdown,
};
use crate::edges::{CannyEdgeMap, GaussianKernel};
use crate::error::{LaneError, LaneResult};
use crate::image::{RgbFrame, RgbImageU8};
use crate::lanes::{estimate_lanes, LaneEstimate};
use crate::region::{PolygonRegionMask, RegionPolygon};
use crate::render::{draw_lane_line, WeightedCompositor};
use crate::segments::ProbabilisticHough;
use crate::stages::{ColorGate, Compositor, EdgeMap, RegionMask, SegmentDetector};
use crate::types::LaneDetection;
use log::debug;
use std::time::Instant;

/// Per-frame lane detector. Stateless between frames and shareable across
/// threads.
pub struct LaneDetector {
    config: PipelineConfig,
    color_gate: Box<dyn ColorGate>,
    edge_map: Box<dyn EdgeMap>,
    region_mask: Box<dyn RegionMask>,
    segment_detector: Box<dyn SegmentDetector>,
    compositor: Box<dyn Compositor>,
}

impl LaneDetector {
    /// Validate `config` and build the default stage implementations.
    pub fn new(config: PipelineConfig) -> LaneResult<Self> {
        config.validate()?;
        let kernel = GaussianKernel::new(config.blur_kernel_size).ok_or_else(|| {
            LaneError::InvalidConfig(format!(
                "no Gaussian kernel of size {}",
                config.blur_kernel_size
            ))
        })?;
        Ok(Self {
            color_gate: Box::new(HsvColorGate::new([config.yellow, config.white])),
            edge_map: Box::new(CannyEdgeMap::new(
                kernel,
                config.canny_low,
                config.canny_high,
            )),
            region_mask: Box::new(PolygonRegionMask),
            segment_detector: Box::new(ProbabilisticHough::new(config.hough)),
            compositor: Box::new(WeightedCompositor::new(config.blend)),
            config,
        })
    }

    pub fn with_color_gate(mut self, stage: impl ColorGate + 'static) -> Self {
        self.color_gate = Box::new(stage);
        self
    }

    pub fn with_edge_map(mut self, stage: impl EdgeMap + 'static) -> Self {
        self.edge_map = Box::new(stage);
        self
    }

    pub fn with_region_mask(mut self, stage: impl RegionMask + 'static) -> Self {
        self.region_mask = Box::new(stage);
        self
    }

    pub fn with_segment_detector(mut self, stage: impl SegmentDetector + 'static) -> Self {
        self.segment_detector = Box::new(stage);
        self
    }

    pub fn with_compositor(mut self, stage: impl Compositor + 'static) -> Self {
        self.compositor = Box::new(stage);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline and return the annotated frame.
    pub fn process(&self, frame: &RgbFrame<'_>) -> RgbImageU8 {
        self.process_with_diagnostics(frame).output
    }

    /// Run the pipeline and return the annotated frame with a detailed report.
    pub fn process_with_diagnostics(&self, frame: &RgbFrame<'_>) -> LaneReport {
        let (width, height) = (frame.width(), frame.height());
        debug!("LaneDetector::process start w={width} h={height}");
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let colored = timings.time("color_gate", || self.color_gate.apply(frame));
        let color_pixels = colored
            .data
            .chunks_exact(3)
            .filter(|px| px.iter().any(|&c| c != 0))
            .count();

        let edges = timings.time("edge_map", || self.edge_map.edges(&colored));

        let region = RegionPolygon::for_frame(width, height, self.config.roi_apex_offset);
        let masked = timings.time("region_mask", || self.region_mask.mask(&edges, &region));

        let detected = timings.time("segments", || self.segment_detector.detect(&masked));

        let lanes = timings.time("lanes", || estimate_lanes(&detected, width, height));

        let output = timings.time("render", || {
            let mut canvas = RgbImageU8::new(width, height);
            for line in lanes.lines() {
                draw_lane_line(&mut canvas, line, &self.config.line);
            }
            self.compositor.blend(&canvas, frame)
        });
        let LaneEstimate {
            bounds,
            classification,
            left,
            right,
        } = lanes;

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        timings.total_ms = latency_ms;
        debug!(
            "LaneDetector::process done segments={} left={} right={} latency_ms={:.3}",
            detected.len(),
            left.is_some(),
            right.is_some(),
            latency_ms
        );

        LaneReport {
            result: LaneDetection {
                left,
                right,
                latency_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor { width, height },
                region,
                bounds,
                color_pixels,
                edge_pixels: edges.count_nonzero(),
                masked_edge_pixels: masked.count_nonzero(),
                segments: SegmentStage {
                    detected,
                    classifier: classification.counts,
                },
                timings,
            },
            output,
        }
    }
}

/// One-shot entry point over a raw `width × height × 3` RGB buffer.
pub fn draw_lane_pipeline(
    width: usize,
    height: usize,
    data: &[u8],
    config: &PipelineConfig,
) -> LaneResult<RgbImageU8> {
    let frame = RgbFrame::new(width, height, data)?;
    let detector = LaneDetector::new(config.clone())?;
    Ok(detector.process(&frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;
    use crate::segments::LineSegment;

    struct FixedSegments(Vec<LineSegment>);

    impl SegmentDetector for FixedSegments {
        fn detect(&self, _edges: &GrayImageU8) -> Vec<LineSegment> {
            self.0.clone()
        }
    }

    #[test]
    fn injected_segments_drive_the_fit() {
        let (w, h) = (960, 540);
        let data = vec![0u8; w * h * 3];
        let frame = RgbFrame::new(w, h, &data).unwrap();
        let detector = LaneDetector::new(PipelineConfig::default())
            .unwrap()
            .with_segment_detector(FixedSegments(vec![
                LineSegment::new(600, 310, 700, 370),
                LineSegment::new(750, 400, 850, 460),
            ]));
        let report = detector.process_with_diagnostics(&frame);
        assert!(report.result.left.is_none());
        let right = report.result.right.expect("right lane");
        // y = 0.6x - 50
        assert_eq!(right.base, [984, 540]);
        assert_eq!(right.horizon, [684, 360]);
        assert_eq!(report.trace.segments.classifier.right_accepted, 2);
        assert_eq!(report.output.pixel(850, 460), [255, 0, 0]);
        assert_eq!(report.output.dimensions(), (w, h));
    }

    #[test]
    fn timings_cover_every_stage() {
        let data = vec![0u8; 64 * 48 * 3];
        let frame = RgbFrame::new(64, 48, &data).unwrap();
        let report = LaneDetector::new(PipelineConfig::default())
            .unwrap()
            .process_with_diagnostics(&frame);
        let labels: Vec<&str> = report
            .trace
            .timings
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            ["color_gate", "edge_map", "region_mask", "segments", "lanes", "render"]
        );
        assert_eq!(report.result.found(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = PipelineConfig {
            blur_kernel_size: 2,
            ..Default::default()
        };
        assert!(matches!(
            LaneDetector::new(config),
            Err(LaneError::InvalidConfig(_))
        ));
    }

    #[test]
    fn raw_buffer_of_wrong_length_fails() {
        let err = draw_lane_pipeline(4, 4, &[0u8; 10], &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, LaneError::ShapeMismatch { expected: 48, actual: 10, .. }));
    }
}
