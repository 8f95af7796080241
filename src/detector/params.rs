//! Parameter types configuring the lane pipeline.
//!
//! One [`PipelineConfig`] value carries every knob of every stage. It is
//! deserialized from JSON with per-field defaults, so a config file only needs
//! the values it overrides.

use crate::color::HsvRange;
use crate::error::{LaneError, LaneResult};
use crate::region::DEFAULT_APEX_OFFSET;
use crate::render::{BlendWeights, LineStyle};
use crate::segments::HoughOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Gaussian kernel width and height before edge detection (odd).
    pub blur_kernel_size: usize,
    /// Canny hysteresis thresholds.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Probabilistic Hough segment detector.
    pub hough: HoughOptions,
    /// HSV gate for yellow markings.
    pub yellow: HsvRange,
    /// HSV gate for white markings.
    pub white: HsvRange,
    /// Final compositing weights.
    pub blend: BlendWeights,
    /// Rendered lane line appearance.
    pub line: LineStyle,
    /// Region-of-interest apex offset below the frame centre (pixels).
    pub roi_apex_offset: i32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            canny_low: 50.0,
            canny_high: 150.0,
            hough: HoughOptions::default(),
            yellow: HsvRange::new([15, 100, 150], [30, 255, 255]),
            white: HsvRange::new([0, 0, 215], [255, 50, 255]),
            blend: BlendWeights::default(),
            line: LineStyle::default(),
            roi_apex_offset: DEFAULT_APEX_OFFSET,
        }
    }
}

impl PipelineConfig {
    /// Reject values no stage can work with.
    pub fn validate(&self) -> LaneResult<()> {
        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(invalid(format!(
                "blur_kernel_size must be odd and positive, got {}",
                self.blur_kernel_size
            )));
        }
        if !(self.canny_low.is_finite() && self.canny_high.is_finite())
            || self.canny_low < 0.0
            || self.canny_high < 0.0
        {
            return Err(invalid(format!(
                "canny thresholds must be finite and non-negative, got {} / {}",
                self.canny_low, self.canny_high
            )));
        }
        let hough = &self.hough;
        if !(hough.rho.is_finite() && hough.rho > 0.0) {
            return Err(invalid(format!("hough.rho must be > 0, got {}", hough.rho)));
        }
        if !(hough.theta.is_finite()
            && hough.theta > 0.0
            && hough.theta <= std::f32::consts::PI)
        {
            return Err(invalid(format!(
                "hough.theta must be in (0, pi], got {}",
                hough.theta
            )));
        }
        if self.line.thickness == 0 {
            return Err(invalid("line.thickness must be at least 1".to_string()));
        }
        let b = &self.blend;
        if !(b.alpha.is_finite() && b.beta.is_finite() && b.gamma.is_finite()) {
            return Err(invalid("blend weights must be finite".to_string()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> LaneError {
    LaneError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{ "canny_low": 30, "hough": { "max_line_gap": 5 } }"#)
                .unwrap();
        assert_eq!(cfg.canny_low, 30.0);
        assert_eq!(cfg.canny_high, 150.0);
        assert_eq!(cfg.hough.max_line_gap, 5);
        assert_eq!(cfg.hough.min_line_length, 20);
        assert_eq!(cfg.white, PipelineConfig::default().white);
    }

    #[test]
    fn even_kernel_is_rejected() {
        let cfg = PipelineConfig {
            blur_kernel_size: 4,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(LaneError::InvalidConfig(_))));
    }

    #[test]
    fn zero_rho_and_thickness_are_rejected() {
        let mut cfg = PipelineConfig::default();
        cfg.hough.rho = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = PipelineConfig::default();
        cfg.line.thickness = 0;
        assert!(cfg.validate().is_err());
    }
}
