use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic Hough segment detector.
///
/// - `rho`: distance resolution of the accumulator in pixels.
/// - `theta`: angular resolution in radians.
/// - `vote_threshold`: minimum accumulator votes before a line is traced.
/// - `min_line_length`: shortest accepted segment (pixels along x or y).
/// - `max_line_gap`: largest run of missing pixels bridged inside a segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    pub rho: f32,
    pub theta: f32,
    pub vote_threshold: u32,
    pub min_line_length: u32,
    pub max_line_gap: u32,
    /// Seed for the edge-point visiting order.
    pub seed: u64,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho: 2.0,
            theta: std::f32::consts::PI / 180.0,
            vote_threshold: 1,
            min_line_length: 20,
            max_line_gap: 20,
            seed: u64::MAX,
        }
    }
}
