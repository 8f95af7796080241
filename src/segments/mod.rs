//! Segment detection on a binary edge map.
//!
//! The default detector is the progressive probabilistic Hough transform:
//!
//! - Edge pixels are visited in a random order. The order is drawn from a
//!   seeded RNG, so the same edge map always yields the same segments.
//! - Each visited pixel votes for every quantised `(theta, rho)` line through
//!   it. As soon as one accumulator bin reaches the vote threshold, the line
//!   is traced from the pixel in both directions, bridging gaps of up to
//!   `max_line_gap` pixels.
//! - Traced pixels are removed from the edge set. If the traced run is long
//!   enough they also give back their votes, so one physical line is reported
//!   once.
//!
//! Complexity
//! - Each edge pixel votes at most once (O(N · n_theta)). Tracing is linear
//!   in the traced length.

mod hough;
mod options;
mod segment;

pub use hough::ProbabilisticHough;
pub use options::HoughOptions;
pub use segment::LineSegment;

#[cfg(test)]
mod tests;
