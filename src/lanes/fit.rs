//! Per-side line fitting and extrapolation to fixed scan lines.
use super::bounds::{Side, SlopeBounds};
use super::classify::PointSet;
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::Serialize;

/// Which estimator produced a [`FittedLine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FitStrategy {
    /// Ordinary least squares over all accepted endpoints.
    LinearFit,
    /// Mean of the per-segment slopes and intercepts.
    AveragedPairFit,
}

/// `y = slope * x + intercept` in image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FittedLine {
    pub slope: f64,
    pub intercept: f64,
    pub strategy: FitStrategy,
}

impl FittedLine {
    /// Column at row `y`, rounded up. `None` for horizontal lines.
    pub fn x_at(&self, y: f64) -> Option<i32> {
        if self.slope == 0.0 {
            return None;
        }
        let x = ((y - self.intercept) / self.slope).ceil();
        (x.is_finite() && x.abs() < f64::from(i32::MAX)).then_some(x as i32)
    }
}

/// A fitted lane boundary projected onto the base row and the horizon row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneLine {
    pub side: Side,
    pub fit: FittedLine,
    pub base: [i32; 2],
    pub horizon: [i32; 2],
}

/// Upper extrapolation row, two thirds down a frame of `height` rows.
pub fn horizon_row(height: usize) -> i32 {
    (height as f64 * 2.0 / 3.0).floor() as i32
}

/// Degree-1 least squares `(slope, intercept)`.
///
/// Solves the 2×2 normal equations; `None` with fewer than two points or when
/// all x coincide.
pub fn least_squares_fit(points: &[(i32, i32)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for &(x, y) in points {
        let (x, y) = (f64::from(x), f64::from(y));
        sx += x;
        sy += y;
        sxx += x * x;
        sxy += x * y;
    }
    let normal = Matrix2::new(sxx, sx, sx, n);
    let rhs = Vector2::new(sxy, sy);
    let sol = normal.try_inverse()? * rhs;
    (sol[0].is_finite() && sol[1].is_finite()).then_some((sol[0], sol[1]))
}

/// Mean slope and intercept over the endpoint pairs of `points`.
///
/// Pairs with equal x carry no slope and are left out of the mean. `None`
/// when no usable pair remains.
pub fn averaged_pair_fit(points: &PointSet) -> Option<(f64, f64)> {
    let (mut sum_slope, mut sum_b, mut used) = (0.0f64, 0.0f64, 0usize);
    for ((x1, y1), (x2, y2)) in points.pairs() {
        if x1 == x2 {
            continue;
        }
        let slope = f64::from(y2 - y1) / f64::from(x2 - x1);
        sum_slope += slope;
        sum_b += f64::from(y1) - slope * f64::from(x1);
        used += 1;
    }
    (used > 0).then(|| (sum_slope / used as f64, sum_b / used as f64))
}

/// Fits and extrapolates one side of the lane for a fixed frame height.
#[derive(Clone, Copy, Debug)]
pub struct LaneFitter {
    height: usize,
}

impl LaneFitter {
    pub fn new(height: usize) -> Self {
        Self { height }
    }

    /// Least squares when its slope is plausible, averaged pairs otherwise.
    pub fn fit(&self, points: &PointSet, bounds: &SlopeBounds) -> Option<FittedLine> {
        if points.len() < 2 {
            return None;
        }
        if let Some((slope, intercept)) = least_squares_fit(points.points()) {
            if bounds.contains(slope) {
                return Some(FittedLine {
                    slope,
                    intercept,
                    strategy: FitStrategy::LinearFit,
                });
            }
            debug!(
                "least-squares slope {slope:.4} outside [{:.4}, {:.4}], averaging pairs",
                bounds.min_slope, bounds.max_slope
            );
        }
        let (slope, intercept) = averaged_pair_fit(points)?;
        Some(FittedLine {
            slope,
            intercept,
            strategy: FitStrategy::AveragedPairFit,
        })
    }

    /// Project a fitted line to the bottom row and the horizon row.
    pub fn extrapolate(&self, side: Side, fit: FittedLine) -> Option<LaneLine> {
        let base_y = self.height as i32;
        let horizon_y = horizon_row(self.height);
        let base_x = fit.x_at(f64::from(base_y))?;
        let horizon_x = fit.x_at(f64::from(horizon_y))?;
        Some(LaneLine {
            side,
            fit,
            base: [base_x, base_y],
            horizon: [horizon_x, horizon_y],
        })
    }

    pub fn fit_side(
        &self,
        side: Side,
        points: &PointSet,
        bounds: &SlopeBounds,
    ) -> Option<LaneLine> {
        let fit = self.fit(points, bounds)?;
        let line = self.extrapolate(side, fit);
        if line.is_none() {
            debug!("{side:?} lane fit has zero slope, skipping");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::LaneBounds;
    use approx::assert_relative_eq;

    fn right_bounds() -> SlopeBounds {
        LaneBounds::for_frame(960, 540).right
    }

    #[test]
    fn least_squares_recovers_exact_line() {
        let pts: Vec<(i32, i32)> = (0..10).map(|i| (500 + 10 * i, 60 + 6 * i)).collect();
        let (m, b) = least_squares_fit(&pts).unwrap();
        assert_relative_eq!(m, 0.6, epsilon = 1e-9);
        assert_relative_eq!(b, 60.0 - 0.6 * 500.0, epsilon = 1e-6);
    }

    #[test]
    fn least_squares_rejects_constant_x() {
        assert!(least_squares_fit(&[(5, 1), (5, 9), (5, 20)]).is_none());
        assert!(least_squares_fit(&[(5, 1)]).is_none());
    }

    #[test]
    fn well_conditioned_fit_uses_linear_strategy() {
        let points = PointSet::from_points([(600, 300), (700, 360), (800, 420), (900, 480)]);
        let fit = LaneFitter::new(540).fit(&points, &right_bounds()).unwrap();
        assert_eq!(fit.strategy, FitStrategy::LinearFit);
        assert_relative_eq!(fit.slope, 0.6, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept, -60.0, epsilon = 1e-6);
    }

    #[test]
    fn near_vertical_cluster_falls_back_to_pair_average() {
        // Two short, parallel, horizontally offset segments. Each has slope 0.5
        // but together the points stack almost vertically, so least squares
        // overshoots the right window.
        let points = PointSet::from_points([(600, 300), (602, 301), (601, 340), (603, 341)]);
        let bounds = right_bounds();
        let (ls_slope, _) = least_squares_fit(points.points()).unwrap();
        assert!(!bounds.contains(ls_slope), "least squares slope {ls_slope}");

        let fit = LaneFitter::new(540).fit(&points, &bounds).unwrap();
        assert_eq!(fit.strategy, FitStrategy::AveragedPairFit);
        assert_relative_eq!(fit.slope, 0.5, epsilon = 1e-12);
        // intercepts 0.0 and 39.5
        assert_relative_eq!(fit.intercept, 19.75, epsilon = 1e-12);
    }

    #[test]
    fn single_point_yields_no_line() {
        let points = PointSet::from_points([(700, 400)]);
        assert!(LaneFitter::new(540)
            .fit_side(Side::Right, &points, &right_bounds())
            .is_none());
    }

    #[test]
    fn empty_set_yields_no_line() {
        assert!(LaneFitter::new(540)
            .fit_side(Side::Left, &PointSet::new(), &right_bounds())
            .is_none());
    }

    #[test]
    fn all_vertical_pairs_yield_no_line() {
        let points = PointSet::from_points([(700, 400), (700, 450), (701, 380), (701, 500)]);
        assert!(LaneFitter::new(540).fit(&points, &right_bounds()).is_none());
    }

    #[test]
    fn zero_slope_is_not_extrapolated() {
        let fit = FittedLine {
            slope: 0.0,
            intercept: 400.0,
            strategy: FitStrategy::AveragedPairFit,
        };
        assert!(LaneFitter::new(540).extrapolate(Side::Right, fit).is_none());
    }

    #[test]
    fn extrapolation_hits_base_and_horizon_rows() {
        let fit = FittedLine {
            slope: 0.6,
            intercept: -60.0,
            strategy: FitStrategy::LinearFit,
        };
        let line = LaneFitter::new(540).extrapolate(Side::Right, fit).unwrap();
        assert_eq!(line.base, [1000, 540]);
        assert_eq!(line.horizon, [700, 360]);
    }

    #[test]
    fn extrapolation_rounds_up() {
        let fit = FittedLine {
            slope: -0.7,
            intercept: 700.0,
            strategy: FitStrategy::LinearFit,
        };
        let line = LaneFitter::new(541).extrapolate(Side::Left, fit).unwrap();
        // (541 - 700) / -0.7 = 227.14..., (360 - 700) / -0.7 = 485.71...
        assert_eq!(line.base, [228, 541]);
        assert_eq!(line.horizon, [486, 360]);
    }

    #[test]
    fn horizon_row_floors() {
        assert_eq!(horizon_row(540), 360);
        assert_eq!(horizon_row(541), 360);
        assert_eq!(horizon_row(100), 66);
    }
}
