use super::*;
use crate::image::{GrayImageU8, ImageViewMut};
use crate::stages::SegmentDetector;

fn draw_run(img: &mut GrayImageU8, from: (i32, i32), to: (i32, i32)) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs());
    for i in 0..=steps {
        let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
        let x = (from.0 as f64 + t * (to.0 - from.0) as f64).round() as usize;
        let y = (from.1 as f64 + t * (to.1 - from.1) as f64).round() as usize;
        img.set(x, y, 255);
    }
}

fn longest(segs: &[LineSegment]) -> LineSegment {
    *segs
        .iter()
        .max_by(|a, b| a.length().partial_cmp(&b.length()).unwrap())
        .unwrap()
}

#[test]
fn hough_finds_horizontal_run() {
    let mut img = GrayImageU8::new(64, 32);
    draw_run(&mut img, (5, 10), (54, 10));
    let segs = ProbabilisticHough::default().detect(&img);
    assert!(!segs.is_empty(), "expected a segment on a horizontal run");
    let best = longest(&segs);
    assert!(best.length() >= 30.0, "segment too short: {best:?}");
    assert!((best.y1 - best.y2).abs() <= 1, "not horizontal: {best:?}");
}

#[test]
fn hough_finds_diagonal_run() {
    let mut img = GrayImageU8::new(80, 80);
    draw_run(&mut img, (10, 70), (60, 40));
    let segs = ProbabilisticHough::default().detect(&img);
    assert!(!segs.is_empty());
    let best = longest(&segs);
    assert!(best.length() >= 30.0, "segment too short: {best:?}");
    let slope = best.slope().expect("diagonal segment has a slope");
    assert!((slope + 0.6).abs() < 0.15, "unexpected slope {slope}");
}

#[test]
fn hough_rejects_short_runs() {
    let mut img = GrayImageU8::new(64, 32);
    draw_run(&mut img, (5, 10), (15, 10));
    let segs = ProbabilisticHough::default().detect(&img);
    assert!(segs.is_empty(), "short run should be rejected, got {segs:?}");
}

#[test]
fn hough_on_empty_map_returns_nothing() {
    let img = GrayImageU8::new(32, 32);
    assert!(ProbabilisticHough::default().detect(&img).is_empty());
}

#[test]
fn hough_is_deterministic_for_fixed_seed() {
    let mut img = GrayImageU8::new(96, 64);
    draw_run(&mut img, (5, 60), (45, 20));
    draw_run(&mut img, (90, 60), (55, 25));
    let detector = ProbabilisticHough::new(HoughOptions::default());
    assert_eq!(detector.detect(&img), detector.detect(&img));
}

#[test]
fn segment_slope_guards_vertical() {
    assert_eq!(LineSegment::new(3, 0, 3, 10).slope(), None);
    assert_eq!(LineSegment::new(0, 0, 10, 5).slope(), Some(0.5));
}
