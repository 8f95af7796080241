//! Capability traits for the image-processing primitives around the lane core.
//!
//! Each stage has a fixed buffer-in / buffer-out contract. The detector holds
//! boxed implementations, so any stage can be swapped (for a GPU or an
//! OpenCV-backed primitive, or a stub in tests) without touching the
//! classifier or fitter.
use crate::image::{GrayImageU8, RgbFrame, RgbImageU8};
use crate::region::RegionPolygon;
use crate::segments::LineSegment;

/// Keeps lane-coloured pixels and blacks out the rest. Output has the frame's size.
pub trait ColorGate: Send + Sync {
    fn apply(&self, frame: &RgbFrame<'_>) -> RgbImageU8;
}

/// Produces a binary (0/255) edge map of the same size as the input.
pub trait EdgeMap: Send + Sync {
    fn edges(&self, image: &RgbImageU8) -> GrayImageU8;
}

/// Zeroes every pixel of `edges` outside `polygon`.
pub trait RegionMask: Send + Sync {
    fn mask(&self, edges: &GrayImageU8, polygon: &RegionPolygon) -> GrayImageU8;
}

/// Extracts straight pixel runs from a binary edge map. May return nothing.
pub trait SegmentDetector: Send + Sync {
    fn detect(&self, edges: &GrayImageU8) -> Vec<LineSegment>;
}

/// Blends the rendered lane canvas over the original frame.
pub trait Compositor: Send + Sync {
    fn blend(&self, canvas: &RgbImageU8, frame: &RgbFrame<'_>) -> RgbImageU8;
}
