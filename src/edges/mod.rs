//! Edge map construction: luma, Gaussian smoothing and Canny.
//!
//! The default [`CannyEdgeMap`] chains
//!
//! - `grayscale`: integer BT.601 luma,
//! - `gaussian_blur`: separable `k × k` Gaussian with reflect-101 borders,
//! - `sobel_gradients`: 3×3 Sobel derivatives with L1 magnitude,
//! - `canny`: direction-aligned non-maximum suppression followed by
//!   double-threshold hysteresis.
//!
//! The output is a binary map (0 or 255) of the input size, which is what the
//! region mask and the Hough stage expect.
//!
//! Border handling: gradients clamp indices (replicate), NMS ignores the outer
//! 1-pixel frame.

pub mod blur;
pub mod canny;
pub mod grad;
pub mod gray;

pub use blur::{gaussian_blur, GaussianKernel};
pub use canny::{canny, CannyEdgeMap};
pub use grad::{sobel_gradients, Grad};
pub use gray::grayscale;
