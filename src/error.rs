//! Error type shared by the pipeline, configuration loading and image I/O.
//!
//! Lane-level conditions (no segments, degenerate fits, too few points,
//! undefined slopes) are not errors: they resolve to "no line on this side".
//! Only caller contract violations and I/O failures surface here.
use std::path::PathBuf;

pub type LaneResult<T> = Result<T, LaneError>;

#[derive(Debug, thiserror::Error)]
pub enum LaneError {
    /// Frame buffer length does not match `width * height * 3`.
    #[error("frame shape mismatch: {width}x{height}x3 needs {expected} bytes, got {actual}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid pipeline configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image codec error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
