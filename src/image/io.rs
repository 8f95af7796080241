//! I/O helpers for RGB frames and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `save_rgb_image`: write an owned RGB buffer, format from the extension.
//! - `write_json_file` / `read_json_file`: pretty JSON on disk.
use super::RgbImageU8;
use crate::error::{LaneError, LaneResult};
use image::RgbImage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> LaneResult<RgbImageU8> {
    let img = image::open(path)
        .map_err(|source| LaneError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    RgbImageU8::from_raw(w, h, img.into_raw())
}

/// Save an RGB buffer; the encoder is chosen from the file extension.
pub fn save_rgb_image(buffer: &RgbImageU8, path: &Path) -> LaneResult<()> {
    ensure_parent_dir(path)?;
    let img = RgbImage::from_raw(buffer.w as u32, buffer.h as u32, buffer.data.clone())
        .ok_or_else(|| LaneError::InvalidConfig("RGB buffer does not match its size".into()))?;
    img.save(path).map_err(|source| LaneError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> LaneResult<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| LaneError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| LaneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> LaneResult<T> {
    let data = fs::read_to_string(path).map_err(|source| LaneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LaneError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> LaneResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LaneError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
