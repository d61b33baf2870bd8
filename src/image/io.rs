//! File-level helpers around the engine.
//!
//! - `load_color_image`: decode a JPEG/PNG/etc. into an owned interleaved
//!   buffer, RGB or RGBA depending on whether the source has alpha.
//! - `save_ppm`: write a buffer as a binary pixel map.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ppm::write_ppm;
use super::PixelBuffer;
use crate::error::{EngineError, Result};
use image::DynamicImage;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Decode an image file. Grayscale sources are widened to RGB.
pub fn load_color_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    from_dynamic(img)
}

fn from_dynamic(img: DynamicImage) -> Result<PixelBuffer> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    if img.color().has_alpha() {
        PixelBuffer::new(width, height, 4, img.into_rgba8().into_raw())
    } else {
        PixelBuffer::new(width, height, 3, img.into_rgb8().into_raw())
    }
}

/// Write `buffer` as a `P6` pixel map to `path`, creating parent directories.
pub fn save_ppm(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, buffer).map_err(|e| EngineError::io(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| EngineError::Report(format!("{}: {e}", path.display())))?;
    fs::write(path, json).map_err(|e| EngineError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
        }
    }
    Ok(())
}
