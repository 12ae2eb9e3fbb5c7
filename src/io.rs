//! I/O helpers for edge masks and JSON.
//!
//! - `load_edge_mask`: read a PNG/JPEG/etc. and binarize it into an owned
//!   [`EdgeMapBuf`].
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Only the demo tooling touches the filesystem; the pipeline itself never
//! does.

use crate::map::EdgeMapBuf;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit grayscale and binarize:
/// gray values strictly above `threshold` become edge pixels.
pub fn load_edge_mask(path: &Path, threshold: u8) -> Result<EdgeMapBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| u8::from(v > threshold))
        .collect();
    Ok(EdgeMapBuf::from_raw(width, height, data))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
