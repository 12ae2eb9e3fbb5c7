//! JSON file configuration for the demo tool.
//!
//! The detector itself is configured with [`LaneParams`]; this module only
//! adds the file-facing envelope the `lane_demo` binary consumes: input
//! masks, the binarization threshold and optional trace output.

use crate::detector::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// Edge mask images, processed in order as consecutive frames.
    pub input: Vec<PathBuf>,
    /// Gray values above this count as edge pixels.
    #[serde(default = "default_mask_threshold")]
    pub mask_threshold: u8,
    /// Detector parameters; every field is optional in the file.
    #[serde(default)]
    pub detector: LaneParams,
    /// Directory for per-frame trace JSON, written only when
    /// `detector.debug` is set.
    #[serde(default)]
    pub trace_dir: Option<PathBuf>,
}

fn default_mask_threshold() -> u8 {
    127
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
