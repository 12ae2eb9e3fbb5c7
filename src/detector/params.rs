//! Parameter aggregate configuring the detector stages.
//!
//! Defaults reproduce the reference tuning for 640x480 frames: seed rows at
//! 350/325/275, a 100-row forward window for the stop-line probe and the
//! threshold table from the decision stage. Everything is serde-enabled so
//! tools can load the whole aggregate from a config file.

use crate::decision::DecisionThresholds;
use crate::sampler::SeedRows;
use crate::scan::ScanBounds;
use crate::stopline::StopLineParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Rows sampled for lane boundaries, near-to-far.
    pub seed_rows: SeedRows,
    /// Bounds applied to vertical scans.
    pub scan: ScanBounds,
    /// Stop-line probe placement and persistence.
    pub stop_line: StopLineParams,
    /// Decision thresholds and the turn vocabulary.
    pub thresholds: DecisionThresholds,
    /// Capture a [`crate::diagnostics::FrameTrace`] per frame. Overlay
    /// output only; decisions are identical with the toggle on or off.
    pub debug: bool,
}
