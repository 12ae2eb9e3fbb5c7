#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod map;
pub mod types;

// Building blocks the detector is assembled from. Public for tooling and
// tests; expect more churn than in the surface above.
pub mod config;
pub mod decision;
pub mod io;
pub mod publish;
pub mod sampler;
pub mod scan;
pub mod stopline;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{FrameReport, LaneDetector, LaneParams};
pub use crate::error::DetectError;
pub use crate::types::{
    BoundarySample, LaneBoundarySet, ScanPoint, SteeringCommand, StopLineState,
};

// Decision stage surface, useful on its own for tuning.
pub use crate::decision::{decide, Decision, DecisionThresholds, Rule};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let mask = vec![0u8; w * h];
/// let map = EdgeMap::from_slice(w, h, &mask);
///
/// let mut detector = LaneDetector::new(LaneParams::default());
/// match detector.process(map) {
///     Ok(report) => println!("turn={} rule={:?}", report.command.turn, report.rule),
///     Err(err) => eprintln!("frame skipped: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::map::{EdgeMap, EdgeMapBuf};
    pub use crate::{FrameReport, LaneDetector, LaneParams, SteeringCommand};
}
