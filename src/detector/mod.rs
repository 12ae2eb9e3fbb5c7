//! Lane detector orchestrating the per-frame scan pipeline.
//!
//! Overview
//! - Samples the left/right lane boundaries at the configured seed rows
//!   (lateral boundary scans from the lane centre).
//! - Probes for a perpendicular stop line in the column ahead of the
//!   vehicle, gated by a straightness check against the lateral samples.
//! - Applies the ordered threshold rules to produce one steering command
//!   per frame.
//!
//! Modules
//! - [`params`] – configuration aggregate consumed by the detector.
//! - `pipeline` – the [`LaneDetector`] implementation.
//!
//! The detector is strictly single-threaded and synchronous: one call to
//! [`LaneDetector::process`] is one full pass, and the edge-map borrow ends
//! when the call returns. The only values carried between frames are the
//! previously emitted command and, when configured, the stop-line flag.

pub mod params;
mod pipeline;

pub use params::LaneParams;
pub use pipeline::{FrameReport, LaneDetector};
