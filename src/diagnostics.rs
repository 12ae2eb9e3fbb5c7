//! Per-frame diagnostics for overlays and tooling.
//!
//! A [`FrameTrace`] records every scan the pipeline issued, the rule that
//! fired and a stage timing breakdown. Traces are built only when the debug
//! toggle is on and are handed to an [`OverlaySink`]; nothing in the
//! decision path reads them back, so enabling diagnostics can never change
//! behaviour.

use crate::decision::Rule;
use crate::error::DetectError;
use crate::map::EdgeMap;
use crate::scan::{scan, Axis, ScanBounds, ScanDirection};
use crate::stopline::{probe_seed, StopLineParams};
use crate::types::{LaneBoundarySet, ScanPoint};
use log::debug;
use serde::Serialize;

/// Dimensions of the edge map a trace was captured from.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// One boundary scan: seed, endpoint and whether the endpoint is an edge
/// pixel (`hit`) or a bound.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScanRecord {
    pub seed: ScanPoint,
    pub end: ScanPoint,
    pub axis: Axis,
    pub direction: ScanDirection,
    pub hit: bool,
}

/// Stage timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub sample_ms: f64,
    pub stop_line_ms: f64,
    pub decide_ms: f64,
    pub total_ms: f64,
}

/// Everything an overlay needs to draw one frame.
#[derive(Clone, Debug, Serialize)]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub scans: Vec<ScanRecord>,
    pub rule: Rule,
    pub timings: TimingBreakdown,
}

/// Re-derive the scan records for a processed frame.
///
/// Pure over the immutable map, so replaying the lateral walks as records
/// and re-issuing the stop probe yields exactly what the pipeline saw.
pub(crate) fn trace_frame(
    map: &EdgeMap,
    lanes: &LaneBoundarySet,
    stop_params: &StopLineParams,
    bounds: ScanBounds,
    rule: Rule,
    timings: TimingBreakdown,
) -> Result<FrameTrace, DetectError> {
    let mut scans = Vec::with_capacity(lanes.len() * 2 + 1);
    for sample in &lanes.samples {
        scans.push(ScanRecord {
            seed: sample.seed,
            end: sample.left,
            axis: Axis::Horizontal,
            direction: ScanDirection::Decreasing,
            hit: map.at(sample.left),
        });
        scans.push(ScanRecord {
            seed: sample.seed,
            end: sample.right,
            axis: Axis::Horizontal,
            direction: ScanDirection::Increasing,
            hit: map.at(sample.right),
        });
    }

    let seed = probe_seed(map, stop_params)?;
    let end = scan(map, seed, Axis::Vertical, ScanDirection::Decreasing, bounds)?;
    scans.push(ScanRecord {
        seed,
        end,
        axis: Axis::Vertical,
        direction: ScanDirection::Decreasing,
        hit: map.at(end),
    });

    Ok(FrameTrace {
        input: InputDescriptor {
            width: map.w,
            height: map.h,
        },
        scans,
        rule,
        timings,
    })
}

/// Collaborator that renders a frame trace somewhere visible.
///
/// Implementations must treat the trace as read-only output; the pipeline
/// never consumes anything a sink produces.
pub trait OverlaySink {
    fn render(&mut self, trace: &FrameTrace);
}

/// Sink that writes the trace to the log at debug level.
#[derive(Debug, Default)]
pub struct LogOverlay;

impl OverlaySink for LogOverlay {
    fn render(&mut self, trace: &FrameTrace) {
        debug!(
            "trace: {}x{} rule={:?} total={:.3}ms",
            trace.input.width, trace.input.height, trace.rule, trace.timings.total_ms
        );
        for record in &trace.scans {
            debug!(
                "  {:?} {:?} ({}, {}) -> ({}, {}) hit={}",
                record.axis,
                record.direction,
                record.seed.x,
                record.seed.y,
                record.end.x,
                record.end.y,
                record.hit
            );
        }
    }
}
