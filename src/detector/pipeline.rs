//! Per-frame pipeline: sample → stop-line probe → decide.

use super::params::LaneParams;
use crate::decision::{decide, Rule};
use crate::diagnostics::{trace_frame, FrameTrace, TimingBreakdown};
use crate::error::DetectError;
use crate::map::EdgeMap;
use crate::sampler::sample;
use crate::stopline;
use crate::types::{LaneBoundarySet, SteeringCommand, StopLineState};
use log::{debug, warn};
use std::time::Instant;

/// Everything one processed frame produced.
#[derive(Clone, Debug)]
pub struct FrameReport {
    /// The command to hand to the publisher.
    pub command: SteeringCommand,
    /// Which decision rule fired.
    pub rule: Rule,
    /// Boundary samples, near-to-far.
    pub boundaries: LaneBoundarySet,
    /// Stop-line flag as seen by the decision stage.
    pub stop_line: StopLineState,
    /// Wall-clock cost of the pass in milliseconds.
    pub latency_ms: f64,
    /// Present only when the debug toggle is on.
    pub trace: Option<FrameTrace>,
}

/// Lane detector running one full pipeline pass per edge map.
///
/// Owns the configured parameters plus the two values that legitimately
/// cross frames: the previously emitted command (for the hold rule) and
/// the stop-line state (recomputed fresh unless persistence is configured).
pub struct LaneDetector {
    params: LaneParams,
    stop_line: StopLineState,
    last_command: SteeringCommand,
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self {
            params,
            stop_line: StopLineState::default(),
            last_command: SteeringCommand::default(),
        }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// The command emitted for the most recent successfully processed
    /// frame; remains in effect when a frame is skipped.
    pub fn last_command(&self) -> SteeringCommand {
        self.last_command
    }

    /// Drop all cross-frame state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.stop_line = StopLineState::default();
        self.last_command = SteeringCommand::default();
    }

    /// Run one full pass over an edge map and emit a steering command.
    ///
    /// On error the frame is skipped: no state changes, no new command, and
    /// the caller is expected to keep the previous command in effect and
    /// continue with the next frame.
    pub fn process(&mut self, map: EdgeMap) -> Result<FrameReport, DetectError> {
        let total_start = Instant::now();

        if map.w == 0 || map.h == 0 {
            warn!("skipping frame: empty edge map ({}x{})", map.w, map.h);
            return Err(DetectError::invalid_frame(format!(
                "empty edge map ({}x{})",
                map.w, map.h
            )));
        }

        let base_x = (map.w / 2) as u32;

        let sample_start = Instant::now();
        let boundaries = sample(&map, base_x, &self.params.seed_rows, self.params.scan)?;
        let sample_ms = sample_start.elapsed().as_secs_f64() * 1000.0;

        let stop_start = Instant::now();
        let stop_line = stopline::detect(
            &map,
            &boundaries,
            &self.params.stop_line,
            self.params.scan,
            self.stop_line,
        )?;
        let stop_line_ms = stop_start.elapsed().as_secs_f64() * 1000.0;

        let decide_start = Instant::now();
        let decision = decide(
            &boundaries,
            stop_line,
            &self.params.thresholds,
            &self.last_command,
        );
        let decide_ms = decide_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let trace = if self.params.debug {
            let timings = TimingBreakdown {
                sample_ms,
                stop_line_ms,
                decide_ms,
                total_ms,
            };
            Some(trace_frame(
                &map,
                &boundaries,
                &self.params.stop_line,
                self.params.scan,
                decision.rule,
                timings,
            )?)
        } else {
            None
        };

        self.stop_line = stop_line;
        self.last_command = decision.command;

        debug!(
            "frame: rule={:?} turn={} stop={} {:.3}ms",
            decision.rule, decision.command.turn, stop_line.active, total_ms
        );

        Ok(FrameReport {
            command: decision.command,
            rule: decision.rule,
            boundaries,
            stop_line,
            latency_ms: total_ms,
            trace,
        })
    }
}
