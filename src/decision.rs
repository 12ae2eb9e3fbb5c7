//! Threshold-based steering decision.
//!
//! Pure mapping from the sampled boundary set and the stop-line flag to a
//! steering command. The rules are evaluated in order and the first match
//! wins; rule order is part of the contract (an encroaching right boundary
//! outranks an encroaching left one when both fire).

use crate::types::{LaneBoundarySet, SteeringCommand, StopLineState};
use serde::{Deserialize, Serialize};

/// Decision thresholds and the discrete turn vocabulary.
///
/// Comparison directions matter and are fixed: the near-side checks fire
/// when a boundary is *too close* to the lane centre, the far-side check
/// confirms the road continues straight ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Mid-depth right edge closer than this means the right boundary is
    /// encroaching (`right.x < right_near` fires).
    pub right_near: u32,
    /// Far-depth right edge beyond this confirms the encroachment is not a
    /// curve already opening up (`right.x > right_far` fires).
    pub right_far: u32,
    /// Near-depth left edge beyond this means the left boundary is
    /// encroaching (`left.x > left_near` fires).
    pub left_near: u32,
    /// Mid-depth counterpart of `left_near`.
    pub left_mid: u32,
    /// Far-depth counterpart of `left_near`.
    pub left_far: u32,
    /// Turn emitted when steering away from the right boundary (negative).
    pub right_boundary_turn: i32,
    /// Turn emitted when steering away from the left boundary (positive).
    pub left_boundary_turn: i32,
    /// Turn emitted together with the zero speed override when halting.
    pub stop_turn: i32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            right_near: 478,
            right_far: 300,
            left_near: 190,
            left_mid: 190,
            left_far: 200,
            right_boundary_turn: -10,
            left_boundary_turn: 14,
            stop_turn: 0,
        }
    }
}

/// Which decision rule produced the command. Diagnostic only; consumers of
/// the command must not branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rule {
    /// Stop line ahead: halt.
    Stop,
    /// Right boundary encroaching: steer away from it.
    RightBoundary,
    /// Left boundary encroaching: steer away from it.
    LeftBoundary,
    /// Nothing to correct: previous turn value retained.
    Hold,
}

/// A steering command together with the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decision {
    pub command: SteeringCommand,
    pub rule: Rule,
}

/// Map boundary positions and the stop-line flag to a steering command.
///
/// Ordered rules, first match wins:
/// 1. stop line active → `stop_turn` with a zero speed override;
/// 2. mid right edge inside `right_near` while the far right edge is past
///    `right_far` → `right_boundary_turn`;
/// 3. any left edge past its depth threshold → `left_boundary_turn`;
/// 4. otherwise hold: the previous command's turn, no speed override.
pub fn decide(
    lanes: &LaneBoundarySet,
    stop: StopLineState,
    thresholds: &DecisionThresholds,
    previous: &SteeringCommand,
) -> Decision {
    if stop.active {
        return Decision {
            command: SteeringCommand {
                turn: thresholds.stop_turn,
                speed_override: Some(0.0),
            },
            rule: Rule::Stop,
        };
    }

    if let (Some(mid), Some(far)) = (lanes.mid(), lanes.far()) {
        if mid.right.x < thresholds.right_near && far.right.x > thresholds.right_far {
            return Decision {
                command: SteeringCommand {
                    turn: thresholds.right_boundary_turn,
                    speed_override: None,
                },
                rule: Rule::RightBoundary,
            };
        }
    }

    let left_encroaching = |edge: Option<&crate::types::BoundarySample>, limit: u32| {
        edge.map(|s| s.left.x > limit).unwrap_or(false)
    };
    if left_encroaching(lanes.near(), thresholds.left_near)
        || left_encroaching(lanes.mid(), thresholds.left_mid)
        || left_encroaching(lanes.far(), thresholds.left_far)
    {
        return Decision {
            command: SteeringCommand {
                turn: thresholds.left_boundary_turn,
                speed_override: None,
            },
            rule: Rule::LeftBoundary,
        };
    }

    Decision {
        command: SteeringCommand {
            turn: previous.turn,
            speed_override: None,
        },
        rule: Rule::Hold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundarySample, ScanPoint};

    fn set_with_edges(edges: &[(u32, u32, u32)]) -> LaneBoundarySet {
        // (row, left_x, right_x), near-to-far
        LaneBoundarySet {
            samples: edges
                .iter()
                .map(|&(y, lx, rx)| BoundarySample {
                    seed: ScanPoint::new(320, y),
                    left: ScanPoint::new(lx, y),
                    right: ScanPoint::new(rx, y),
                })
                .collect(),
        }
    }

    fn centred_lanes() -> LaneBoundarySet {
        set_with_edges(&[(350, 100, 540), (325, 100, 540), (275, 100, 540)])
    }

    #[test]
    fn stop_line_outranks_everything() {
        // Lane set that would otherwise trigger the right-boundary rule.
        let lanes = set_with_edges(&[(350, 0, 450), (325, 0, 450), (275, 0, 450)]);
        let decision = decide(
            &lanes,
            StopLineState { active: true },
            &DecisionThresholds::default(),
            &SteeringCommand::default(),
        );
        assert_eq!(decision.rule, Rule::Stop);
        assert_eq!(decision.command.turn, 0);
        assert_eq!(decision.command.speed_override, Some(0.0));
    }

    #[test]
    fn encroaching_right_boundary_steers_negative() {
        let lanes = set_with_edges(&[(350, 0, 450), (325, 0, 450), (275, 0, 450)]);
        let decision = decide(
            &lanes,
            StopLineState::default(),
            &DecisionThresholds::default(),
            &SteeringCommand::default(),
        );
        assert_eq!(decision.rule, Rule::RightBoundary);
        assert_eq!(decision.command.turn, -10);
        assert_eq!(decision.command.speed_override, None);
    }

    #[test]
    fn right_rule_outranks_left_rule_when_both_fire() {
        // Left edges past their limits AND right edges inside the near band.
        let lanes = set_with_edges(&[(350, 250, 450), (325, 250, 450), (275, 250, 450)]);
        let decision = decide(
            &lanes,
            StopLineState::default(),
            &DecisionThresholds::default(),
            &SteeringCommand::default(),
        );
        assert_eq!(decision.rule, Rule::RightBoundary);
    }

    #[test]
    fn any_encroaching_left_depth_steers_positive() {
        let thresholds = DecisionThresholds::default();
        for depth in 0..3 {
            let mut edges = [(350u32, 100u32, 600u32), (325, 100, 600), (275, 100, 600)];
            edges[depth].1 = 220; // past every left limit
            let decision = decide(
                &set_with_edges(&edges),
                StopLineState::default(),
                &thresholds,
                &SteeringCommand::default(),
            );
            assert_eq!(decision.rule, Rule::LeftBoundary, "depth {depth}");
            assert_eq!(decision.command.turn, 14);
        }
    }

    #[test]
    fn hold_retains_previous_turn_and_drops_speed_override() {
        let previous = SteeringCommand {
            turn: -10,
            speed_override: Some(0.0),
        };
        let decision = decide(
            &centred_lanes(),
            StopLineState::default(),
            &DecisionThresholds::default(),
            &previous,
        );
        assert_eq!(decision.rule, Rule::Hold);
        assert_eq!(decision.command.turn, -10);
        assert_eq!(decision.command.speed_override, None);
    }

    #[test]
    fn far_right_check_gates_the_right_rule() {
        // Right boundary close at mid depth, but the far depth shows the
        // curve opening up: the right rule must not fire.
        let lanes = set_with_edges(&[(350, 100, 450), (325, 100, 450), (275, 100, 250)]);
        let decision = decide(
            &lanes,
            StopLineState::default(),
            &DecisionThresholds::default(),
            &SteeringCommand::default(),
        );
        assert_eq!(decision.rule, Rule::Hold);
    }
}
