//! Stop-line / intersection detection.
//!
//! A perpendicular stop line shows up as an edge somewhere in the column
//! directly ahead of the vehicle. A vertical probe alone is not enough:
//! while turning, the forward column crosses lane markings all the time.
//! The probe therefore only counts when the lateral samples agree the road
//! is straight, evidenced by at least two depths reporting the same
//! right-edge column.

use crate::error::DetectError;
use crate::map::EdgeMap;
use crate::scan::{scan, Axis, ScanBounds, ScanDirection};
use crate::types::{LaneBoundarySet, ScanPoint, StopLineState};
use log::debug;
use serde::{Deserialize, Serialize};

/// Stop-line probe configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopLineParams {
    /// Rows between the bottom edge of the map and the probe seed.
    pub seed_offset_from_bottom: u32,
    /// Keep the flag raised once set, instead of recomputing it fresh each
    /// frame. Off by default: a stop line should clear when it leaves the
    /// probe window.
    pub hold_across_frames: bool,
}

impl Default for StopLineParams {
    fn default() -> Self {
        Self {
            seed_offset_from_bottom: 30,
            hold_across_frames: false,
        }
    }
}

/// Probe seed below the image centre: centre column, configured offset
/// above the bottom edge.
pub(crate) fn probe_seed(map: &EdgeMap, params: &StopLineParams) -> Result<ScanPoint, DetectError> {
    if map.w == 0 || map.h == 0 {
        return Err(DetectError::invalid_frame(format!(
            "empty edge map ({}x{})",
            map.w, map.h
        )));
    }
    let y = map.h as i64 - 1 - i64::from(params.seed_offset_from_bottom);
    if y < 0 {
        return Err(DetectError::invalid_frame(format!(
            "stop-line seed offset {} below map height {}",
            params.seed_offset_from_bottom, map.h
        )));
    }
    Ok(ScanPoint::new((map.w / 2) as u32, y as u32))
}

/// Decide whether a stop line lies ahead.
///
/// Scans upward from the probe seed within the forward window. The flag is
/// raised when the walk ends on an edge pixel AND the lane set shows the
/// vehicle driving straight; reaching the bound or failing the straightness
/// check yields `active = false`. With `hold_across_frames` the fresh result
/// is OR-ed with `previous`, so the detector itself never lowers a raised
/// flag.
pub fn detect(
    map: &EdgeMap,
    lanes: &LaneBoundarySet,
    params: &StopLineParams,
    bounds: ScanBounds,
    previous: StopLineState,
) -> Result<StopLineState, DetectError> {
    let seed = probe_seed(map, params)?;
    let end = scan(map, seed, Axis::Vertical, ScanDirection::Decreasing, bounds)?;
    let hit = map.at(end);
    let straight = driving_straight(lanes);

    let fresh = hit && straight;
    let active = fresh || (params.hold_across_frames && previous.active);
    if active {
        debug!(
            "stop line at ({}, {}): hit={hit} straight={straight} held={}",
            end.x,
            end.y,
            active && !fresh
        );
    }
    Ok(StopLineState { active })
}

/// Straightness check: two depths agreeing on the right-edge column implies
/// the road is not curving under the vehicle.
fn driving_straight(lanes: &LaneBoundarySet) -> bool {
    let samples = &lanes.samples;
    for i in 0..samples.len() {
        for j in i + 1..samples.len() {
            if samples[i].right.x == samples[j].right.x {
                return true;
            }
        }
    }
    false
}
