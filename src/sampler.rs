//! Multi-row lane boundary sampling.
//!
//! The lane edges are approximated by running the boundary scan at a small
//! set of configured rows ahead of the vehicle, all seeded at the same `x`.
//! The seed column always sits at the lane centre: the heuristic assumes
//! the vehicle is laterally near the centre at the start of each frame,
//! independent of where it actually is. Adding a sampling depth is a
//! configuration change, not new code.

use crate::error::DetectError;
use crate::map::EdgeMap;
use crate::scan::{scan, Axis, ScanBounds, ScanDirection};
use crate::types::{BoundarySample, LaneBoundarySet, ScanPoint};
use log::debug;
use serde::{Deserialize, Serialize};

/// Rows at which lateral scans are performed, relative to a base row near
/// the vehicle. Ordered near-to-far; the order is preserved in the
/// resulting [`LaneBoundarySet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedRows {
    /// Base scan row near the vehicle.
    pub base_row: u32,
    /// Signed offsets added to `base_row`, one lateral scan pair each.
    /// Negative offsets sample farther ahead (smaller `y`).
    pub offsets: Vec<i32>,
}

impl Default for SeedRows {
    fn default() -> Self {
        Self {
            base_row: 350,
            offsets: vec![0, -25, -75],
        }
    }
}

impl SeedRows {
    /// Resolve the configured offsets into absolute seed points at `base_x`,
    /// rejecting any row that falls outside the map.
    fn resolve(&self, map: &EdgeMap, base_x: u32) -> Result<Vec<ScanPoint>, DetectError> {
        if self.offsets.is_empty() {
            return Err(DetectError::invalid_frame("no seed rows configured"));
        }
        if base_x as usize >= map.w {
            return Err(DetectError::invalid_frame(format!(
                "seed column {} outside map width {}",
                base_x, map.w
            )));
        }
        let mut seeds = Vec::with_capacity(self.offsets.len());
        for &offset in &self.offsets {
            let y = i64::from(self.base_row) + i64::from(offset);
            if y < 0 || y >= map.h as i64 {
                return Err(DetectError::invalid_frame(format!(
                    "seed row {} (base {} offset {}) outside map height {}",
                    y, self.base_row, offset, map.h
                )));
            }
            seeds.push(ScanPoint::new(base_x, y as u32));
        }
        Ok(seeds)
    }
}

/// Sample the left/right lane boundaries at every configured seed row.
///
/// Each row issues two independent horizontal walks from the same seed:
/// decreasing for the left edge, increasing for the right edge. The result
/// preserves the configured near-to-far order. Idempotent on an immutable
/// map.
pub fn sample(
    map: &EdgeMap,
    base_x: u32,
    rows: &SeedRows,
    bounds: ScanBounds,
) -> Result<LaneBoundarySet, DetectError> {
    if map.w == 0 || map.h == 0 {
        return Err(DetectError::invalid_frame(format!(
            "empty edge map ({}x{})",
            map.w, map.h
        )));
    }

    let seeds = rows.resolve(map, base_x)?;
    let mut samples = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let left = scan(map, seed, Axis::Horizontal, ScanDirection::Decreasing, bounds)?;
        let right = scan(map, seed, Axis::Horizontal, ScanDirection::Increasing, bounds)?;
        samples.push(BoundarySample { seed, left, right });
    }

    debug!(
        "sampler: {} rows from column {}, near row {}",
        samples.len(),
        base_x,
        rows.base_row
    );
    Ok(LaneBoundarySet { samples })
}
