//! Boundary scan primitive: an axis-aligned walk over the edge map.
//!
//! All lateral and vertical probes in the pipeline reduce to the same
//! operation: start at a seed pixel and advance one pixel at a time until an
//! edge pixel or a bound is reached. Horizontal walks are bounded only by
//! the map itself; vertical walks clamp to a forward window near the vehicle
//! so an upward probe never traverses the whole column.
//!
//! The walk is a pure function of `(map, seed, axis, direction, bounds)`:
//! no mutation, no state, deterministic result.

use crate::error::DetectError;
use crate::map::EdgeMap;
use crate::types::ScanPoint;
use serde::{Deserialize, Serialize};

/// Scan axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Coordinate direction along the scan axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScanDirection {
    Increasing,
    Decreasing,
}

/// Named scan bounds; part of the external configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanBounds {
    /// Number of rows above the bottom edge a vertical scan may cover.
    /// An upward walk stops at row `height - forward_window` regardless of
    /// map height, restricting the probe to the region plausibly in front
    /// of the vehicle.
    pub forward_window: usize,
}

impl Default for ScanBounds {
    fn default() -> Self {
        Self {
            forward_window: 100,
        }
    }
}

/// Walk the edge map from `seed` until an edge pixel or a bound is reached.
///
/// Returns the coordinate where the walk stopped. A seed already on an edge
/// terminates immediately (zero-length scan). Whether the endpoint is an
/// edge or a bound is recovered with a map lookup at the returned point.
///
/// Fails with [`DetectError::OutOfBounds`] when the seed lies outside the
/// map; the walk itself never reads out of range.
pub fn scan(
    map: &EdgeMap,
    seed: ScanPoint,
    axis: Axis,
    direction: ScanDirection,
    bounds: ScanBounds,
) -> Result<ScanPoint, DetectError> {
    let sx = seed.x as usize;
    let sy = seed.y as usize;
    if !map.contains(sx, sy) {
        return Err(DetectError::OutOfBounds {
            x: seed.x,
            y: seed.y,
            width: map.w,
            height: map.h,
        });
    }

    match (axis, direction) {
        (Axis::Horizontal, ScanDirection::Increasing) => {
            let mut x = sx;
            while x < map.w - 1 && !map.get(x, sy) {
                x += 1;
            }
            Ok(ScanPoint::new(x as u32, seed.y))
        }
        (Axis::Horizontal, ScanDirection::Decreasing) => {
            let mut x = sx;
            while x > 0 && !map.get(x, sy) {
                x -= 1;
            }
            Ok(ScanPoint::new(x as u32, seed.y))
        }
        (Axis::Vertical, ScanDirection::Increasing) => {
            let mut y = sy;
            while y < map.h - 1 && !map.get(sx, y) {
                y += 1;
            }
            Ok(ScanPoint::new(seed.x, y as u32))
        }
        (Axis::Vertical, ScanDirection::Decreasing) => {
            // Upward probe clamps to the forward window, not the full column.
            let floor = map.h.saturating_sub(bounds.forward_window);
            let mut y = sy;
            while y > floor && !map.get(sx, y) {
                y -= 1;
            }
            Ok(ScanPoint::new(seed.x, y as u32))
        }
    }
}
