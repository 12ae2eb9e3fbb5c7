//! Core data model shared by the scanner, sampler and decision stages.

use serde::{Deserialize, Serialize};

/// Integer pixel coordinate produced by a scan or used as a scan seed.
///
/// Points produced by a scan always lie inside the map that was scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPoint {
    /// X coordinate in pixels
    pub x: u32,
    /// Y coordinate in pixels
    pub y: u32,
}

impl ScanPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Left/right boundary estimate at one seed row.
///
/// The two lateral scans are independent; `left.x <= seed.x <= right.x` is
/// not guaranteed and callers must not rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundarySample {
    pub seed: ScanPoint,
    pub left: ScanPoint,
    pub right: ScanPoint,
}

/// Boundary samples ordered near-to-far, one per configured seed row.
///
/// Insertion order is semantically meaningful: the first entry is the depth
/// closest to the vehicle, the last the farthest, and the middle entry
/// (`len / 2`) plays the mid-depth role in the decision rules.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LaneBoundarySet {
    pub samples: Vec<BoundarySample>,
}

impl LaneBoundarySet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample closest to the vehicle.
    pub fn near(&self) -> Option<&BoundarySample> {
        self.samples.first()
    }

    /// Mid-depth sample. Coincides with `far` when fewer than three rows
    /// are configured.
    pub fn mid(&self) -> Option<&BoundarySample> {
        if self.samples.is_empty() {
            None
        } else {
            self.samples.get(self.samples.len() / 2)
        }
    }

    /// Farthest sample ahead of the vehicle.
    pub fn far(&self) -> Option<&BoundarySample> {
        self.samples.last()
    }
}

/// Stop-line flag carried across the detection stages.
///
/// Owned by the sequential driver and passed explicitly; detection never
/// clears an already-set flag within the same invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopLineState {
    pub active: bool,
}

/// Discrete steering output, one per processed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringCommand {
    /// Signed turn value from the configured vocabulary; `0` drives straight.
    pub turn: i32,
    /// Set only when the vehicle must change speed, e.g. `0.0` to halt.
    pub speed_override: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(y: u32) -> BoundarySample {
        let seed = ScanPoint::new(320, y);
        BoundarySample {
            seed,
            left: ScanPoint::new(0, y),
            right: ScanPoint::new(639, y),
        }
    }

    #[test]
    fn depth_roles_follow_insertion_order() {
        let set = LaneBoundarySet {
            samples: vec![sample_at(350), sample_at(325), sample_at(275)],
        };
        assert_eq!(set.near().unwrap().seed.y, 350);
        assert_eq!(set.mid().unwrap().seed.y, 325);
        assert_eq!(set.far().unwrap().seed.y, 275);
    }

    #[test]
    fn depth_roles_on_short_sets() {
        let empty = LaneBoundarySet::default();
        assert!(empty.near().is_none());
        assert!(empty.mid().is_none());
        assert!(empty.far().is_none());

        let two = LaneBoundarySet {
            samples: vec![sample_at(350), sample_at(275)],
        };
        assert_eq!(two.mid().unwrap().seed.y, 275);
        assert_eq!(two.far().unwrap().seed.y, 275);
    }
}
