//! Error taxonomy for the per-frame pipeline.
//!
//! Every failure is local to the frame that raised it: the driver logs the
//! error, keeps the previously published command in effect and continues
//! with the next frame.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DetectError {
    /// A scan seed lies outside the edge map.
    #[error("seed ({x}, {y}) outside {width}x{height} edge map")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: usize,
        height: usize,
    },

    /// The edge map is unusable for the configured seeds; the frame is
    /// skipped without producing a new command.
    #[error("invalid frame: {reason}")]
    InvalidFrame { reason: String },
}

impl DetectError {
    pub(crate) fn invalid_frame(reason: impl Into<String>) -> Self {
        Self::InvalidFrame {
            reason: reason.into(),
        }
    }
}
