//! Publisher seam towards the vehicle bus.
//!
//! The bus protocol is owned by an external component; the core only hands
//! each frame's command to a [`CommandPublisher`]. The JSON-line
//! implementation here backs the demo binary and doubles as a reference
//! for real bindings.

use crate::types::SteeringCommand;
use std::io::Write;

/// Downstream consumer of per-frame steering commands.
pub trait CommandPublisher {
    fn publish(&mut self, command: &SteeringCommand) -> Result<(), String>;
}

/// Publisher writing one JSON object per line.
pub struct JsonLinePublisher<W: Write> {
    out: W,
}

impl<W: Write> JsonLinePublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CommandPublisher for JsonLinePublisher<W> {
    fn publish(&mut self, command: &SteeringCommand) -> Result<(), String> {
        let line = serde_json::to_string(command)
            .map_err(|e| format!("Failed to serialize command: {e}"))?;
        writeln!(self.out, "{line}").map_err(|e| format!("Failed to write command: {e}"))
    }
}
