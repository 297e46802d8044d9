use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SarError;

/// An operator command addressed to one or more vessels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FleetCommand {
    /// Put vessels back under way (`is_waiting = false`).
    Start,
    /// Hold vessels in place (`is_waiting = true`).
    Stop,
}

impl FleetCommand {
    /// The waiting flag this command leaves the vessel with.
    pub fn waiting(self) -> bool {
        matches!(self, FleetCommand::Stop)
    }
}

impl fmt::Display for FleetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetCommand::Start => f.write_str("START"),
            FleetCommand::Stop => f.write_str("STOP"),
        }
    }
}

impl FromStr for FleetCommand {
    type Err = SarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "START" => Ok(FleetCommand::Start),
            "STOP" => Ok(FleetCommand::Stop),
            _ => Err(SarError::UnknownCommand(s.to_string())),
        }
    }
}
