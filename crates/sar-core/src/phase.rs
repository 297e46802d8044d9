use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SarError;

/// A stage of the rescue mission.
///
/// Phases follow a fixed cycle with no terminal state:
/// `Gathering → Searching → Approaching → Rescuing → Returning → Gathering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Vessels converge on the rally point.
    #[default]
    Gathering,
    /// Vessels keep sweeping toward the rally point.
    Searching,
    /// Vessels close in on the nearest person in distress.
    Approaching,
    /// Persons are picked up from the water.
    Rescuing,
    /// The fleet heads home; no directed movement.
    Returning,
}

impl Phase {
    /// All phases in cycle order.
    pub const CYCLE: [Phase; 5] = [
        Phase::Gathering,
        Phase::Searching,
        Phase::Approaching,
        Phase::Rescuing,
        Phase::Returning,
    ];

    /// The phase that follows this one, wrapping after `Returning`.
    pub fn next(self) -> Phase {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    /// Position of this phase within [`Phase::CYCLE`].
    pub fn index(self) -> usize {
        match self {
            Phase::Gathering => 0,
            Phase::Searching => 1,
            Phase::Approaching => 2,
            Phase::Rescuing => 3,
            Phase::Returning => 4,
        }
    }

    /// The phase in effect at `tick` for a schedule starting in `Gathering`
    /// at tick 0 and advancing every `ticks_per_phase` ticks.
    pub fn at_tick(tick: u64, ticks_per_phase: u64) -> Phase {
        let steps = tick / ticks_per_phase.max(1);
        Self::CYCLE[(steps % Self::CYCLE.len() as u64) as usize]
    }

    /// Whether vessels steer toward the rally point in this phase.
    pub fn is_rally(self) -> bool {
        matches!(self, Phase::Gathering | Phase::Searching)
    }

    /// The canonical name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Gathering => "Gathering",
            Phase::Searching => "Searching",
            Phase::Approaching => "Approaching",
            Phase::Rescuing => "Rescuing",
            Phase::Returning => "Returning",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = SarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SarError::Validation(format!("unknown phase \"{s}\"")))
    }
}
