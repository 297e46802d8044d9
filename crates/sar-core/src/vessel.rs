use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A rescue vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// Unique name within the fleet.
    pub name: String,
    /// Current position.
    pub position: Position,
    /// When set, the vessel is excluded from directed movement.
    #[serde(rename = "isWaiting")]
    pub is_waiting: bool,
}

impl Vessel {
    /// Create a vessel at the given position.
    pub fn new(name: impl Into<String>, position: Position, is_waiting: bool) -> Self {
        Self {
            name: name.into(),
            position,
            is_waiting,
        }
    }

    /// Flip the waiting flag. Returns the new value.
    pub fn toggle_waiting(&mut self) -> bool {
        self.is_waiting = !self.is_waiting;
        self.is_waiting
    }
}

/// The fixed five-vessel roster every run starts with.
pub fn initial_roster() -> Vec<Vessel> {
    vec![
        Vessel::new("RescueBoat_1", Position::planar(10.50, 20.30), false),
        Vessel::new("RescueBoat_2", Position::planar(15.20, 25.80), true),
        Vessel::new("RescueBoat_3", Position::planar(20.00, 22.00), false),
        Vessel::new("RescueBoat_4", Position::planar(25.50, 27.50), true),
        Vessel::new("RescueBoat_5", Position::planar(12.80, 30.20), false),
    ]
}
