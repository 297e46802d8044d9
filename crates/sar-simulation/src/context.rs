use rand::Rng;
use rand::rngs::StdRng;
use sar_core::WorldState;

use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context passed to each system during a tick.
pub struct SimContext<'a> {
    /// The world state being advanced.
    pub state: &'a mut WorldState,
    /// The run's event log.
    pub events: &'a mut EventLog,
    /// The run's random source. Systems draw from it in a fixed order.
    pub rng: &'a mut StdRng,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.state.tick, kind, description));
    }

    /// The tick being processed.
    pub fn tick(&self) -> u64 {
        self.state.tick
    }
}

/// Draw uniformly from `[-amount, amount]`. A zero amount draws nothing.
pub fn jitter(rng: &mut StdRng, amount: f64) -> f64 {
    if amount > 0.0 {
        rng.random_range(-amount..=amount)
    } else {
        0.0
    }
}
