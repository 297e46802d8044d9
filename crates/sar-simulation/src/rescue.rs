use rand::Rng;
use sar_core::Phase;

use crate::config::SimConfig;
use crate::context::SimContext;
use crate::event::SimEventKind;
use crate::system::System;

/// Probabilistic pickup of persons during the rescuing phase.
///
/// At most one person is picked up per tick. The count and the tracked
/// positions shrink under the same draw but each under its own guard, so the
/// list can run out before the count does.
#[derive(Debug)]
pub struct RescueSystem {
    probability: f64,
}

impl RescueSystem {
    /// Create a rescue system with the given per-tick pickup probability.
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    /// Create a rescue system from the run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.rescue_probability)
    }
}

impl System for RescueSystem {
    fn name(&self) -> &str {
        "rescue"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        if ctx.state.phase != Phase::Rescuing || ctx.state.persons_in_distress.is_cleared() {
            return;
        }
        if ctx.rng.random::<f64>() >= self.probability {
            return;
        }

        let group = &mut ctx.state.persons_in_distress;
        group.remove_one();
        let remaining = group.count;
        ctx.emit(
            SimEventKind::PersonRescued { remaining },
            format!("person rescued, {remaining} left in the water"),
        );
    }
}
