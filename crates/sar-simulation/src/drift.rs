use crate::config::SimConfig;
use crate::context::{SimContext, jitter};
use crate::system::System;

/// Wind-driven drift of the persons in the water.
///
/// Every remaining position moves `rate` units downwind plus an independent
/// random offset per axis, in every phase.
#[derive(Debug)]
pub struct DriftSystem {
    rate: f64,
    jitter: f64,
}

impl DriftSystem {
    /// Create a drift system with the given downwind rate and per-axis jitter.
    pub fn new(rate: f64, jitter: f64) -> Self {
        Self { rate, jitter }
    }

    /// Create a drift system from the run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.drift_rate, config.drift_jitter)
    }
}

impl System for DriftSystem {
    fn name(&self) -> &str {
        "drift"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        let heading = ctx.state.theta.to_radians();
        let wind_x = heading.cos() * self.rate;
        let wind_z = heading.sin() * self.rate;

        for person in ctx.state.persons_in_distress.positions.iter_mut() {
            person.x += wind_x + jitter(ctx.rng, self.jitter);
            person.z += wind_z + jitter(ctx.rng, self.jitter);
        }
    }
}
