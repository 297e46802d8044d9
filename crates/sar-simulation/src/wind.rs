use sar_core::state::wrap_degrees;

use crate::config::SimConfig;
use crate::context::{SimContext, jitter};
use crate::system::System;

/// Random walk of the wind direction.
///
/// The wind only steers the drift of persons in distress; vessels ignore it.
#[derive(Debug)]
pub struct WindSystem {
    max_change: f64,
}

impl WindSystem {
    /// Create a wind system that changes direction by at most `max_change`
    /// degrees per tick.
    pub fn new(max_change: f64) -> Self {
        Self { max_change }
    }

    /// Create a wind system from the run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.wind_jitter)
    }
}

impl System for WindSystem {
    fn name(&self) -> &str {
        "wind"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        let delta = jitter(ctx.rng, self.max_change);
        ctx.state.theta = wrap_degrees(ctx.state.theta + delta);
    }
}
