use sar_core::Position;

use crate::error::{SimError, SimResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Ticks spent in each phase before moving to the next.
    pub ticks_per_phase: u64,
    /// Where vessels converge during gathering and searching.
    pub rally_point: Position,
    /// Distance per tick while steering to the rally point.
    pub transit_speed: f64,
    /// Distance to the rally point at which a vessel stops and waits.
    pub arrival_radius: f64,
    /// Distance per tick while closing in on a person in distress.
    pub approach_speed: f64,
    /// Distance to the nearest person at which a vessel holds position.
    pub standoff_radius: f64,
    /// Per-tick chance that a vessel flips its waiting flag.
    pub toggle_probability: f64,
    /// Maximum wind change per tick, in degrees either way.
    pub wind_jitter: f64,
    /// Wind direction at start and after a reset, in degrees.
    pub initial_theta: f64,
    /// Wind-driven displacement per tick.
    pub drift_rate: f64,
    /// Maximum random displacement per axis per tick.
    pub drift_jitter: f64,
    /// Per-tick chance of a pickup during the rescuing phase.
    pub rescue_probability: f64,
    /// Half-width of the square persons are scattered over on reset.
    pub reset_scatter: f64,
    /// Persons placed in the water on reset.
    pub reset_persons: u32,
    /// Most persons a single spawn call may add.
    pub max_spawn: usize,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks_per_phase: 50,
            rally_point: Position::planar(50.0, 100.0),
            transit_speed: 0.5,
            arrival_radius: 1.0,
            approach_speed: 0.8,
            standoff_radius: 2.0,
            toggle_probability: 0.02,
            wind_jitter: 2.0,
            initial_theta: sar_core::state::INITIAL_THETA,
            drift_rate: 0.05,
            drift_jitter: 0.02,
            rescue_probability: 0.05,
            reset_scatter: 5.0,
            reset_persons: 10,
            max_spawn: 10_000,
            max_events: 0,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many ticks each phase lasts.
    pub fn with_ticks_per_phase(mut self, ticks: u64) -> Self {
        self.ticks_per_phase = ticks;
        self
    }

    /// Set the vessel availability toggle probability.
    pub fn with_toggle_probability(mut self, p: f64) -> Self {
        self.toggle_probability = p;
        self
    }

    /// Set the per-tick rescue probability.
    pub fn with_rescue_probability(mut self, p: f64) -> Self {
        self.rescue_probability = p;
        self
    }

    /// Set the maximum wind change per tick.
    pub fn with_wind_jitter(mut self, degrees: f64) -> Self {
        self.wind_jitter = degrees;
        self
    }

    /// Set the wind direction used at start and on reset.
    pub fn with_initial_theta(mut self, degrees: f64) -> Self {
        self.initial_theta = degrees;
        self
    }

    /// Set the most persons a single spawn call may add.
    pub fn with_max_spawn(mut self, max: usize) -> Self {
        self.max_spawn = max;
        self
    }

    /// Set the random drift component per axis.
    pub fn with_drift_jitter(mut self, jitter: f64) -> Self {
        self.drift_jitter = jitter;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Check that every value is usable by the tick systems.
    pub fn validate(&self) -> SimResult<()> {
        if self.ticks_per_phase == 0 {
            return Err(SimError::InvalidConfig(
                "ticks_per_phase must be at least 1".into(),
            ));
        }
        for (name, p) in [
            ("toggle_probability", self.toggle_probability),
            ("rescue_probability", self.rescue_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        for (name, v) in [
            ("transit_speed", self.transit_speed),
            ("arrival_radius", self.arrival_radius),
            ("approach_speed", self.approach_speed),
            ("standoff_radius", self.standoff_radius),
            ("wind_jitter", self.wind_jitter),
            ("drift_rate", self.drift_rate),
            ("drift_jitter", self.drift_jitter),
            ("reset_scatter", self.reset_scatter),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {v}"
                )));
            }
        }
        if !self.initial_theta.is_finite() || !self.rally_point.is_finite() {
            return Err(SimError::InvalidConfig(
                "initial_theta and rally_point must be finite".into(),
            ));
        }
        Ok(())
    }
}
