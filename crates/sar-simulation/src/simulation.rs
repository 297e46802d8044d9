use std::f64::consts::TAU;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sar_core::{DistressGroup, FleetCommand, Position, SarError, WorldState, WorldStats};

use crate::config::SimConfig;
use crate::context::{SimContext, jitter};
use crate::drift::DriftSystem;
use crate::error::SimResult;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::navigation::NavigationSystem;
use crate::rescue::RescueSystem;
use crate::system::System;
use crate::wind::WindSystem;

/// The top-level simulation orchestrator.
///
/// Owns the world state, RNG, event log, and registered systems.
/// Drives the phase schedule and the per-tick system order.
pub struct Simulation {
    state: WorldState,
    config: SimConfig,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.state.tick)
            .field("phase", &self.state.phase)
            .field("systems", &self.systems.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a simulation seeded from `config.seed`.
    ///
    /// The fleet and the first distress cluster always start from their
    /// fixed layout. The wind starts at `config.initial_theta`, as it does
    /// after every reset.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a simulation driven by the given random source.
    pub fn with_rng(config: SimConfig, rng: StdRng) -> SimResult<Self> {
        config.validate()?;
        let systems = Self::default_systems(&config);
        let mut state = WorldState::initial();
        state.theta = config.initial_theta;
        Ok(Self {
            state,
            events: EventLog::new(config.max_events),
            config,
            rng,
            systems,
        })
    }

    /// Replace the starting state. Ticks continue from `state.tick`.
    pub fn with_state(mut self, state: WorldState) -> Self {
        self.state = state;
        self
    }

    /// The built-in systems in tick order: wind, navigation, drift, rescue.
    fn default_systems(config: &SimConfig) -> Vec<Box<dyn System>> {
        vec![
            Box::new(WindSystem::from_config(config)),
            Box::new(NavigationSystem::from_config(config)),
            Box::new(DriftSystem::from_config(config)),
            Box::new(RescueSystem::from_config(config)),
        ]
    }

    /// Register an extra system. It runs after the built-in ones.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Advance the simulation by one tick and return the new state.
    pub fn advance(&mut self) -> &WorldState {
        self.state.tick += 1;
        self.advance_phase();

        for system in &mut self.systems {
            let mut ctx = SimContext {
                state: &mut self.state,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            system.tick(&mut ctx);
        }

        self.state.timestamp = Some(Utc::now());
        &self.state
    }

    /// Advance the simulation by `n` ticks.
    pub fn run(&mut self, n: u64) -> &WorldState {
        for _ in 0..n {
            self.advance();
        }
        &self.state
    }

    fn advance_phase(&mut self) {
        if self.state.tick % self.config.ticks_per_phase != 0 {
            return;
        }
        let from = self.state.phase;
        let to = from.next();
        self.state.phase = to;
        self.log(
            SimEventKind::PhaseChanged { from, to },
            format!("phase {from} -> {to}"),
        );
    }

    /// Restore the fixed fleet and scatter a fresh distress group around the
    /// rally point. The RNG stream continues; it is not reseeded.
    pub fn reset(&mut self) -> &WorldState {
        let center = self.config.rally_point;
        let scatter = self.config.reset_scatter;
        let positions = (0..self.config.reset_persons)
            .map(|_| {
                let x = center.x + jitter(&mut self.rng, scatter);
                let z = center.z + jitter(&mut self.rng, scatter);
                Position::planar(x, z)
            })
            .collect();

        let mut state = WorldState::with_distress(DistressGroup::from_positions(positions));
        state.theta = self.config.initial_theta;
        self.state = state;

        self.events.clear();
        self.log(SimEventKind::Reset, "simulation reset");
        &self.state
    }

    /// Start or stop the named vessels, or the whole fleet when `names` is
    /// empty. Nothing changes if any name is unknown.
    pub fn command(&mut self, command: FleetCommand, names: &[String]) -> SimResult<usize> {
        let affected = self.state.set_waiting(names, command.waiting())?;
        let vessels: Vec<String> = if names.is_empty() {
            self.state.ships.iter().map(|v| v.name.clone()).collect()
        } else {
            names.to_vec()
        };
        self.log(
            SimEventKind::FleetCommanded { command, vessels },
            format!("{command} issued to {affected} vessel(s)"),
        );
        Ok(affected)
    }

    /// Put `count` more persons in the water, spread uniformly over the disc
    /// of `radius` around `center`. Returns the new distress count.
    ///
    /// `count` is capped at `config.max_spawn` per call.
    pub fn spawn_persons(&mut self, count: usize, radius: f64, center: Position) -> SimResult<u32> {
        if count == 0 {
            return Err(SarError::Validation("count must be at least 1".into()).into());
        }
        if count > self.config.max_spawn {
            return Err(SarError::Validation(format!(
                "count must be at most {}, got {count}",
                self.config.max_spawn
            ))
            .into());
        }
        let current = self.state.persons_in_distress.count;
        let fits = u32::try_from(count)
            .ok()
            .and_then(|n| current.checked_add(n))
            .is_some();
        if !fits {
            return Err(SarError::Validation(format!(
                "cannot add {count} person(s) to {current} already in distress"
            ))
            .into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SarError::Validation(format!(
                "radius must be a non-negative number, got {radius}"
            ))
            .into());
        }
        if !center.is_finite() {
            return Err(SarError::Validation("center must be finite".into()).into());
        }

        let positions: Vec<Position> = (0..count)
            .map(|_| {
                let r = radius * self.rng.random::<f64>().sqrt();
                let angle = self.rng.random_range(0.0..TAU);
                Position::new(center.x + r * angle.cos(), center.y, center.z + r * angle.sin())
            })
            .collect();
        let added = self.state.persons_in_distress.extend(positions);
        self.log(
            SimEventKind::PersonsSpawned { added },
            format!("{added} person(s) spawned around {center}"),
        );
        Ok(self.state.persons_in_distress.count)
    }

    fn log(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.state.tick, kind, description));
    }

    /// The current world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Derived counters for the current state. Does not advance.
    pub fn stats(&self) -> WorldStats {
        self.state.stats()
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The event log of the current run.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Names of the registered systems in tick order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Ticks advanced since start or the last reset.
    pub fn current_tick(&self) -> u64 {
        self.state.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sar_core::{Phase, Vessel};

    fn sim() -> Simulation {
        Simulation::new(SimConfig::default()).unwrap()
    }

    fn rescuing_sim(config: SimConfig, group: DistressGroup) -> Simulation {
        let mut state = WorldState::with_distress(group);
        state.phase = Phase::Rescuing;
        Simulation::new(config.with_ticks_per_phase(10_000))
            .unwrap()
            .with_state(state)
    }

    #[test]
    fn systems_run_in_fixed_order() {
        assert_eq!(
            sim().system_names(),
            vec!["wind", "navigation", "drift", "rescue"]
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Simulation::new(SimConfig::default().with_ticks_per_phase(0)).unwrap_err();
        assert!(matches!(err, crate::SimError::InvalidConfig(_)));
    }

    #[test]
    fn advance_increments_and_stamps() {
        let mut sim = sim();
        assert!(sim.state().timestamp.is_none());
        let state = sim.advance();
        assert_eq!(state.tick, 1);
        assert!(state.timestamp.is_some());
        assert_eq!(sim.run(9).tick, 10);
    }

    #[test]
    fn gathering_until_tick_fifty() {
        let mut sim = sim();
        for _ in 1..50 {
            assert_eq!(sim.advance().phase, Phase::Gathering);
        }
        assert_eq!(sim.advance().phase, Phase::Searching);
        assert_eq!(sim.current_tick(), 50);
    }

    #[test]
    fn full_cycle_wraps_to_gathering() {
        let mut sim = sim();
        let mut seen = Vec::new();
        for _ in 0..250 {
            let phase = sim.advance().phase;
            if seen.last() != Some(&phase) {
                seen.push(phase);
            }
        }
        assert_eq!(
            seen,
            vec![
                Phase::Gathering,
                Phase::Searching,
                Phase::Approaching,
                Phase::Rescuing,
                Phase::Returning,
                Phase::Gathering,
            ]
        );
        let changes = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::PhaseChanged { .. }))
            .map(|e| e.tick)
            .collect::<Vec<_>>();
        assert_eq!(changes, vec![50, 100, 150, 200, 250]);
    }

    #[test]
    fn first_tick_moves_lead_boat_toward_rally_point() {
        let mut sim = sim();
        let state = sim.advance();
        let boat = state.vessel("RescueBoat_1").unwrap();
        let (dx, dz) = (50.0 - 10.5, 100.0 - 20.3);
        let dist = f64::hypot(dx, dz);
        assert!((boat.position.x - (10.5 + 0.5 * dx / dist)).abs() < 1e-9);
        assert!((boat.position.z - (20.3 + 0.5 * dz / dist)).abs() < 1e-9);
        assert_eq!(boat.position.y, 0.0);
    }

    #[test]
    fn arrived_vessel_stays_parked() {
        let mut state = WorldState::initial();
        state.ships = vec![Vessel::new("Solo", Position::planar(50.4, 100.3), false)];
        let mut sim = Simulation::new(SimConfig::default().with_toggle_probability(0.0))
            .unwrap()
            .with_state(state);

        sim.advance();
        assert!(sim.state().ships[0].is_waiting);
        sim.run(30);
        assert_eq!(sim.state().ships[0].position, Position::planar(50.4, 100.3));
    }

    #[test]
    fn vessels_converge_during_gathering() {
        let mut sim = Simulation::new(SimConfig::default().with_toggle_probability(0.0)).unwrap();
        sim.run(49);
        let rally = Position::planar(50.0, 100.0);
        let boat = sim.state().vessel("RescueBoat_1").unwrap();
        let start = Position::planar(10.5, 20.3);
        let travelled = start.planar_distance(&rally) - boat.position.planar_distance(&rally);
        assert!((travelled - 49.0 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn count_zero_entering_rescuing_is_stable() {
        let mut state = WorldState::with_distress(DistressGroup::default());
        state.tick = 199;
        state.phase = Phase::Approaching;
        let mut sim = Simulation::new(SimConfig::default().with_rescue_probability(1.0))
            .unwrap()
            .with_state(state);

        assert_eq!(sim.advance().phase, Phase::Rescuing);
        sim.run(20);
        assert_eq!(sim.state().persons_in_distress.count, 0);
    }

    #[test]
    fn reset_restores_fleet_and_scatters_persons() {
        let mut sim = sim();
        sim.run(180);
        sim.reset();

        let state = sim.state();
        assert_eq!(state.tick, 0);
        assert_eq!(state.phase, Phase::Gathering);
        assert_eq!(state.theta, 90.0);
        assert!(state.timestamp.is_none());
        assert_eq!(state.ships, sar_core::vessel::initial_roster());
        assert_eq!(state.persons_in_distress.count, 10);
        assert_eq!(state.persons_in_distress.positions.len(), 10);
        for p in &state.persons_in_distress.positions {
            assert!((p.x - 50.0).abs() <= 5.0);
            assert!((p.z - 100.0).abs() <= 5.0);
            assert_eq!(p.y, 0.0);
        }
        assert_eq!(sim.events().len(), 1);
        assert_eq!(sim.events().events()[0].kind, SimEventKind::Reset);
    }

    #[test]
    fn start_and_reset_share_initial_theta() {
        let config = SimConfig::default()
            .with_initial_theta(45.0)
            .with_wind_jitter(0.0);
        let mut sim = Simulation::new(config).unwrap();
        assert_eq!(sim.state().theta, 45.0);
        assert_eq!(sim.reset().theta, 45.0);
        assert_eq!(sim.state().persons_in_distress.count, 10);
    }

    #[test]
    fn resets_differ_without_reseeding() {
        let mut sim = sim();
        let first = sim.reset().persons_in_distress.clone();
        let second = sim.reset().persons_in_distress.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn deterministic_rng() {
        let run = || {
            let mut sim = Simulation::new(SimConfig::default().with_seed(123)).unwrap();
            let mut state = sim.run(300).clone();
            state.timestamp = None;
            state
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn command_stop_and_start() {
        let mut sim = sim();
        let n = sim
            .command(FleetCommand::Stop, &["RescueBoat_1".into()])
            .unwrap();
        assert_eq!(n, 1);
        assert!(sim.state().vessel("RescueBoat_1").unwrap().is_waiting);
        assert_eq!(sim.current_tick(), 0);

        assert_eq!(sim.command(FleetCommand::Start, &[]).unwrap(), 5);
        assert_eq!(sim.stats().active_ships, 5);
        assert_eq!(sim.events().events_for_vessel("RescueBoat_3").len(), 1);
    }

    #[test]
    fn command_unknown_vessel() {
        let mut sim = sim();
        let err = sim
            .command(FleetCommand::Stop, &["Nobody".into()])
            .unwrap_err();
        assert!(matches!(
            err,
            crate::SimError::Core(SarError::VesselNotFound(ref n)) if n == "Nobody"
        ));
        assert!(sim.events().is_empty());
    }

    #[test]
    fn spawn_persons_within_radius() {
        let mut sim = sim();
        let center = Position::planar(10.0, -20.0);
        let total = sim.spawn_persons(4, 3.0, center).unwrap();
        assert_eq!(total, 14);

        let group = &sim.state().persons_in_distress;
        assert_eq!(group.positions.len(), 14);
        for p in &group.positions[10..] {
            assert!(p.planar_distance(&center) <= 3.0 + 1e-9);
        }
        assert_eq!(sim.current_tick(), 0);
    }

    #[test]
    fn spawn_persons_rejects_bad_input() {
        let mut sim = sim();
        assert!(sim.spawn_persons(0, 1.0, Position::default()).is_err());
        assert!(sim.spawn_persons(1, -1.0, Position::default()).is_err());
        assert!(sim.spawn_persons(1, f64::NAN, Position::default()).is_err());
        assert!(
            sim.spawn_persons(1, 1.0, Position::planar(f64::INFINITY, 0.0))
                .is_err()
        );
        assert_eq!(sim.state().persons_in_distress.count, 10);
    }

    #[test]
    fn spawn_persons_rejects_oversized_count() {
        let mut sim = Simulation::new(SimConfig::default().with_max_spawn(100)).unwrap();
        let err = sim
            .spawn_persons(usize::MAX, 1.0, Position::default())
            .unwrap_err();
        assert!(matches!(err, crate::SimError::Core(SarError::Validation(_))));
        assert!(sim.spawn_persons(101, 1.0, Position::default()).is_err());
        assert_eq!(sim.state().persons_in_distress.count, 10);
        assert_eq!(sim.spawn_persons(100, 1.0, Position::default()).unwrap(), 110);
    }

    #[test]
    fn spawn_persons_rejects_count_overflow() {
        let mut state = WorldState::initial();
        state.persons_in_distress.count = u32::MAX - 1;
        let mut sim = Simulation::new(SimConfig::default())
            .unwrap()
            .with_state(state);
        assert!(sim.spawn_persons(2, 1.0, Position::default()).is_err());
        assert_eq!(sim.state().persons_in_distress.positions.len(), 10);
        assert_eq!(sim.spawn_persons(1, 1.0, Position::default()).unwrap(), u32::MAX);
    }

    #[test]
    fn custom_system_runs_after_builtins() {
        #[derive(Debug)]
        struct Counter;
        impl System for Counter {
            fn name(&self) -> &str {
                "counter"
            }
            fn tick(&mut self, ctx: &mut SimContext<'_>) {
                ctx.emit(SimEventKind::PersonsSpawned { added: 0 }, "counted");
            }
        }

        let mut sim = sim();
        sim.add_system(Counter);
        sim.run(3);
        assert_eq!(sim.system_names().last(), Some(&"counter"));
        assert!(!sim.events().events_at_tick(3).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn theta_stays_in_range(seed in any::<u64>(), ticks in 1u64..400) {
            let mut sim = Simulation::new(SimConfig::default().with_seed(seed)).unwrap();
            for _ in 0..ticks {
                let theta = sim.advance().theta;
                prop_assert!((0.0..360.0).contains(&theta));
            }
        }

        #[test]
        fn phase_follows_schedule(seed in any::<u64>(), per_phase in 1u64..20, ticks in 1u64..200) {
            let config = SimConfig::default().with_seed(seed).with_ticks_per_phase(per_phase);
            let mut sim = Simulation::new(config).unwrap();
            for tick in 1..=ticks {
                let phase = sim.advance().phase;
                prop_assert_eq!(phase, Phase::at_tick(tick, per_phase));
            }
        }

        #[test]
        fn rescuing_count_never_increases(
            seed in any::<u64>(),
            p in 0.0f64..=1.0,
            ticks in 1u64..300,
        ) {
            let config = SimConfig::default().with_seed(seed).with_rescue_probability(p);
            let mut sim = rescuing_sim(config, DistressGroup::initial());
            let mut last = sim.state().persons_in_distress.count;
            for _ in 0..ticks {
                let count = sim.advance().persons_in_distress.count;
                prop_assert!(count <= last);
                prop_assert!(last - count <= 1);
                last = count;
            }
        }

        /// Count and positions shrink under separate guards: once the list is
        /// empty the count keeps going down, and a list longer than the count
        /// keeps its surplus.
        #[test]
        fn count_and_positions_diverge(
            count in 0u32..20,
            listed in 0usize..20,
            ticks in 0u64..40,
        ) {
            let group = DistressGroup {
                count,
                positions: vec![Position::planar(50.0, 100.0); listed],
            };
            let config = SimConfig::default().with_rescue_probability(1.0);
            let mut sim = rescuing_sim(config, group);
            sim.run(ticks);

            let removed = ticks.min(u64::from(count)) as usize;
            let group = &sim.state().persons_in_distress;
            prop_assert_eq!(group.count, count - removed as u32);
            prop_assert_eq!(group.positions.len(), listed.saturating_sub(removed));
        }
    }
}
