//! Tick-based rescue mission engine.
//!
//! A [`Simulation`] owns the single [`sar_core::WorldState`] of a run together
//! with a seedable RNG and an ordered list of [`System`]s. Each call to
//! [`Simulation::advance`] moves the mission forward by exactly one tick:
//! phase schedule, wind, vessel navigation, distress drift, then rescue
//! attrition. The engine does no locking; hosts that share a simulation across
//! threads must serialize access themselves.

/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Drift system: wind-driven displacement of persons in distress.
pub mod drift;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Navigation system: phase-driven vessel steering and availability toggles.
pub mod navigation;
/// Rescue system: probabilistic pickup during the rescuing phase.
pub mod rescue;
/// Top-level simulation orchestrator.
pub mod simulation;
/// The trait that all simulation systems implement.
pub mod system;
/// Wind system: random walk of the wind direction.
pub mod wind;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-export of [`system::System`].
pub use system::System;
