//! Core types for the maritime search-and-rescue simulation.
//!
//! This crate defines the mission data model: the rescue fleet, the group of
//! persons in distress, the phase cycle, and the [`WorldState`] snapshot that
//! the engine mutates each tick. It holds no randomness and performs no I/O,
//! so a [`WorldState`] can be built programmatically or deserialized from JSON.

/// Fleet commands issued from outside the tick loop.
pub mod command;
/// The persons-in-distress group.
pub mod distress;
/// Error types used throughout the crate.
pub mod error;
/// Mission phases and their fixed cyclic order.
pub mod phase;
/// Planar positions and distance helpers.
pub mod position;
/// The world state snapshot and derived statistics.
pub mod state;
/// Rescue vessels and the fixed starting roster.
pub mod vessel;

/// Re-export the fleet command type.
pub use command::FleetCommand;
/// Re-export the distress group type.
pub use distress::DistressGroup;
/// Re-export error types.
pub use error::{SarError, SarResult};
/// Re-export the phase type.
pub use phase::Phase;
/// Re-export the position type.
pub use position::Position;
/// Re-export world state types.
pub use state::{WorldState, WorldStats};
/// Re-export the vessel type.
pub use vessel::Vessel;
