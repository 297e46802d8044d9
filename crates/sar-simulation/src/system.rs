use crate::context::SimContext;

/// A simulation subsystem that runs each tick.
///
/// Systems are executed in registration order. Each system receives
/// a mutable context providing access to the world state, RNG, and
/// event log. Ticks are total: a system adjusts the state and never fails.
pub trait System: std::fmt::Debug + Send {
    /// Human-readable name for this system.
    fn name(&self) -> &str;

    /// Called once per tick.
    fn tick(&mut self, ctx: &mut SimContext<'_>);
}
