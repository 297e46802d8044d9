pub mod serve;
pub mod simulate;
pub mod state;

use sar_simulation::{SimConfig, Simulation};

/// Build a simulation for a CLI run, mapping config errors to a message.
fn build_simulation(seed: u64, max_events: usize) -> Result<Simulation, String> {
    let config = SimConfig::default()
        .with_seed(seed)
        .with_max_events(max_events);
    Simulation::new(config).map_err(|e| format!("simulation init failed: {e}"))
}
