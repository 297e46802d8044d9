pub fn run(ticks: u64, seed: u64, pretty: bool) -> Result<(), String> {
    let mut sim = super::build_simulation(seed, 0)?;
    let state = sim.run(ticks);

    let json = if pretty {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    }
    .map_err(|e| format!("failed to serialize state: {e}"))?;

    println!("{json}");
    Ok(())
}
