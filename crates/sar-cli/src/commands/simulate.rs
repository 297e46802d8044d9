use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sar_core::Phase;
use sar_simulation::SimEventKind;

pub fn run(ticks: u64, seed: u64, verbose: bool, last: Option<usize>) -> Result<(), String> {
    let mut sim = super::build_simulation(seed, 500)?;
    sim.run(ticks);
    let state = sim.state();

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({ticks} ticks, seed={seed})").dimmed()
    );
    println!(
        "  phase {}, wind {:.1}°, {} events logged",
        colorize_phase(state.phase),
        state.theta,
        sim.events().len()
    );
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        let shown = match last {
            Some(n) => sim.events().latest(n),
            None => sim.events().events(),
        };
        for event in shown {
            let tick_label = format!("[tick {:>4}]", event.tick).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {tick_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    SimEventKind::PhaseChanged { .. } | SimEventKind::PersonRescued { .. }
                )
            })
            .collect();

        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in notable {
                let label = match event.kind {
                    SimEventKind::PersonRescued { .. } => "RESCUE".green().bold(),
                    _ => " PHASE".cyan().bold(),
                };
                println!("  {label}  [tick {:>4}] {}", event.tick, event.description);
            }
            println!();
        }
    }

    // Fleet table
    println!("  {}", "Fleet Status".bold().underline());
    println!();

    let rally = sim.config().rally_point;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Vessel", "Position", "To rally", "Status"]);
    for vessel in &state.ships {
        let status = if vessel.is_waiting {
            "waiting".yellow().to_string()
        } else {
            "under way".green().to_string()
        };
        table.add_row(vec![
            vessel.name.clone(),
            vessel.position.to_string(),
            format!("{:.2}", vessel.position.planar_distance(&rally)),
            status,
        ]);
    }
    println!("{table}");
    println!();

    // Distress summary
    let group = &state.persons_in_distress;
    println!("  {}", "Persons in Distress".bold().underline());
    if group.is_cleared() {
        println!("  {}", "all persons rescued".green().bold());
    } else {
        println!(
            "  {} remaining, {} tracked positions",
            group.count.to_string().red().bold(),
            group.positions.len()
        );
    }
    println!();

    Ok(())
}

fn colorize_phase(phase: Phase) -> colored::ColoredString {
    match phase {
        Phase::Gathering | Phase::Searching => phase.as_str().blue(),
        Phase::Approaching => phase.as_str().yellow(),
        Phase::Rescuing => phase.as_str().green(),
        Phase::Returning => phase.as_str().normal(),
    }
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::PhaseChanged { .. } => description.cyan().bold(),
        SimEventKind::PersonRescued { .. } => description.green(),
        SimEventKind::VesselArrived { .. } => description.blue(),
        SimEventKind::AvailabilityToggled { .. } => description.yellow(),
        SimEventKind::FleetCommanded { .. } | SimEventKind::PersonsSpawned { .. } => {
            description.magenta()
        }
        SimEventKind::Reset => description.normal(),
    }
}
