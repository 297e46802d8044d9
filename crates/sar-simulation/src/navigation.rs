use rand::Rng;
use sar_core::{DistressGroup, Phase, Position, Vessel, WorldState};

use crate::config::SimConfig;
use crate::context::SimContext;
use crate::event::SimEventKind;
use crate::system::System;

/// Phase-driven vessel steering.
///
/// Gathering and searching steer to the rally point and park on arrival.
/// Approaching closes in on the nearest person in distress and holds at the
/// standoff radius. Rescuing and returning have no directed movement. After
/// steering, every vessel may flip its waiting flag at random.
#[derive(Debug)]
pub struct NavigationSystem {
    rally_point: Position,
    transit_speed: f64,
    arrival_radius: f64,
    approach_speed: f64,
    standoff_radius: f64,
    toggle_probability: f64,
}

impl NavigationSystem {
    /// Create a navigation system from the run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            rally_point: config.rally_point,
            transit_speed: config.transit_speed,
            arrival_radius: config.arrival_radius,
            approach_speed: config.approach_speed,
            standoff_radius: config.standoff_radius,
            toggle_probability: config.toggle_probability,
        }
    }

    /// Apply the directed-movement rule for `phase` to one active vessel.
    /// Returns `true` if the vessel arrived at the rally point.
    fn steer(&self, phase: Phase, vessel: &mut Vessel, distress: &DistressGroup) -> bool {
        match phase {
            _ if phase.is_rally() => {
                let distance = vessel.position.planar_distance(&self.rally_point);
                if distance > self.arrival_radius {
                    vessel
                        .position
                        .step_toward(&self.rally_point, distance, self.transit_speed);
                    false
                } else {
                    vessel.is_waiting = true;
                    true
                }
            }
            Phase::Approaching => {
                if let Some((target, distance)) = distress.nearest_to(&vessel.position)
                    && distance > self.standoff_radius
                {
                    let target = *target;
                    vessel
                        .position
                        .step_toward(&target, distance, self.approach_speed);
                }
                false
            }
            _ => false,
        }
    }
}

impl System for NavigationSystem {
    fn name(&self) -> &str {
        "navigation"
    }

    fn tick(&mut self, ctx: &mut SimContext<'_>) {
        let WorldState {
            phase,
            ships,
            persons_in_distress,
            ..
        } = &mut *ctx.state;

        let mut emitted = Vec::new();
        for vessel in ships.iter_mut() {
            if !vessel.is_waiting && self.steer(*phase, vessel, persons_in_distress) {
                emitted.push((
                    SimEventKind::VesselArrived {
                        vessel: vessel.name.clone(),
                    },
                    format!("{} reached the rally point", vessel.name),
                ));
            }

            if ctx.rng.random::<f64>() < self.toggle_probability {
                let waiting = vessel.toggle_waiting();
                let verb = if waiting { "stood by" } else { "got under way" };
                emitted.push((
                    SimEventKind::AvailabilityToggled {
                        vessel: vessel.name.clone(),
                        waiting,
                    },
                    format!("{} {verb}", vessel.name),
                ));
            }
        }

        for (kind, description) in emitted {
            ctx.emit(kind, description);
        }
    }
}
