use sar_core::{FleetCommand, Phase};

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    // Mission
    /// The mission moved to the next phase.
    PhaseChanged {
        /// The phase that ended.
        from: Phase,
        /// The phase that began.
        to: Phase,
    },

    // Fleet
    /// A vessel reached the rally point and started waiting.
    VesselArrived {
        /// The vessel that arrived.
        vessel: String,
    },
    /// A vessel's availability flipped at random.
    AvailabilityToggled {
        /// The vessel whose flag flipped.
        vessel: String,
        /// The new waiting flag.
        waiting: bool,
    },
    /// An operator command was applied.
    FleetCommanded {
        /// The command issued.
        command: FleetCommand,
        /// The vessels it was addressed to.
        vessels: Vec<String>,
    },

    // Distress
    /// A person was picked up.
    PersonRescued {
        /// Persons still in the water.
        remaining: u32,
    },
    /// Persons were added to the water.
    PersonsSpawned {
        /// How many were added.
        added: usize,
    },

    // Lifecycle
    /// The simulation was restored to its initial configuration.
    Reset,
}

impl SimEventKind {
    /// Check whether a given vessel is involved in this event.
    pub fn involves(&self, name: &str) -> bool {
        match self {
            Self::VesselArrived { vessel } | Self::AvailabilityToggled { vessel, .. } => {
                vessel == name
            }
            Self::FleetCommanded { vessels, .. } => vessels.iter().any(|v| v == name),
            Self::PhaseChanged { .. }
            | Self::PersonRescued { .. }
            | Self::PersonsSpawned { .. }
            | Self::Reset => false,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all events involving the named vessel.
    pub fn events_for_vessel(&self, name: &str) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.involves(name)).collect()
    }

    /// Return up to `n` of the most recent events, oldest first.
    pub fn latest(&self, n: usize) -> &[SimEvent] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
