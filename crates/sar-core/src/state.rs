use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::distress::DistressGroup;
use crate::error::{SarError, SarResult};
use crate::phase::Phase;
use crate::vessel::{Vessel, initial_roster};

/// Wind direction every run starts with, in degrees.
pub const INITIAL_THETA: f64 = 90.0;

/// Wrap an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.0; those are
/// folded back to 0.0.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The authoritative snapshot of the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Current mission phase.
    pub phase: Phase,
    /// Wind direction in degrees, within `[0, 360)`.
    pub theta: f64,
    /// The rescue fleet, in roster order.
    pub ships: Vec<Vessel>,
    /// The persons still in the water.
    #[serde(rename = "personsInDistress")]
    pub persons_in_distress: DistressGroup,
    /// Ticks advanced since start or the last reset.
    #[serde(default)]
    pub tick: u64,
    /// Wall-clock time of the last tick, `None` before the first one.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::initial()
    }
}

impl WorldState {
    /// The hardcoded start-of-process state.
    pub fn initial() -> Self {
        Self::with_distress(DistressGroup::initial())
    }

    /// The fixed fleet layout at tick 0 with the given distress group.
    pub fn with_distress(persons_in_distress: DistressGroup) -> Self {
        Self {
            phase: Phase::Gathering,
            theta: INITIAL_THETA,
            ships: initial_roster(),
            persons_in_distress,
            tick: 0,
            timestamp: None,
        }
    }

    /// Find a vessel by exact name.
    pub fn vessel(&self, name: &str) -> Option<&Vessel> {
        self.ships.iter().find(|v| v.name == name)
    }

    /// Number of vessels currently under way.
    pub fn active_count(&self) -> usize {
        self.ships.iter().filter(|v| !v.is_waiting).count()
    }

    /// Number of vessels currently holding.
    pub fn waiting_count(&self) -> usize {
        self.ships.len() - self.active_count()
    }

    /// Set the waiting flag on the named vessels, or on the whole fleet when
    /// `names` is empty.
    ///
    /// All names are checked before anything changes, so an unknown name
    /// leaves the state untouched. Returns the number of vessels addressed.
    pub fn set_waiting(&mut self, names: &[String], waiting: bool) -> SarResult<usize> {
        if let Some(missing) = names.iter().find(|n| self.vessel(n).is_none()) {
            return Err(SarError::VesselNotFound(missing.clone()));
        }

        let mut affected = 0;
        for vessel in &mut self.ships {
            if names.is_empty() || names.contains(&vessel.name) {
                vessel.is_waiting = waiting;
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Derived counters for the statistics endpoint.
    pub fn stats(&self) -> WorldStats {
        let active = self.active_count();
        WorldStats {
            phase: self.phase,
            total_ships: self.ships.len(),
            active_ships: active,
            waiting_ships: self.ships.len() - active,
            persons_in_distress: self.persons_in_distress.count,
            wind_direction: self.theta,
            simulation_time: self.tick,
        }
    }
}

/// Summary counters derived from a [`WorldState`] without advancing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    /// Current phase.
    pub phase: Phase,
    /// Fleet size.
    pub total_ships: usize,
    /// Vessels not waiting.
    pub active_ships: usize,
    /// Vessels waiting.
    pub waiting_ships: usize,
    /// Remaining distress count.
    pub persons_in_distress: u32,
    /// Wind direction in degrees.
    pub wind_direction: f64,
    /// Tick counter.
    pub simulation_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_state() {
        let s = WorldState::initial();
        assert_eq!(s.phase, Phase::Gathering);
        assert_eq!(s.theta, 90.0);
        assert_eq!(s.ships.len(), 5);
        assert_eq!(s.persons_in_distress.count, 10);
        assert_eq!(s.tick, 0);
        assert!(s.timestamp.is_none());
    }

    #[test]
    fn stats_counts() {
        let stats = WorldState::initial().stats();
        assert_eq!(stats.total_ships, 5);
        assert_eq!(stats.active_ships, 3);
        assert_eq!(stats.waiting_ships, 2);
        assert_eq!(stats.persons_in_distress, 10);
        assert_eq!(stats.simulation_time, 0);
    }

    #[test]
    fn set_waiting_named() {
        let mut s = WorldState::initial();
        let n = s
            .set_waiting(&["RescueBoat_2".into(), "RescueBoat_4".into()], false)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(s.active_count(), 5);
    }

    #[test]
    fn set_waiting_whole_fleet() {
        let mut s = WorldState::initial();
        assert_eq!(s.set_waiting(&[], true).unwrap(), 5);
        assert_eq!(s.waiting_count(), 5);
    }

    #[test]
    fn set_waiting_unknown_is_atomic() {
        let mut s = WorldState::initial();
        let err = s
            .set_waiting(&["RescueBoat_1".into(), "Ghost".into()], true)
            .unwrap_err();
        assert_eq!(err, SarError::VesselNotFound("Ghost".into()));
        assert!(!s.vessel("RescueBoat_1").unwrap().is_waiting);
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(WorldState::initial()).unwrap();
        for key in ["phase", "theta", "ships", "personsInDistress", "timestamp"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["phase"], "Gathering");
        assert_eq!(json["personsInDistress"]["count"], 10);
        assert_eq!(json["ships"][0]["name"], "RescueBoat_1");
        assert!(json["timestamp"].is_null());
    }

    #[test]
    fn timestamp_serializes_iso8601() {
        let mut s = WorldState::initial();
        let ts = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        s.timestamp = Some(ts);
        let json = serde_json::to_value(&s).unwrap();
        let text = json["timestamp"].as_str().unwrap();
        assert!(text.starts_with("2024-05-01T12:30:00"));
        let back: WorldState = serde_json::from_value(json).unwrap();
        assert_eq!(back.timestamp, Some(ts));
    }

    #[test]
    fn wrap_degrees_edges() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(-1e-20), 0.0);
        assert!((wrap_degrees(725.5) - 5.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn wrap_degrees_in_range(deg in -1.0e6f64..1.0e6) {
            let w = wrap_degrees(deg);
            prop_assert!((0.0..360.0).contains(&w));
        }
    }
}
