use serde::{Deserialize, Serialize};

use crate::position::Position;

/// The persons in the water.
///
/// `count` and `positions.len()` start out equal but are decremented by
/// separate guards, so the list may empty while `count` is still positive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistressGroup {
    /// Persons remaining to be rescued.
    pub count: u32,
    /// One tracked position per remaining person, in spawn order.
    pub positions: Vec<Position>,
}

impl DistressGroup {
    /// Create a group whose count matches the number of positions.
    ///
    /// The count saturates at `u32::MAX`.
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self {
            count: saturating_count(positions.len()),
            positions,
        }
    }

    /// The hardcoded cluster around (50, 100) used at process start.
    pub fn initial() -> Self {
        Self::from_positions(vec![
            Position::planar(50.00, 100.00),
            Position::planar(52.30, 105.50),
            Position::planar(48.70, 98.20),
            Position::planar(55.10, 103.80),
            Position::planar(51.50, 107.30),
            Position::planar(49.20, 101.70),
            Position::planar(53.80, 99.50),
            Position::planar(47.90, 104.20),
            Position::planar(54.30, 102.10),
            Position::planar(50.60, 106.40),
        ])
    }

    /// The position closest to `from` on the plane.
    ///
    /// Ties go to the earliest position in the list.
    pub fn nearest_to(&self, from: &Position) -> Option<(&Position, f64)> {
        self.positions
            .iter()
            .map(|p| (p, from.planar_distance(p)))
            .fold(None, |best, (p, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((p, d)),
            })
    }

    /// Remove one person: decrement `count` if positive, and independently
    /// drop the last position if any remain.
    ///
    /// Returns `false` when `count` was already zero, in which case nothing
    /// changes.
    pub fn remove_one(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        self.positions.pop();
        true
    }

    /// Add persons at the given positions.
    pub fn extend(&mut self, positions: impl IntoIterator<Item = Position>) -> usize {
        let before = self.positions.len();
        self.positions.extend(positions);
        let added = self.positions.len() - before;
        self.count = self.count.saturating_add(saturating_count(added));
        added
    }

    /// Return `true` if nobody is left in the water.
    pub fn is_cleared(&self) -> bool {
        self.count == 0
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
