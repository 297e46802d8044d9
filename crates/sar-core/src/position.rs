use serde::{Deserialize, Serialize};

/// A point in the simulation plane.
///
/// The simulation is planar: all movement happens on the `x`/`z` axes and `y`
/// is conventionally held at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// East-west coordinate.
    pub x: f64,
    /// Vertical coordinate, 0 for surface objects.
    pub y: f64,
    /// North-south coordinate.
    pub z: f64,
}

impl Position {
    /// Create a position from all three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a surface position (`y = 0`).
    pub const fn planar(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Planar offset `(dx, dz)` from `self` to `other`.
    pub fn offset_to(&self, other: &Position) -> (f64, f64) {
        (other.x - self.x, other.z - self.z)
    }

    /// Euclidean distance to `other` on the `x`/`z` plane.
    pub fn planar_distance(&self, other: &Position) -> f64 {
        let (dx, dz) = self.offset_to(other);
        dx.hypot(dz)
    }

    /// Move `step` units toward `target` on the plane.
    ///
    /// The caller must ensure the distance is non-zero; `distance` is passed in
    /// because every caller has already computed it for its threshold check.
    pub fn step_toward(&mut self, target: &Position, distance: f64, step: f64) {
        let (dx, dz) = self.offset_to(target);
        self.x += dx / distance * step;
        self.z += dz / distance * step;
    }

    /// Return `true` if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
