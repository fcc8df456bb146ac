//! Nearest-free-slot search.
//!
//! Every `(layer, register)` slot has a canonical center on a square grid:
//!
//! ```text
//!   x = (layer + 1) * stride      y = register * stride
//! ```
//!
//! Column `x = 0` belongs to the qubit nodes, which is why layer 0 sits one
//! stride to the right. A query snaps to the closest *free* slot center when
//! that center lies within `snap_threshold`; otherwise nothing snaps.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::circuit::CircuitModel;
use crate::layer::Slot;

/// Grid pitch between adjacent registers and layers.
pub const STRIDE: f64 = 120.0;

/// Maximum distance at which a query binds to a slot.
pub const SNAP_THRESHOLD: f64 = 20.0;

/// A point in model space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Maps continuous coordinates to discrete circuit slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEngine {
    stride: f64,
    snap_threshold: f64,
}

impl PlacementEngine {
    /// Create an engine with a custom grid pitch and snap radius.
    pub fn new(stride: f64, snap_threshold: f64) -> Self {
        Self {
            stride,
            snap_threshold,
        }
    }

    /// Grid pitch.
    pub fn stride(&self) -> f64 {
        self.stride
    }

    /// Snap radius.
    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    /// Canonical center of `slot`.
    pub fn slot_center(&self, slot: Slot) -> Position {
        Position::new(
            (slot.layer + 1) as f64 * self.stride,
            slot.register as f64 * self.stride,
        )
    }

    /// Nearest free slot within the snap radius, or `None`.
    pub fn resolve_index(&self, circuit: &CircuitModel, query: Position) -> Option<Slot> {
        self.nearest_free(circuit, query)
            .filter(|&(_, distance)| distance <= self.snap_threshold)
            .map(|(slot, _)| slot)
    }

    /// Center of the nearest free slot within the snap radius, or `query`
    /// itself when nothing snaps (including a circuit with no layers).
    pub fn resolve_position(&self, circuit: &CircuitModel, query: Position) -> Position {
        self.resolve_index(circuit, query)
            .map_or(query, |slot| self.slot_center(slot))
    }

    /// Full scan in layer-major, register-minor order. Only a strictly
    /// smaller distance replaces the current best, so the first minimum wins.
    fn nearest_free(&self, circuit: &CircuitModel, query: Position) -> Option<(Slot, f64)> {
        let mut best: Option<(Slot, f64)> = None;

        for (layer_index, layer) in circuit.layers().iter().enumerate() {
            for register in 0..circuit.num_qubits() {
                if layer.is_occupied(register) {
                    continue;
                }
                let slot = Slot::new(layer_index, register);
                let distance = self.slot_center(slot).distance(query);
                if best.is_none_or(|(_, min)| distance < min) {
                    best = Some((slot, distance));
                }
            }
        }

        best
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(STRIDE, SNAP_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateId;
    use crate::mutation;

    #[test]
    fn test_slot_center() {
        let engine = PlacementEngine::default();
        assert_eq!(engine.slot_center(Slot::new(0, 0)), Position::new(120.0, 0.0));
        assert_eq!(engine.slot_center(Slot::new(2, 1)), Position::new(360.0, 120.0));
    }

    #[test]
    fn test_snap_within_threshold() {
        let circuit = CircuitModel::with_size(2, 2);
        let engine = PlacementEngine::default();

        let query = Position::new(250.0, 110.0);
        assert_eq!(engine.resolve_index(&circuit, query), Some(Slot::new(1, 1)));
        assert_eq!(
            engine.resolve_position(&circuit, query),
            Position::new(240.0, 120.0)
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let circuit = CircuitModel::with_size(1, 1);
        let engine = PlacementEngine::default();
        let query = Position::new(120.0, 20.0);
        assert_eq!(engine.resolve_index(&circuit, query), Some(Slot::new(0, 0)));

        let too_far = Position::new(120.0, 20.5);
        assert_eq!(engine.resolve_index(&circuit, too_far), None);
        assert_eq!(engine.resolve_position(&circuit, too_far), too_far);
    }

    #[test]
    fn test_no_layers_returns_raw_position() {
        let circuit = CircuitModel::with_size(3, 0);
        let engine = PlacementEngine::default();
        let query = Position::new(121.0, 1.0);
        assert_eq!(engine.resolve_position(&circuit, query), query);
        assert_eq!(engine.resolve_index(&circuit, query), None);
    }

    #[test]
    fn test_occupied_slot_is_skipped() {
        let mut circuit = CircuitModel::with_size(1, 1);
        mutation::add_gate(&mut circuit, GateId::new("g"), "X", 0, 0).unwrap();
        let engine = PlacementEngine::default();
        assert_eq!(engine.resolve_index(&circuit, Position::new(120.0, 0.0)), None);
    }

    #[test]
    fn test_tie_breaks_on_scan_order() {
        // Equidistant from (0, 0) and (0, 1) under a wide threshold.
        let circuit = CircuitModel::with_size(2, 1);
        let engine = PlacementEngine::new(STRIDE, 100.0);
        let midpoint = Position::new(120.0, 60.0);
        assert_eq!(engine.resolve_index(&circuit, midpoint), Some(Slot::new(0, 0)));
    }
}
