//! Time-ordered layers and slot addressing.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, GateId};

/// A `(layer, register)` address in the circuit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Layer index (time step).
    pub layer: usize,
    /// Register index (qubit track).
    pub register: usize,
}

impl Slot {
    /// Create a slot address.
    pub fn new(layer: usize, register: usize) -> Self {
        Self { layer, register }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.layer, self.register)
    }
}

/// One column of the circuit.
///
/// `occupied` always equals the union of every held gate's target and
/// control registers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    gates: Vec<Gate>,
    occupied: BTreeSet<usize>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates in insertion order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Occupied registers in ascending order.
    pub fn occupied(&self) -> &BTreeSet<usize> {
        &self.occupied
    }

    /// Whether `register` is taken by a target or control.
    pub fn is_occupied(&self, register: usize) -> bool {
        self.occupied.contains(&register)
    }

    /// Whether the layer holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Find a gate by id.
    pub fn gate(&self, id: &GateId) -> Option<&Gate> {
        self.gates.iter().find(|g| &g.id == id)
    }

    /// Find the gate targeting `register`.
    pub fn gate_on(&self, register: usize) -> Option<&Gate> {
        self.gates.iter().find(|g| g.register == register)
    }

    pub(crate) fn position_of(&self, id: &GateId) -> Option<usize> {
        self.gates.iter().position(|g| &g.id == id)
    }

    pub(crate) fn gate_mut_at(&mut self, id: &GateId, register: usize) -> Option<&mut Gate> {
        self.gates
            .iter_mut()
            .find(|g| &g.id == id && g.register == register)
    }

    /// Append a gate and mark its registers.
    pub(crate) fn insert(&mut self, gate: Gate) {
        self.occupied.extend(gate.registers());
        self.gates.push(gate);
    }

    pub(crate) fn occupy(&mut self, register: usize) {
        self.occupied.insert(register);
    }

    /// Remove the gate at `index` and recompute occupancy from what remains.
    pub(crate) fn take(&mut self, index: usize) -> Gate {
        let gate = self.gates.remove(index);
        self.occupied = self.gates.iter().flat_map(Gate::registers).collect();
        gate
    }
}
