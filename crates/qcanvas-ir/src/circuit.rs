//! The authoritative logical circuit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateId};
use crate::layer::{Layer, Slot};
use crate::qubit::Qubit;

/// Qubits of the editor's start state.
pub const DEFAULT_QUBITS: usize = 2;
/// Layers of the editor's start state.
pub const DEFAULT_LAYERS: usize = 3;

/// A circuit under construction.
///
/// Qubits and layers are append-only: there is no removal or reordering, so
/// register and layer counts never decrease. Gate mutations live in
/// [`mutation`](crate::mutation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitModel {
    qubits: Vec<Qubit>,
    layers: Vec<Layer>,
}

impl CircuitModel {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the editor's start state: two |0⟩ qubits and three empty layers.
    pub fn with_default_layout() -> Self {
        Self::with_size(DEFAULT_QUBITS, DEFAULT_LAYERS)
    }

    /// Create a circuit with `num_qubits` |0⟩ qubits and `num_layers` empty layers.
    pub fn with_size(num_qubits: usize, num_layers: usize) -> Self {
        let mut circuit = Self::new();
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_layers {
            circuit.add_layer();
        }
        circuit
    }

    /// Append a qubit in the |0⟩ state, returning its register index.
    pub fn add_qubit(&mut self) -> usize {
        self.qubits.push(Qubit::zero());
        self.qubits.len() - 1
    }

    /// Append an empty layer, returning its index.
    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Layer::new());
        self.layers.len() - 1
    }

    /// Replace the four amplitude components of one qubit.
    pub fn update_qubit_amplitudes(
        &mut self,
        index: usize,
        re0: f64,
        im0: f64,
        re1: f64,
        im1: f64,
    ) -> IrResult<()> {
        let num_qubits = self.qubits.len();
        let qubit = self
            .qubits
            .get_mut(index)
            .ok_or(IrError::QubitNotFound { index, num_qubits })?;
        *qubit = Qubit::from_components(re0, im0, re1, im1);
        debug!("Updated amplitudes of qubit {index}");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the qubits in register order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the layers in time order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Get the number of registers.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Get one qubit.
    pub fn qubit(&self, index: usize) -> Option<&Qubit> {
        self.qubits.get(index)
    }

    /// Get one layer.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Iterate over every gate with its layer index.
    pub fn gates(&self) -> impl Iterator<Item = (usize, &Gate)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| layer.gates().iter().map(move |g| (i, g)))
    }

    /// Find a gate by id, returning its layer index too.
    pub fn find_gate(&self, id: &GateId) -> Option<(usize, &Gate)> {
        self.gates().find(|(_, g)| &g.id == id)
    }

    /// The gate targeting `slot`, if any.
    pub fn gate_at(&self, slot: Slot) -> Option<&Gate> {
        self.layers.get(slot.layer)?.gate_on(slot.register)
    }

    /// Total number of placed gates.
    pub fn num_gates(&self) -> usize {
        self.layers.iter().map(|l| l.gates().len()).sum()
    }

    pub(crate) fn layer_mut(&mut self, index: usize) -> IrResult<&mut Layer> {
        let num_layers = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(IrError::LayerNotFound { index, num_layers })
    }

    pub(crate) fn check_register(&self, register: usize) -> IrResult<()> {
        if register < self.qubits.len() {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                index: register,
                num_qubits: self.qubits.len(),
            })
        }
    }
}
