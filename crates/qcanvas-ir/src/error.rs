//! Error types for the IR crate.
//!
//! Every rejection leaves the [`CircuitModel`](crate::CircuitModel)
//! untouched. Callers at the UI boundary log these and carry on.

use crate::gate::GateId;
use crate::layer::Slot;
use thiserror::Error;

/// Reasons a circuit mutation was not applied.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the register space.
    #[error("Qubit {index} not found (circuit has {num_qubits} qubits)")]
    QubitNotFound {
        /// The requested register index.
        index: usize,
        /// Current register count.
        num_qubits: usize,
    },

    /// Layer index outside the time axis.
    #[error("Layer {index} not found (circuit has {num_layers} layers)")]
    LayerNotFound {
        /// The requested layer index.
        index: usize,
        /// Current layer count.
        num_layers: usize,
    },

    /// Gate id (and register, where given) not present.
    #[error("Gate '{id}' not found{}", format_slot_context(.slot))]
    GateNotFound {
        /// The gate that was looked up.
        id: GateId,
        /// The slot the gate was expected at, if the lookup was scoped.
        slot: Option<Slot>,
    },

    /// The register is already taken in that layer.
    #[error("Register {register} is already occupied in layer {layer}")]
    RegisterOccupied {
        /// Layer index.
        layer: usize,
        /// Register index.
        register: usize,
    },

    /// A gate cannot be controlled by its own target register.
    #[error("Gate '{id}' cannot use its target register {register} as a control")]
    SelfControl {
        /// The gate.
        id: GateId,
        /// The gate's target register.
        register: usize,
    },
}

/// Helper function to format optional slot context.
#[allow(clippy::ref_option)]
fn format_slot_context(slot: &Option<Slot>) -> String {
    match slot {
        Some(slot) => format!(" at {slot}"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_not_found_display() {
        let err = IrError::GateNotFound {
            id: GateId::new("gate-7"),
            slot: Some(Slot::new(1, 2)),
        };
        let msg = err.to_string();
        assert!(msg.contains("gate-7"));
        assert!(msg.contains("(1, 2)"));

        let unscoped = IrError::GateNotFound {
            id: GateId::new("gate-7"),
            slot: None,
        };
        assert_eq!(unscoped.to_string(), "Gate 'gate-7' not found");
    }

    #[test]
    fn test_occupied_display() {
        let err = IrError::RegisterOccupied {
            layer: 0,
            register: 3,
        };
        assert!(err.to_string().contains("Register 3"));
    }
}
