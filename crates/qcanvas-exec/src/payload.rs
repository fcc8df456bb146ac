//! Simulator-ready export of a circuit.
//!
//! The payload layout:
//!
//! ```json
//! {
//!   "register_count": 2,
//!   "registers": [["1+0j", "0+0j"], ["1+0j", "0+0j"]],
//!   "layer_count": 1,
//!   "layers": [["X", "c0"]],
//!   "custom_gates": []
//! }
//! ```
//!
//! Each layer row has one entry per register: the gate name on a target,
//! `c{target}` on a control, `NONE` elsewhere.

use num_complex::Complex64;
use qcanvas_ir::{CircuitModel, Qubit};
use serde::{Deserialize, Serialize};

use crate::error::ExecResult;

/// Row entry for a register with nothing on it.
pub const EMPTY_SLOT: &str = "NONE";

/// Body of an execution request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionPayload {
    pub register_count: usize,
    /// Per register: `[amp0, amp1]` as `"{re}+{im}j"` strings.
    pub registers: Vec<[String; 2]>,
    pub layer_count: usize,
    pub layers: Vec<Vec<String>>,
    /// Reserved for user-defined gates; always empty for now.
    pub custom_gates: Vec<serde_json::Value>,
}

impl ExecutionPayload {
    /// Normalize and serialize `circuit`. The circuit itself is not touched.
    pub fn from_circuit(circuit: &CircuitModel) -> Self {
        let registers = circuit
            .qubits()
            .iter()
            .map(|q| {
                let n = normalize(q);
                [complex_string(n.amp0), complex_string(n.amp1)]
            })
            .collect();

        let register_count = circuit.num_qubits();
        let layers = circuit
            .layers()
            .iter()
            .map(|layer| {
                let mut row = vec![EMPTY_SLOT.to_string(); register_count];
                for gate in layer.gates() {
                    if let Some(entry) = row.get_mut(gate.register) {
                        entry.clone_from(&gate.name);
                    }
                    for &control in &gate.controls {
                        if let Some(entry) = row.get_mut(control) {
                            *entry = format!("c{}", gate.register);
                        }
                    }
                }
                row
            })
            .collect();

        Self {
            register_count,
            registers,
            layer_count: circuit.num_layers(),
            layers,
            custom_gates: Vec::new(),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> ExecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scale a qubit to unit norm. A zero vector is returned unchanged.
pub fn normalize(qubit: &Qubit) -> Qubit {
    let norm = qubit.norm();
    if norm == 0.0 {
        return *qubit;
    }
    Qubit {
        amp0: qubit.amp0 / norm,
        amp1: qubit.amp1 / norm,
    }
}

/// Render an amplitude as `"{re}+{im}j"`.
pub fn complex_string(c: Complex64) -> String {
    format!("{}+{}j", format_number(c.re), format_number(c.im))
}

/// Shortest round-trip decimal, with exponent notation outside
/// `[1e-6, 1e21)`. Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}
