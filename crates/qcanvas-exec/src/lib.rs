//! qcanvas Execution
//!
//! Turns a [`CircuitModel`](qcanvas_ir::CircuitModel) into the JSON payload an
//! execution backend consumes, and sends it there.
//!
//! - [`ExecutionPayload`] normalizes every qubit to unit norm and lays the
//!   circuit out as one row of strings per layer. Building it never mutates
//!   the circuit.
//! - [`Executor`] is the async seam to a backend; [`HttpExecutor`] POSTs the
//!   payload to an HTTP endpoint and returns its `result` field.
//!
//! # Example
//!
//! ```
//! use qcanvas_exec::ExecutionPayload;
//! use qcanvas_ir::CircuitModel;
//!
//! let mut circuit = CircuitModel::new();
//! circuit.add_qubit();
//! circuit.update_qubit_amplitudes(0, 3.0, 0.0, 0.0, 4.0).unwrap();
//!
//! let payload = ExecutionPayload::from_circuit(&circuit);
//! assert_eq!(payload.registers[0], ["0.6+0j".to_string(), "0+0.8j".to_string()]);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod payload;

pub use client::HttpExecutor;
pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, ExecConfig};
pub use error::{ExecError, ExecResult};
pub use executor::{ExecutionResponse, Executor};
pub use payload::{EMPTY_SLOT, ExecutionPayload, complex_string, format_number, normalize};
