//! qcanvas Circuit Model
//!
//! This crate holds the authoritative logical circuit behind the qcanvas
//! editor, the snapping engine that turns pointer coordinates into circuit
//! slots, and the gate mutations that keep slot occupancy consistent.
//!
//! # Overview
//!
//! A [`CircuitModel`] is a register space (one [`Qubit`] per track) crossed
//! with a time axis of [`Layer`]s. Gates live inside exactly one layer and
//! target one register, optionally conditioned on control registers. Each
//! layer tracks which registers are occupied so the [`PlacementEngine`] can
//! offer only free slots.
//!
//! # Core Components
//!
//! - **Model**: [`CircuitModel`], [`Layer`], [`Gate`], [`Qubit`]
//! - **Placement**: [`PlacementEngine`], [`Position`], [`Slot`]
//! - **Mutations**: [`mutation::add_gate`], [`mutation::add_control`],
//!   [`mutation::move_gate`]
//!
//! # Example: A Controlled X
//!
//! ```rust
//! use qcanvas_ir::{mutation, CircuitModel, GateId, PlacementEngine, Position, Slot};
//!
//! let mut circuit = CircuitModel::with_size(2, 1);
//! let placement = PlacementEngine::default();
//!
//! // A drop near (120, 0) snaps to layer 0, register 0.
//! let slot = placement
//!     .resolve_index(&circuit, Position::new(118.0, 4.0))
//!     .unwrap();
//! assert_eq!(slot, Slot::new(0, 0));
//!
//! let id = GateId::new("gate-1");
//! mutation::add_gate(&mut circuit, id.clone(), "X", slot.layer, slot.register).unwrap();
//! mutation::add_control(&mut circuit, &id, 0, 0, 1).unwrap();
//!
//! assert_eq!(circuit.layers()[0].occupied().len(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod layer;
pub mod mutation;
pub mod placement;
pub mod qubit;

pub use circuit::CircuitModel;
pub use error::{IrError, IrResult};
pub use gate::{GATE_ID_PREFIX, Gate, GateId};
pub use layer::{Layer, Slot};
pub use mutation::MoveOutcome;
pub use placement::{PlacementEngine, Position, SNAP_THRESHOLD, STRIDE};
pub use qubit::Qubit;
