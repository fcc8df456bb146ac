//! qcanvas Canvas
//!
//! The event boundary of the circuit editor. A [`Canvas`] receives pointer
//! events in model-space coordinates, resolves them with the
//! [`PlacementEngine`](qcanvas_ir::PlacementEngine), commits them through
//! [`mutation`](qcanvas_ir::mutation), and re-projects the
//! [`VisualGraph`](qcanvas_graph::VisualGraph).
//!
//! | UI event | Handler |
//! |----------|---------|
//! | palette drag start | [`Canvas::begin_drag`] |
//! | drag over canvas | [`Canvas::drag_over`] |
//! | drop | [`Canvas::drop`] |
//! | drag abandoned | [`Canvas::cancel_drag`] |
//! | wire drag from a gate | [`Canvas::connect_start`], [`Canvas::connect_move`], [`Canvas::connect_end`] |
//! | node released after drag | [`Canvas::commit_node_position`] |
//! | node click | [`Canvas::click`] |
//! | amplitude editor change | [`Canvas::edit_amplitudes`] |
//! | export | [`Canvas::export`] |
//!
//! # Example
//!
//! ```
//! use qcanvas_canvas::{Canvas, CanvasConfig};
//! use qcanvas_ir::{Position, Slot};
//!
//! let mut canvas = Canvas::with_default_layout(CanvasConfig::default());
//! let drag = canvas.begin_drag("X").unwrap();
//! // Pointer is offset by half a palette tile.
//! let id = canvas.drop(drag, Position::new(136.0, 16.0)).unwrap();
//!
//! assert_eq!(canvas.circuit().gate_at(Slot::new(0, 0)).unwrap().id, id);
//! assert_eq!(canvas.export().layers[0], ["X", "NONE"]);
//! ```

pub mod canvas;
pub mod config;
pub mod editor;
pub mod error;
pub mod script;
pub mod session;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use editor::{parse_component, parse_components};
pub use error::{ScriptError, ScriptResult};
pub use script::{Event, FieldValue, Layout, Replay, Script};
pub use session::{ConnectSession, DragSession, Palette};
