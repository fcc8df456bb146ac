//! Replayable UI event scripts.
//!
//! A script drives a fresh [`Canvas`] through the same handlers the UI
//! calls. YAML and JSON are both accepted:
//!
//! ```yaml
//! layout: default          # or `empty`
//! config:                  # optional, see CanvasConfig
//!   palette: [X, H]
//! events:
//!   - add_qubit
//!   - drop: { item: X, x: 136, y: 16 }
//!   - connect: { layer: 0, register: 0, x: 152, y: 152 }
//!   - move: { layer: 0, register: 0, x: 360, y: 240 }
//!   - click: { kind: qubit, id: qubit-1 }
//!   - edit: { qubit: 1, values: [0, 0, 1, 0] }
//! ```
//!
//! Gate ids are generated on drop, so `move` and `connect` address a gate by
//! the slot it currently occupies.

use std::path::Path;

use qcanvas_graph::NodeKind;
use qcanvas_ir::{Position, Slot};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::error::ScriptResult;
use crate::session::DragSession;

/// Starting circuit for a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Two qubits, three layers.
    #[default]
    Default,
    /// No qubits, no layers.
    Empty,
}

/// One amplitude field as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// A single UI event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    AddQubit,
    AddLayer,
    Click {
        kind: NodeKind,
        id: String,
    },
    CloseEditor,
    Edit {
        qubit: usize,
        values: [FieldValue; 4],
    },
    DragOver {
        item: String,
        x: f64,
        y: f64,
    },
    Drop {
        item: String,
        x: f64,
        y: f64,
    },
    /// Abandon the pending drag, if any.
    Cancel,
    /// Release the gate at `(layer, register)` at `(x, y)`.
    Move {
        layer: usize,
        register: usize,
        x: f64,
        y: f64,
    },
    /// Draw a control wire from the gate at `(layer, register)` to `(x, y)`.
    Connect {
        layer: usize,
        register: usize,
        x: f64,
        y: f64,
    },
}

/// A parsed event script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CanvasConfig>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Outcome of [`Script::replay`].
#[derive(Debug)]
pub struct Replay {
    pub canvas: Canvas,
    /// Events that changed the circuit or the view.
    pub applied: usize,
    /// Events that were rejected or had nothing to act on.
    pub ignored: usize,
}

impl Script {
    /// Load a script; `.json` files are read as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScriptResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_yaml_str(contents: &str) -> ScriptResult<Self> {
        let script: Script = serde_yaml_ng::from_str(contents)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json_str(contents: &str) -> ScriptResult<Self> {
        let script: Script = serde_json::from_str(contents)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> ScriptResult<()> {
        match &self.config {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }

    /// Replay on a canvas built from the script's own config or the default.
    pub fn replay(&self) -> Replay {
        self.replay_with(&CanvasConfig::default())
    }

    /// Replay, using `fallback` when the script carries no config.
    pub fn replay_with(&self, fallback: &CanvasConfig) -> Replay {
        let config = self.config.clone().unwrap_or_else(|| fallback.clone());
        let canvas = match self.layout {
            Layout::Default => Canvas::with_default_layout(config),
            Layout::Empty => Canvas::new(config),
        };

        let mut player = Player {
            canvas,
            pending: None,
            applied: 0,
            ignored: 0,
        };
        for (index, event) in self.events.iter().enumerate() {
            let applied = player.apply(event);
            if applied {
                player.applied += 1;
            } else {
                debug!("Event #{index} ({event:?}) had no effect");
                player.ignored += 1;
            }
        }
        if let Some(session) = player.pending.take() {
            warn!("Script ended mid-drag of '{}'; cancelling", session.item());
            player.canvas.cancel_drag(session);
        }

        Replay {
            canvas: player.canvas,
            applied: player.applied,
            ignored: player.ignored,
        }
    }
}

struct Player {
    canvas: Canvas,
    pending: Option<DragSession>,
    applied: usize,
    ignored: usize,
}

impl Player {
    fn apply(&mut self, event: &Event) -> bool {
        match event {
            Event::AddQubit => {
                self.canvas.add_qubit();
                true
            }
            Event::AddLayer => {
                self.canvas.add_layer();
                true
            }
            Event::Click { kind, id } => {
                let before = (self.canvas.circuit().clone(), self.canvas.selected_qubit());
                self.canvas.click(*kind, id);
                before != (self.canvas.circuit().clone(), self.canvas.selected_qubit())
            }
            Event::CloseEditor => {
                let was_open = self.canvas.selected_qubit().is_some();
                self.canvas.close_editor();
                was_open
            }
            Event::Edit { qubit, values } => {
                if *qubit >= self.canvas.circuit().num_qubits() {
                    return false;
                }
                let text = [
                    values[0].to_text(),
                    values[1].to_text(),
                    values[2].to_text(),
                    values[3].to_text(),
                ];
                self.canvas.edit_amplitudes(*qubit, &text);
                true
            }
            Event::DragOver { item, x, y } => match self.session_for(item) {
                Some(session) => {
                    self.canvas.drag_over(&session, Position::new(*x, *y));
                    self.pending = Some(session);
                    true
                }
                None => false,
            },
            Event::Drop { item, x, y } => match self.session_for(item) {
                Some(session) => self.canvas.drop(session, Position::new(*x, *y)).is_some(),
                None => false,
            },
            Event::Cancel => match self.pending.take() {
                Some(session) => {
                    self.canvas.cancel_drag(session);
                    true
                }
                None => false,
            },
            Event::Move {
                layer,
                register,
                x,
                y,
            } => {
                let Some(id) = self.gate_id_at(*layer, *register) else {
                    return false;
                };
                self.canvas
                    .commit_node_position(&id, Position::new(*x, *y))
                    .is_some_and(|outcome| outcome.is_moved())
            }
            Event::Connect {
                layer,
                register,
                x,
                y,
            } => {
                let Some(id) = self.gate_id_at(*layer, *register) else {
                    return false;
                };
                let Some(session) = self.canvas.connect_start(&id) else {
                    return false;
                };
                let pointer = Position::new(*x, *y);
                self.canvas.connect_move(&session, pointer);
                self.canvas.connect_end(session, pointer)
            }
        }
    }

    /// Reuse the pending drag when it carries `item`, otherwise start anew.
    fn session_for(&mut self, item: &str) -> Option<DragSession> {
        match self.pending.take() {
            Some(session) if session.item() == item => Some(session),
            Some(other) => {
                self.canvas.cancel_drag(other);
                self.canvas.begin_drag(item)
            }
            None => self.canvas.begin_drag(item),
        }
    }

    fn gate_id_at(&self, layer: usize, register: usize) -> Option<String> {
        self.canvas
            .circuit()
            .gate_at(Slot::new(layer, register))
            .map(|gate| gate.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_events() {
        let script = Script::from_yaml_str(
            r#"
layout: empty
events:
  - add_qubit
  - add_layer
  - drop: { item: X, x: 136, y: 16 }
  - click: { kind: button, id: add }
  - edit: { qubit: 0, values: [0, "0", 1, abc] }
"#,
        )
        .unwrap();
        assert_eq!(script.layout, Layout::Empty);
        assert_eq!(script.events.len(), 5);
        assert_eq!(script.events[0], Event::AddQubit);
        assert_eq!(
            script.events[2],
            Event::Drop {
                item: "X".into(),
                x: 136.0,
                y: 16.0
            }
        );
    }

    #[test]
    fn test_parse_json() {
        let script = Script::from_json_str(
            r#"{"events": ["add_layer", {"click": {"kind": "extender", "id": "extender"}}]}"#,
        )
        .unwrap();
        assert_eq!(script.layout, Layout::Default);
        assert_eq!(script.events.len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Script::from_yaml_str("config: { stride: -1 }\nevents: []").is_err());
    }

    #[test]
    fn test_replay_counts() {
        let script = Script::from_yaml_str(
            r#"
events:
  - drop: { item: X, x: 136, y: 16 }
  - drop: { item: CNOT, x: 256, y: 16 }
  - drop: { item: X, x: 900, y: 900 }
  - move: { layer: 2, register: 1, x: 0, y: 0 }
"#,
        )
        .unwrap();
        let replay = script.replay();
        assert_eq!(replay.applied, 1);
        assert_eq!(replay.ignored, 3);
        assert_eq!(replay.canvas.circuit().num_gates(), 1);
    }

    #[test]
    fn test_unfinished_drag_is_cancelled() {
        let script = Script::from_yaml_str("events:\n  - drag_over: { item: X, x: 136, y: 16 }\n").unwrap();
        let replay = script.replay();
        assert!(replay.canvas.graph().preview().unwrap().hidden);
        assert_eq!(replay.canvas.circuit().num_gates(), 0);
    }
}
