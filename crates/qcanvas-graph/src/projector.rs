//! Projection of the logical circuit onto visual nodes and edges.
//!
//! The projection is a pure function of the circuit and the transient view
//! state; nothing here is cached between calls. Layout, in grid units of
//! `stride`:
//!
//! ```text
//!   x: 0          1 .. L           L+1
//!      qubit-i    gate columns     extender
//!      add (below the last qubit)
//! ```

use qcanvas_ir::{CircuitModel, Position, STRIDE};
use tracing::trace;

use crate::graph::VisualGraph;
use crate::node::{
    ADD_QUBIT_NODE_ID, ButtonAction, EXTENDER_NODE_ID, Edge, Node, NodeData, PREVIEW_NODE_ID,
    PreviewVariant, control_node_id, qubit_node_id,
};

/// Offset of a control marker from its slot's corner, on both axes.
pub const CONTROL_MARKER_OFFSET: f64 = 20.0;
/// How much shorter the extender is than the register stack.
pub const EXTENDER_INSET: f64 = 14.0;
/// Preview opacity while drawing a control wire.
pub const CONNECT_PREVIEW_OPACITY: f64 = 0.5;

/// Where the drop/connect preview sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub position: Position,
    /// `true` while a control wire is being drawn.
    pub connecting: bool,
}

/// Transient UI state that is not part of the circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    /// Register whose amplitude editor is open.
    pub selected_qubit: Option<usize>,
    /// Active drop/connect preview; `None` hides the preview node.
    pub preview: Option<Preview>,
}

/// Builds a [`VisualGraph`] from a circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphProjector {
    stride: f64,
}

impl GraphProjector {
    pub fn new(stride: f64) -> Self {
        Self { stride }
    }

    /// Project `circuit` under `view`.
    pub fn project(&self, circuit: &CircuitModel, view: &ViewState) -> VisualGraph {
        let mut graph = VisualGraph::new();
        let num_qubits = circuit.num_qubits();
        let num_layers = circuit.num_layers();

        for (index, qubit) in circuit.qubits().iter().enumerate() {
            graph.add_node(Node::new(
                qubit_node_id(index),
                NodeData::Qubit {
                    index,
                    state: *qubit,
                    editor_open: view.selected_qubit == Some(index),
                },
                Position::new(0.0, self.row(index)),
            ));
        }

        for (layer_index, layer) in circuit.layers().iter().enumerate() {
            let x = self.column(layer_index);
            for gate in layer.gates() {
                graph.add_node(
                    Node::new(
                        gate.id.to_string(),
                        NodeData::Gate {
                            layer_index,
                            register_index: gate.register,
                            name: gate.name.clone(),
                        },
                        Position::new(x, self.row(gate.register)),
                    )
                    .draggable(),
                );
                for &control in &gate.controls {
                    graph.add_node(Node::new(
                        control_node_id(&gate.id, control),
                        NodeData::Control {
                            gate_id: gate.id.clone(),
                            layer_index,
                            register_index: control,
                        },
                        Position::new(
                            x + CONTROL_MARKER_OFFSET,
                            self.row(control) + CONTROL_MARKER_OFFSET,
                        ),
                    ));
                }
            }
        }

        graph.add_node(
            Node::new(
                ADD_QUBIT_NODE_ID,
                NodeData::Button {
                    action: ButtonAction::AddQubit,
                },
                Position::new(0.0, self.row(num_qubits)),
            )
            .with_z_index(-(num_qubits as i64)),
        );

        graph.add_node(
            Node::new(
                EXTENDER_NODE_ID,
                NodeData::Extender {
                    num_qubits,
                    num_layers,
                },
                Position::new(self.column(num_layers), 0.0),
            )
            .with_height((self.row(num_qubits) - EXTENDER_INSET).max(0.0)),
        );

        graph.add_node(self.preview_node(view.preview));

        for index in 0..num_qubits {
            graph.add_edge(Edge::baseline(index));
        }
        for (_, gate) in circuit.gates() {
            for &control in &gate.controls {
                graph.add_edge(Edge::control(&gate.id, gate.register, control));
            }
        }

        trace!(
            "Projected {} nodes, {} edges",
            graph.num_nodes(),
            graph.num_edges()
        );
        graph
    }

    fn preview_node(&self, preview: Option<Preview>) -> Node {
        let connecting = preview.is_some_and(|p| p.connecting);
        let variant = if connecting {
            PreviewVariant::Small
        } else {
            PreviewVariant::Gate
        };
        let node = Node::new(
            PREVIEW_NODE_ID,
            NodeData::Preview { variant },
            preview.map(|p| p.position).unwrap_or_default(),
        )
        .hidden(preview.is_none());

        if connecting {
            node.with_opacity(CONNECT_PREVIEW_OPACITY)
        } else {
            node
        }
    }

    /// x of layer `index` (and of the extender when `index == num_layers`).
    fn column(&self, index: usize) -> f64 {
        (index + 1) as f64 * self.stride
    }

    fn row(&self, index: usize) -> f64 {
        index as f64 * self.stride
    }
}

impl Default for GraphProjector {
    fn default() -> Self {
        Self::new(STRIDE)
    }
}
