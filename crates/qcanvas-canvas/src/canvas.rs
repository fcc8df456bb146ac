//! The canvas controller.
//!
//! [`Canvas`] owns the circuit and the transient view state, receives UI
//! events in model-space coordinates, and keeps the [`VisualGraph`] in step:
//! every handler resolves, commits, and re-projects before returning.

use qcanvas_exec::{ExecResult, ExecutionPayload};
use qcanvas_graph::{
    ButtonAction, GraphProjector, NodeData, NodeKind, Preview, ViewState, VisualGraph,
};
use qcanvas_ir::{
    CircuitModel, GATE_ID_PREFIX, GateId, MoveOutcome, PlacementEngine, Position, mutation,
};
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

use crate::config::CanvasConfig;
use crate::editor::parse_components;
use crate::session::{ConnectSession, DragSession, Palette};

/// Editor state behind a single canvas.
#[derive(Debug)]
pub struct Canvas {
    circuit: CircuitModel,
    config: CanvasConfig,
    placement: PlacementEngine,
    projector: GraphProjector,
    palette: Palette,
    view: ViewState,
    graph: VisualGraph,
}

impl Canvas {
    /// A canvas over an empty circuit.
    pub fn new(config: CanvasConfig) -> Self {
        Self::from_circuit(CircuitModel::new(), config)
    }

    /// A canvas in the editor's start state: two qubits, three empty layers.
    pub fn with_default_layout(config: CanvasConfig) -> Self {
        Self::from_circuit(CircuitModel::with_default_layout(), config)
    }

    pub fn from_circuit(circuit: CircuitModel, config: CanvasConfig) -> Self {
        let placement = config.placement();
        let projector = config.projector();
        let palette = Palette::new(config.palette.iter().cloned());
        let view = ViewState::default();
        let graph = projector.project(&circuit, &view);
        Self {
            circuit,
            config,
            placement,
            projector,
            palette,
            view,
            graph,
        }
    }

    pub fn circuit(&self) -> &CircuitModel {
        &self.circuit
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current visual graph.
    pub fn graph(&self) -> &VisualGraph {
        &self.graph
    }

    pub fn selected_qubit(&self) -> Option<usize> {
        self.view.selected_qubit
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    pub fn add_qubit(&mut self) -> usize {
        let index = self.circuit.add_qubit();
        debug!("Added qubit {index}");
        self.refresh();
        index
    }

    pub fn add_layer(&mut self) -> usize {
        let index = self.circuit.add_layer();
        debug!("Added layer {index}");
        self.refresh();
        index
    }

    // -----------------------------------------------------------------------
    // Palette drag
    // -----------------------------------------------------------------------

    /// Start dragging a palette item.
    pub fn begin_drag(&self, item: &str) -> Option<DragSession> {
        self.palette.begin_drag(item)
    }

    /// Show where the dragged gate would land.
    pub fn drag_over(&mut self, session: &DragSession, pointer: Position) {
        let query = self.drop_point(pointer);
        let position = self.placement.resolve_position(&self.circuit, query);
        trace!(
            "Drag of '{}' previews at ({}, {})",
            session.item(),
            position.x,
            position.y
        );
        self.view.preview = Some(Preview {
            position,
            connecting: false,
        });
        self.refresh();
    }

    /// Place the dragged gate at the nearest free slot, if one is in reach.
    #[instrument(skip(self, session), fields(item = session.item()))]
    pub fn drop(&mut self, session: DragSession, pointer: Position) -> Option<GateId> {
        self.view.preview = None;
        let query = self.drop_point(pointer);

        let Some(slot) = self.placement.resolve_index(&self.circuit, query) else {
            debug!("Drop at ({}, {}) found no free slot", query.x, query.y);
            self.refresh();
            return None;
        };

        let id = next_gate_id();
        let name = session.into_item();
        let placed = mutation::add_gate(
            &mut self.circuit,
            id.clone(),
            name,
            slot.layer,
            slot.register,
        );
        self.refresh();

        match placed {
            Ok(()) => {
                info!("Placed gate '{id}' at {slot}");
                Some(id)
            }
            Err(e) => {
                debug!("Drop rejected: {e}");
                None
            }
        }
    }

    /// Abandon a drag. The circuit is untouched.
    pub fn cancel_drag(&mut self, session: DragSession) {
        debug!("Drag of '{}' cancelled", session.item());
        self.view.preview = None;
        self.refresh();
    }

    // -----------------------------------------------------------------------
    // Control wires
    // -----------------------------------------------------------------------

    /// Start drawing a control wire from the gate node `node_id`.
    ///
    /// Wires only start from gate nodes; anything else yields `None`.
    pub fn connect_start(&self, node_id: &str) -> Option<ConnectSession> {
        let node = self.graph.node(node_id)?;
        let NodeData::Gate {
            layer_index,
            register_index,
            ..
        } = node.data
        else {
            trace!("Connect from non-gate node '{node_id}' ignored");
            return None;
        };
        Some(ConnectSession {
            gate_id: GateId::new(node_id),
            layer: layer_index,
            register: register_index,
        })
    }

    /// Move the wire preview. It snaps only to free slots in the gate's layer.
    pub fn connect_move(&mut self, session: &ConnectSession, pointer: Position) {
        let query = self.connect_point(pointer);
        let offset = self.config.drop_offset;

        let position = match self.placement.resolve_index(&self.circuit, query) {
            Some(slot) if slot.layer == session.layer => {
                self.placement.slot_center(slot) + Position::new(offset, offset)
            }
            _ => Position::new(query.x + offset, query.y),
        };
        self.view.preview = Some(Preview {
            position,
            connecting: true,
        });
        self.refresh();
    }

    /// Finish a wire. Returns `true` when a control was attached.
    #[instrument(skip(self, session), fields(gate = %session.gate_id))]
    pub fn connect_end(&mut self, session: ConnectSession, pointer: Position) -> bool {
        self.view.preview = None;
        let query = self.connect_point(pointer);

        let attached = match self.placement.resolve_index(&self.circuit, query) {
            Some(slot) if slot.layer == session.layer => {
                match mutation::add_control(
                    &mut self.circuit,
                    &session.gate_id,
                    session.layer,
                    session.register,
                    slot.register,
                ) {
                    Ok(()) => {
                        info!("Attached control {} to '{}'", slot.register, session.gate_id);
                        true
                    }
                    Err(e) => {
                        debug!("Control rejected: {e}");
                        false
                    }
                }
            }
            Some(slot) => {
                debug!("Control target {slot} is outside layer {}", session.layer);
                false
            }
            None => false,
        };

        self.refresh();
        attached
    }

    // -----------------------------------------------------------------------
    // Node events
    // -----------------------------------------------------------------------

    /// Commit the final position of a dragged node.
    ///
    /// Only gate nodes move. Returns `None` for other nodes and for rejected
    /// moves; the graph is re-projected either way, which puts a node that
    /// did not snap back where it was.
    pub fn commit_node_position(
        &mut self,
        node_id: &str,
        position: Position,
    ) -> Option<MoveOutcome> {
        let is_gate = self
            .graph
            .node(node_id)
            .is_some_and(|node| node.kind() == NodeKind::Gate);

        let outcome = if is_gate {
            match mutation::move_gate(
                &mut self.circuit,
                &self.placement,
                &GateId::new(node_id),
                position,
            ) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    debug!("Move rejected: {e}");
                    None
                }
            }
        } else {
            trace!("Position commit for '{node_id}' ignored");
            None
        };

        self.refresh();
        outcome
    }

    /// Dispatch a click on a node.
    pub fn click(&mut self, kind: NodeKind, node_id: &str) {
        match kind {
            NodeKind::Button => match ButtonAction::from_node_id(node_id) {
                Some(ButtonAction::AddQubit) => {
                    self.add_qubit();
                }
                Some(ButtonAction::AddLayer) => {
                    self.add_layer();
                }
                None => trace!("Click on unknown button '{node_id}' ignored"),
            },
            NodeKind::Extender => {
                self.add_layer();
            }
            NodeKind::Qubit => {
                let index = self.graph.node(node_id).and_then(|node| match node.data {
                    NodeData::Qubit { index, .. } => Some(index),
                    _ => None,
                });
                if let Some(index) = index {
                    self.view.selected_qubit = Some(index);
                    self.refresh();
                }
            }
            NodeKind::Gate | NodeKind::Control | NodeKind::Preview => {
                trace!("Click on {kind:?} '{node_id}' ignored");
            }
        }
    }

    /// Close the amplitude editor.
    pub fn close_editor(&mut self) {
        self.view.selected_qubit = None;
        self.refresh();
    }

    /// Apply raw editor text to a qubit. Unparseable fields become 0.
    pub fn edit_amplitudes<S: AsRef<str>>(&mut self, qubit: usize, values: &[S; 4]) {
        self.set_amplitudes(qubit, parse_components(values));
    }

    /// Replace a qubit's `[re0, im0, re1, im1]`. Out-of-range indices are ignored.
    pub fn set_amplitudes(&mut self, qubit: usize, [re0, im0, re1, im1]: [f64; 4]) {
        if let Err(e) = self
            .circuit
            .update_qubit_amplitudes(qubit, re0, im0, re1, im1)
        {
            debug!("Amplitude update rejected: {e}");
            return;
        }
        self.refresh();
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    pub fn export(&self) -> ExecutionPayload {
        ExecutionPayload::from_circuit(&self.circuit)
    }

    /// Pretty JSON of [`Canvas::export`].
    pub fn export_json(&self) -> ExecResult<String> {
        self.export().to_json_pretty()
    }

    fn drop_point(&self, pointer: Position) -> Position {
        let offset = self.config.drop_offset;
        pointer - Position::new(offset, offset)
    }

    fn connect_point(&self, pointer: Position) -> Position {
        let offset = self.config.connect_offset;
        pointer - Position::new(offset, offset)
    }

    fn refresh(&mut self) {
        self.graph = self.projector.project(&self.circuit, &self.view);
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::with_default_layout(CanvasConfig::default())
    }
}

fn next_gate_id() -> GateId {
    GateId::new(format!("{GATE_ID_PREFIX}-{}", Uuid::new_v4()))
}
