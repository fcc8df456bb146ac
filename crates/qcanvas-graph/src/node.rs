//! Visual node and edge records.
//!
//! Node kinds form a closed set; every consumer matches on [`NodeData`] (or
//! [`NodeKind`]) exhaustively instead of comparing string tags.

use qcanvas_ir::{GateId, Position, Qubit};
use serde::{Deserialize, Serialize};

/// Id of the "add qubit" button node.
pub const ADD_QUBIT_NODE_ID: &str = "add";
/// Id of the "add layer" button node.
pub const ADD_LAYER_NODE_ID: &str = "add-layer";
/// Id of the extend-circuit affordance node.
pub const EXTENDER_NODE_ID: &str = "extender";
/// Id of the drop/connect preview node.
pub const PREVIEW_NODE_ID: &str = "preview";

/// Node id of register `index`.
pub fn qubit_node_id(index: usize) -> String {
    format!("qubit-{index}")
}

/// Node id of the control marker for `gate` on `register`.
pub fn control_node_id(gate: &GateId, register: usize) -> String {
    format!("{gate}-{register}")
}

/// Closed set of visual entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Qubit,
    Extender,
    Button,
    Gate,
    Control,
    Preview,
}

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonAction {
    AddQubit,
    AddLayer,
}

impl ButtonAction {
    /// Map a button node id to its action.
    pub fn from_node_id(id: &str) -> Option<Self> {
        match id {
            ADD_QUBIT_NODE_ID => Some(ButtonAction::AddQubit),
            ADD_LAYER_NODE_ID => Some(ButtonAction::AddLayer),
            _ => None,
        }
    }
}

/// Which side of a node a wire attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    Top,
    Bottom,
}

impl HandleSide {
    /// Side of the gate node facing `control`.
    pub fn for_gate(gate_register: usize, control: usize) -> Self {
        if gate_register > control {
            HandleSide::Top
        } else {
            HandleSide::Bottom
        }
    }

    /// Side of the control marker facing the gate.
    pub fn for_control(gate_register: usize, control: usize) -> Self {
        if gate_register < control {
            HandleSide::Top
        } else {
            HandleSide::Bottom
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HandleSide::Top => "top",
            HandleSide::Bottom => "bottom",
        }
    }
}

/// Preview rendering variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewVariant {
    /// Full-size gate footprint, shown while dragging from the palette.
    Gate,
    /// Control-marker footprint, shown while drawing a control wire.
    Small,
}

/// Per-kind node payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeData {
    Qubit {
        index: usize,
        #[serde(flatten)]
        state: Qubit,
        /// Whether the amplitude editor is open for this register.
        editor_open: bool,
    },
    Extender {
        num_qubits: usize,
        num_layers: usize,
    },
    Button {
        action: ButtonAction,
    },
    Gate {
        layer_index: usize,
        register_index: usize,
        name: String,
    },
    Control {
        gate_id: GateId,
        layer_index: usize,
        register_index: usize,
    },
    Preview {
        variant: PreviewVariant,
    },
}

impl NodeData {
    /// The kind tag of this payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Qubit { .. } => NodeKind::Qubit,
            NodeData::Extender { .. } => NodeKind::Extender,
            NodeData::Button { .. } => NodeKind::Button,
            NodeData::Gate { .. } => NodeKind::Gate,
            NodeData::Control { .. } => NodeKind::Control,
            NodeData::Preview { .. } => NodeKind::Preview,
        }
    }
}

/// A positioned visual node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub data: NodeData,
    pub position: Position,
    pub draggable: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Node {
    /// A fixed (non-draggable), visible node.
    pub fn new(id: impl Into<String>, data: NodeData, position: Position) -> Self {
        Self {
            id: id.into(),
            data,
            position,
            draggable: false,
            hidden: false,
            z_index: None,
            height: None,
            opacity: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn draggable(mut self) -> Self {
        self.draggable = true;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Edge role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Register wire from a qubit node to the extender.
    Baseline,
    /// Wire from a gate to one of its control markers.
    Control,
}

/// A wire between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub kind: EdgeKind,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    pub animated: bool,
}

impl Edge {
    /// Register wire `qubit-{index}` → extender, entering the extender at
    /// the handle named after the register.
    pub fn baseline(index: usize) -> Self {
        Self {
            id: format!("baseline-{index}"),
            kind: EdgeKind::Baseline,
            source: qubit_node_id(index),
            target: EXTENDER_NODE_ID.to_string(),
            source_handle: None,
            target_handle: Some(index.to_string()),
            animated: false,
        }
    }

    /// Wire from a gate to its control marker on `control`, attached on the
    /// sides facing each other.
    pub fn control(gate: &GateId, gate_register: usize, control: usize) -> Self {
        Self {
            id: format!("control-edge-{gate}-{control}"),
            kind: EdgeKind::Control,
            source: gate.to_string(),
            target: control_node_id(gate, control),
            source_handle: Some(HandleSide::for_gate(gate_register, control).as_str().into()),
            target_handle: Some(HandleSide::for_control(gate_register, control).as_str().into()),
            animated: true,
        }
    }
}
