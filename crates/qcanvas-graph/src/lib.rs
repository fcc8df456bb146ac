//! qcanvas Visual Graph
//!
//! Derives the node/edge graph that a canvas renderer draws from a
//! [`CircuitModel`](qcanvas_ir::CircuitModel). The graph has no lifecycle of
//! its own: it is thrown away and rebuilt by [`GraphProjector::project`]
//! after every committed change.
//!
//! Node ids are derived from logical identity:
//!
//! | Node | Id |
//! |------|----|
//! | register `i` | `qubit-{i}` |
//! | gate | the gate's own id |
//! | control marker | `{gateId}-{controlRegister}` |
//! | add-qubit button | `add` |
//! | extend-circuit affordance | `extender` |
//! | drop/connect preview | `preview` |

pub mod graph;
pub mod node;
pub mod projector;

pub use graph::{NodeIndex, VisualGraph};
pub use node::{
    ADD_LAYER_NODE_ID, ADD_QUBIT_NODE_ID, ButtonAction, EXTENDER_NODE_ID, Edge, EdgeKind,
    HandleSide, Node, NodeData, NodeKind, PREVIEW_NODE_ID, PreviewVariant, control_node_id,
    qubit_node_id,
};
pub use projector::{GraphProjector, Preview, ViewState};
