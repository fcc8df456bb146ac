//! Visual graph container.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::node::{Edge, Node, NodeKind, PREVIEW_NODE_ID};

/// Node index type for the visual graph.
pub type NodeIndex = PetNodeIndex<u32>;

/// Nodes and edges ready for rendering.
///
/// The graph is rebuilt from scratch after every model commit, so it only
/// ever grows while being built and node indices follow insertion order.
/// Node ids are unique; a second node with an existing id is dropped.
#[derive(Debug, Clone, Default)]
pub struct VisualGraph {
    graph: DiGraph<Node, Edge, u32>,
    index: FxHashMap<String, NodeIndex>,
}

impl VisualGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its index. Duplicated ids keep the first node.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&existing) = self.index.get(&node.id) {
            tracing::warn!("Duplicate visual node id '{}'", node.id);
            return existing;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    /// Add an edge between two existing nodes. Returns `false` if either
    /// endpoint is unknown.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let (Some(&source), Some(&target)) =
            (self.index.get(&edge.source), self.index.get(&edge.target))
        else {
            tracing::warn!("Dangling visual edge '{}'", edge.id);
            return false;
        };
        self.graph.add_edge(source, target, edge);
        true
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Nodes of one kind, in insertion order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes().filter(move |n| n.kind() == kind)
    }

    /// Edges leaving the node `id`.
    pub fn outgoing(&self, id: &str) -> Vec<&Edge> {
        self.index
            .get(id)
            .map(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .map(|e| e.weight())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Edges entering the node `id`.
    pub fn incoming(&self, id: &str) -> Vec<&Edge> {
        self.index
            .get(id)
            .map(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .map(|e| e.weight())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The preview node, if the graph has one.
    pub fn preview(&self) -> Option<&Node> {
        self.node(PREVIEW_NODE_ID)
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Serialize for VisualGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes: Vec<&Node> = self.nodes().collect();
        let edges: Vec<&Edge> = self.edges().collect();
        let mut state = serializer.serialize_struct("VisualGraph", 2)?;
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeData, PreviewVariant};
    use qcanvas_ir::{Position, Qubit};

    fn qubit_node(i: usize) -> Node {
        Node::new(
            crate::node::qubit_node_id(i),
            NodeData::Qubit {
                index: i,
                state: Qubit::zero(),
                editor_open: false,
            },
            Position::new(0.0, i as f64 * 120.0),
        )
    }

    #[test]
    fn test_add_and_lookup() {
        let mut graph = VisualGraph::new();
        graph.add_node(qubit_node(0));
        graph.add_node(Node::new(
            "extender",
            NodeData::Extender {
                num_qubits: 1,
                num_layers: 0,
            },
            Position::new(120.0, 0.0),
        ));
        assert!(graph.add_edge(Edge::baseline(0)));

        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.outgoing("qubit-0").len(), 1);
        assert_eq!(graph.incoming("extender")[0].id, "baseline-0");
        assert!(graph.outgoing("missing").is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut graph = VisualGraph::new();
        let first = graph.add_node(qubit_node(0));
        let second = graph.add_node(qubit_node(0));
        assert_eq!(first, second);
        assert_eq!(graph.num_nodes(), 1);
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let mut graph = VisualGraph::new();
        graph.add_node(qubit_node(0));
        assert!(!graph.add_edge(Edge::baseline(0)));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_serialize_shape() {
        let mut graph = VisualGraph::new();
        graph.add_node(
            Node::new(
                PREVIEW_NODE_ID,
                NodeData::Preview {
                    variant: PreviewVariant::Gate,
                },
                Position::default(),
            )
            .hidden(true),
        );
        let json = serde_json::to_value(&graph).unwrap();
        let node = &json["nodes"][0];
        assert_eq!(node["id"], "preview");
        assert_eq!(node["type"], "preview");
        assert_eq!(node["data"]["variant"], "gate");
        assert_eq!(node["hidden"], true);
        assert!(json["edges"].as_array().unwrap().is_empty());
    }
}
