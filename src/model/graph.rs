// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ids::{EdgeId, NodeId};

/// Conventional attribute key for the user-visible label of a node or edge.
pub const LABEL_ATTR: &str = "label";

/// A complete, self-contained copy of the graph at one point in time.
///
/// Order matters: nodes and edges keep their insertion order, and the history
/// fingerprint is order-sensitive. A snapshot is a value; committing one into
/// history stores a structural copy, never an alias to the live arrays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.node_id() == node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.node_id() == node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.edge_id() == edge_id)
    }

    pub fn edge_mut(&mut self, edge_id: &EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.edge_id() == edge_id)
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.node(node_id).is_some()
    }

    pub fn contains_edge(&self, edge_id: &EdgeId) -> bool {
        self.edge(edge_id).is_some()
    }
}

/// An x/y pair in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Open attribute bag attached to every node and edge.
///
/// Keys are free-form; `label` is the only key the editor itself reads.
pub type AttrBag = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Default,
    Input,
    Output,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            _ => Err(UnknownKindError {
                entity: "node",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeKind {
    /// Stepped curve, the canvas default.
    #[default]
    SmoothStep,
    Straight,
    Bezier,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmoothStep => "smoothstep",
            Self::Straight => "straight",
            Self::Bezier => "bezier",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smoothstep" => Ok(Self::SmoothStep),
            "straight" => Ok(Self::Straight),
            "bezier" => Ok(Self::Bezier),
            _ => Err(UnknownKindError {
                entity: "edge",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKindError {
    entity: &'static str,
    value: String,
}

impl UnknownKindError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} kind {:?}", self.entity, self.value)
    }
}

impl std::error::Error for UnknownKindError {}

/// A node on the canvas.
///
/// Identity is immutable once created; position, kind and attributes are
/// mutable via patch. `kind: None` is distinct from `Some(Default)` — a node
/// created without a kind fingerprints differently from one explicitly set to
/// `default`, matching the canvas semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    position: Position,
    kind: Option<NodeKind>,
    data: AttrBag,
}

impl Node {
    pub fn new(node_id: NodeId, position: Position) -> Self {
        Self {
            node_id,
            position,
            kind: None,
            data: AttrBag::new(),
        }
    }

    pub fn new_with(
        node_id: NodeId,
        position: Position,
        kind: Option<NodeKind>,
        label: impl Into<String>,
    ) -> Self {
        let mut data = AttrBag::new();
        data.insert(LABEL_ATTR.to_owned(), label.into());
        Self {
            node_id,
            position,
            kind,
            data,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: Option<NodeKind>) {
        self.kind = kind;
    }

    pub fn data(&self) -> &AttrBag {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut AttrBag {
        &mut self.data
    }

    pub fn label(&self) -> Option<&str> {
        self.data.get(LABEL_ATTR).map(String::as_str)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.data.insert(LABEL_ATTR.to_owned(), label.into());
    }
}

/// A directed edge between two nodes.
///
/// Identity is immutable; endpoints and kind are mutable via patch. The model
/// does not validate that endpoints name nodes present in the same snapshot;
/// only node removal purges edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    edge_id: EdgeId,
    source: NodeId,
    target: NodeId,
    kind: Option<EdgeKind>,
    data: AttrBag,
}

impl Edge {
    pub fn new(edge_id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            edge_id,
            source,
            target,
            kind: None,
            data: AttrBag::new(),
        }
    }

    pub fn new_with(
        edge_id: EdgeId,
        source: NodeId,
        target: NodeId,
        kind: Option<EdgeKind>,
    ) -> Self {
        Self {
            edge_id,
            source,
            target,
            kind,
            data: AttrBag::new(),
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn set_source(&mut self, source: NodeId) {
        self.source = source;
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn set_target(&mut self, target: NodeId) {
        self.target = target;
    }

    pub fn kind(&self) -> Option<EdgeKind> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: Option<EdgeKind>) {
        self.kind = kind;
    }

    pub fn data(&self) -> &AttrBag {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut AttrBag {
        &mut self.data
    }

    pub fn label(&self) -> Option<&str> {
        self.data.get(LABEL_ATTR).map(String::as_str)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.data.insert(LABEL_ATTR.to_owned(), label.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeKind, GraphSnapshot, Node, NodeKind, Position};
    use crate::model::{EdgeId, NodeId};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn eid(value: &str) -> EdgeId {
        EdgeId::new(value).expect("edge id")
    }

    #[test]
    fn node_can_be_constructed_and_updated() {
        let mut node = Node::new(nid("n1"), Position::new(10.0, -4.0));
        assert_eq!(node.kind(), None);
        assert_eq!(node.label(), None);

        node.set_kind(Some(NodeKind::Input));
        node.set_label("Intent");
        node.set_position(Position::new(0.0, 0.0));

        assert_eq!(node.kind(), Some(NodeKind::Input));
        assert_eq!(node.label(), Some("Intent"));
        assert_eq!(node.position(), Position::new(0.0, 0.0));

        node.set_kind(None);
        assert_eq!(node.kind(), None);
    }

    #[test]
    fn node_label_write_keeps_other_attributes() {
        let mut node = Node::new_with(nid("n1"), Position::default(), None, "A");
        node.data_mut().insert("color".to_owned(), "red".to_owned());

        node.set_label("B");

        assert_eq!(node.label(), Some("B"));
        assert_eq!(node.data().get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn edge_can_be_constructed_and_updated() {
        let mut edge = Edge::new(eid("e1-2"), nid("n1"), nid("n2"));
        assert_eq!(edge.kind(), None);

        edge.set_kind(Some(EdgeKind::Straight));
        edge.set_target(nid("n3"));
        edge.set_label("yes");

        assert_eq!(edge.kind(), Some(EdgeKind::Straight));
        assert_eq!(edge.target(), &nid("n3"));
        assert_eq!(edge.label(), Some("yes"));
    }

    #[test]
    fn snapshot_lookup_by_id() {
        let snapshot = GraphSnapshot::new(
            vec![Node::new(nid("n1"), Position::default())],
            vec![Edge::new(eid("e1"), nid("n1"), nid("n1"))],
        );

        assert!(snapshot.contains_node(&nid("n1")));
        assert!(!snapshot.contains_node(&nid("n2")));
        assert!(snapshot.contains_edge(&eid("e1")));
        assert_eq!(snapshot.node(&nid("n1")).map(Node::position), Some(Position::default()));
    }

    #[test]
    fn kind_strings_round_trip() {
        for kind in [NodeKind::Default, NodeKind::Input, NodeKind::Output] {
            assert_eq!(kind.as_str().parse::<NodeKind>(), Ok(kind));
        }
        for kind in [EdgeKind::SmoothStep, EdgeKind::Straight, EdgeKind::Bezier] {
            assert_eq!(kind.as_str().parse::<EdgeKind>(), Ok(kind));
        }
        assert!("rhombus".parse::<NodeKind>().is_err());
        assert!("step".parse::<EdgeKind>().is_err());
    }
}
