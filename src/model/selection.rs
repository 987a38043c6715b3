// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use super::graph::GraphSnapshot;
use super::ids::{EdgeId, NodeId};

/// The set of currently selected node and edge identities.
///
/// Selection is deliberately independent of history: selecting or deselecting
/// never creates an undo step, and the selection is never persisted. Plain
/// clicks replace the selection; modifier-held clicks extend it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    nodes: BTreeSet<NodeId>,
    edges: BTreeSet<EdgeId>,
}

impl SelectionState {
    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<EdgeId> {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains(node_id)
    }

    pub fn contains_edge(&self, edge_id: &EdgeId) -> bool {
        self.edges.contains(edge_id)
    }

    /// Replaces both sets wholesale.
    pub fn select(
        &mut self,
        nodes: impl IntoIterator<Item = NodeId>,
        edges: impl IntoIterator<Item = EdgeId>,
    ) {
        self.nodes = nodes.into_iter().collect();
        self.edges = edges.into_iter().collect();
    }

    /// Replaces the selection with a single node.
    pub fn select_node(&mut self, node_id: NodeId) {
        self.select([node_id], []);
    }

    /// Replaces the selection with a single edge.
    pub fn select_edge(&mut self, edge_id: EdgeId) {
        self.select([], [edge_id]);
    }

    /// Unions a node into the existing selection (modifier-held click).
    pub fn extend_node(&mut self, node_id: NodeId) {
        self.nodes.insert(node_id);
    }

    /// Unions an edge into the existing selection (modifier-held click).
    pub fn extend_edge(&mut self, edge_id: EdgeId) {
        self.edges.insert(edge_id);
    }

    /// Empties both sets (background click).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Drops ids that no longer resolve in the given snapshot.
    ///
    /// Called after structural changes and after undo/redo so the selection
    /// never points at entities the live graph does not contain.
    pub fn prune(&mut self, graph: &GraphSnapshot) {
        self.nodes.retain(|node_id| graph.contains_node(node_id));
        self.edges.retain(|edge_id| graph.contains_edge(edge_id));
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;
    use crate::model::{Edge, EdgeId, GraphSnapshot, Node, NodeId, Position};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn eid(value: &str) -> EdgeId {
        EdgeId::new(value).expect("edge id")
    }

    #[test]
    fn select_replaces_and_extend_unions() {
        let mut selection = SelectionState::default();
        selection.select_node(nid("n1"));
        assert!(selection.contains_node(&nid("n1")));

        selection.extend_node(nid("n2"));
        selection.extend_node(nid("n2"));
        assert_eq!(selection.nodes().len(), 2);

        selection.select_node(nid("n3"));
        assert_eq!(selection.nodes().len(), 1);
        assert!(selection.contains_node(&nid("n3")));
    }

    #[test]
    fn clear_empties_both_sets() {
        let mut selection = SelectionState::default();
        selection.select([nid("n1")], [eid("e1")]);
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_missing_ids() {
        let graph = GraphSnapshot::new(
            vec![Node::new(nid("n1"), Position::default())],
            vec![Edge::new(eid("e1"), nid("n1"), nid("n1"))],
        );

        let mut selection = SelectionState::default();
        selection.select([nid("n1"), nid("gone")], [eid("e1"), eid("gone")]);
        selection.prune(&graph);

        assert!(selection.contains_node(&nid("n1")));
        assert!(!selection.contains_node(&nid("gone")));
        assert!(selection.contains_edge(&eid("e1")));
        assert!(!selection.contains_edge(&eid("gone")));
    }
}
