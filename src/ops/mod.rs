// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Mutation coordination for the live graph.
//!
//! The [`Editor`] owns the live snapshot, the undo history and the selection,
//! and is the only write path for all three. Entity patches carry an explicit
//! [`ApplyMode`]: `Live` updates the working graph without touching history
//! (keystroke previews), `Commit` additionally records the resulting state as
//! one undoable step.

use std::fmt;

use crate::history::History;
use crate::model::{
    AttrBag, Edge, EdgeId, EdgeKind, GraphSnapshot, Node, NodeId, NodeKind, Position,
    SelectionState,
};

/// Whether a mutation is a live preview or a history checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Update the live graph only; no history entry is created.
    Live,
    /// Update the live graph and record the result in undo history.
    Commit,
}

/// Partial update for a node position; unset fields keep their value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Partial update for a node. `data` entries are merged key-by-key into the
/// attribute bag, never replacing it wholesale, so patching only the label
/// preserves other attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub position: Option<PositionPatch>,
    pub kind: Option<NodeKind>,
    pub data: AttrBag,
}

impl NodePatch {
    pub fn label(label: impl Into<String>) -> Self {
        let mut data = AttrBag::new();
        data.insert(crate::model::LABEL_ATTR.to_owned(), label.into());
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            position: Some(PositionPatch {
                x: Some(x),
                y: Some(y),
            }),
            ..Self::default()
        }
    }
}

/// Partial update for an edge. Endpoints are not validated against the node
/// list; retargeting onto a missing node is accepted (permissive by design).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgePatch {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    pub kind: Option<EdgeKind>,
    pub data: AttrBag,
}

impl EdgePatch {
    pub fn label(label: impl Into<String>) -> Self {
        let mut data = AttrBag::new();
        data.insert(crate::model::LABEL_ATTR.to_owned(), label.into());
        Self {
            data,
            ..Self::default()
        }
    }
}

/// Result of a patch: a miss is benign, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    NodeAlreadyExists { node_id: NodeId },
    EdgeAlreadyExists { edge_id: EdgeId },
    NodeNotFound { node_id: NodeId },
    EdgeNotFound { edge_id: EdgeId },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeAlreadyExists { node_id } => {
                write!(f, "node already exists (id={node_id})")
            }
            Self::EdgeAlreadyExists { edge_id } => {
                write!(f, "edge already exists (id={edge_id})")
            }
            Self::NodeNotFound { node_id } => write!(f, "node not found (id={node_id})"),
            Self::EdgeNotFound { edge_id } => write!(f, "edge not found (id={edge_id})"),
        }
    }
}

impl std::error::Error for EditError {}

/// The editing context: live graph, history stack and selection in one place.
///
/// One instance per editing session; every call site mutates state through
/// these operations, which is the sole discipline keeping the cached history
/// fingerprint consistent with the live graph.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    graph: GraphSnapshot,
    history: History,
    selection: SelectionState,
}

impl Editor {
    pub fn new(initial: GraphSnapshot) -> Self {
        let mut history = History::new();
        history.init(initial.clone());
        Self {
            graph: initial,
            history,
            selection: SelectionState::default(),
        }
    }

    pub fn graph(&self) -> &GraphSnapshot {
        &self.graph
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Applies a partial update to the node with the given identity.
    ///
    /// A missing identity is a benign miss. In `Commit` mode the full live
    /// state is forwarded to history even on a miss — if earlier live edits
    /// left the graph ahead of the recorded present, the commit point still
    /// captures them; an unchanged state is absorbed by fingerprint dedup.
    pub fn patch_node(
        &mut self,
        node_id: &NodeId,
        patch: &NodePatch,
        mode: ApplyMode,
    ) -> PatchOutcome {
        let outcome = match self.graph.node_mut(node_id) {
            Some(node) => {
                if let Some(position) = &patch.position {
                    let current = node.position();
                    node.set_position(Position::new(
                        position.x.unwrap_or(current.x),
                        position.y.unwrap_or(current.y),
                    ));
                }
                if let Some(kind) = patch.kind {
                    node.set_kind(Some(kind));
                }
                for (key, value) in &patch.data {
                    node.data_mut().insert(key.clone(), value.clone());
                }
                PatchOutcome::Applied
            }
            None => PatchOutcome::NoMatch,
        };

        if mode == ApplyMode::Commit {
            self.history.commit(self.graph.clone());
        }
        outcome
    }

    /// Applies a partial update to the edge with the given identity; same
    /// miss and commit semantics as [`Editor::patch_node`].
    pub fn patch_edge(
        &mut self,
        edge_id: &EdgeId,
        patch: &EdgePatch,
        mode: ApplyMode,
    ) -> PatchOutcome {
        let outcome = match self.graph.edge_mut(edge_id) {
            Some(edge) => {
                if let Some(source) = &patch.source {
                    edge.set_source(source.clone());
                }
                if let Some(target) = &patch.target {
                    edge.set_target(target.clone());
                }
                if let Some(kind) = patch.kind {
                    edge.set_kind(Some(kind));
                }
                for (key, value) in &patch.data {
                    edge.data_mut().insert(key.clone(), value.clone());
                }
                PatchOutcome::Applied
            }
            None => PatchOutcome::NoMatch,
        };

        if mode == ApplyMode::Commit {
            self.history.commit(self.graph.clone());
        }
        outcome
    }

    /// Appends a node and commits.
    pub fn add_node(&mut self, node: Node) -> Result<(), EditError> {
        if self.graph.contains_node(node.node_id()) {
            return Err(EditError::NodeAlreadyExists {
                node_id: node.node_id().clone(),
            });
        }
        self.graph.nodes_mut().push(node);
        self.history.commit(self.graph.clone());
        Ok(())
    }

    /// Appends an edge and commits. Endpoints are not validated; the canvas
    /// may connect ids the graph does not (yet) contain.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), EditError> {
        if self.graph.contains_edge(edge.edge_id()) {
            return Err(EditError::EdgeAlreadyExists {
                edge_id: edge.edge_id().clone(),
            });
        }
        self.graph.edges_mut().push(edge);
        self.history.commit(self.graph.clone());
        Ok(())
    }

    /// Removes a node together with its incident edges, then commits.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Result<(), EditError> {
        if !self.graph.contains_node(node_id) {
            return Err(EditError::NodeNotFound {
                node_id: node_id.clone(),
            });
        }
        self.graph.nodes_mut().retain(|n| n.node_id() != node_id);
        self.graph
            .edges_mut()
            .retain(|e| e.source() != node_id && e.target() != node_id);
        self.selection.prune(&self.graph);
        self.history.commit(self.graph.clone());
        Ok(())
    }

    /// Removes an edge and commits.
    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Result<(), EditError> {
        if !self.graph.contains_edge(edge_id) {
            return Err(EditError::EdgeNotFound {
                edge_id: edge_id.clone(),
            });
        }
        self.graph.edges_mut().retain(|e| e.edge_id() != edge_id);
        self.selection.prune(&self.graph);
        self.history.commit(self.graph.clone());
        Ok(())
    }

    /// Replaces the whole live graph (e.g. after a successful load) and
    /// records it as one undoable step.
    pub fn replace_graph(&mut self, graph: GraphSnapshot) {
        self.graph = graph;
        self.selection.prune(&self.graph);
        self.history.commit(self.graph.clone());
    }

    /// Steps history back and applies the restored snapshot as the live
    /// graph. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(restored) => {
                self.graph = restored;
                self.selection.prune(&self.graph);
                true
            }
            None => false,
        }
    }

    /// Steps history forward; the mirror of [`Editor::undo`].
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                self.graph = restored;
                self.selection.prune(&self.graph);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
