// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! A graph snapshot is an ordered pair of node and edge records; selection is
//! tracked separately and never enters undo history.

pub mod fixtures;
pub mod graph;
pub mod ids;
pub mod selection;

pub use graph::{
    AttrBag, Edge, EdgeKind, GraphSnapshot, Node, NodeKind, Position, UnknownKindError, LABEL_ATTR,
};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use selection::SelectionState;
