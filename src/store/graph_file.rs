// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Graph document persistence.
//!
//! The on-disk shape is exactly two top-level keys, `nodes` and `edges`, each
//! an ordered array of entity records; this is the only wire format in scope.
//! Unknown keys inside a record are ignored, but a document missing either
//! top-level array (or typing it as something else) fails the load.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{write_atomic, StoreError};
use crate::model::{Edge, EdgeId, GraphSnapshot, Node, NodeId, Position};

/// Loads a graph document, rejecting malformed shape without side effects.
pub fn load_graph(path: &Path) -> Result<GraphSnapshot, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph_json: GraphJson =
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    graph_from_json(graph_json)
}

/// Returns `Ok(None)` when the file does not exist; otherwise like
/// [`load_graph`].
pub fn load_graph_if_exists(path: &Path) -> Result<Option<GraphSnapshot>, StoreError> {
    match load_graph(path) {
        Ok(graph) => Ok(Some(graph)),
        Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Saves a graph document as pretty JSON via an atomic rename.
pub fn save_graph(path: &Path, graph: &GraphSnapshot) -> Result<(), StoreError> {
    let graph_json = graph_to_json(graph);
    let mut contents =
        serde_json::to_string_pretty(&graph_json).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    contents.push('\n');
    write_atomic(path, contents.as_bytes())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphJson {
    nodes: Vec<NodeJson>,
    edges: Vec<EdgeJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeJson {
    id: String,
    position: PositionJson,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PositionJson {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeJson {
    id: String,
    source: String,
    target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<String, String>,
}

fn graph_to_json(graph: &GraphSnapshot) -> GraphJson {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| NodeJson {
            id: node.node_id().to_string(),
            position: PositionJson {
                x: node.position().x,
                y: node.position().y,
            },
            kind: node.kind().map(|kind| kind.as_str().to_owned()),
            data: node.data().clone(),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeJson {
            id: edge.edge_id().to_string(),
            source: edge.source().to_string(),
            target: edge.target().to_string(),
            kind: edge.kind().map(|kind| kind.as_str().to_owned()),
            data: edge.data().clone(),
        })
        .collect();

    GraphJson { nodes, edges }
}

fn graph_from_json(graph_json: GraphJson) -> Result<GraphSnapshot, StoreError> {
    let mut nodes = Vec::with_capacity(graph_json.nodes.len());
    for node_json in graph_json.nodes {
        let node_id =
            NodeId::new(node_json.id.clone()).map_err(|source| StoreError::InvalidId {
                field: "nodes[].id",
                value: node_json.id,
                source: Box::new(source),
            })?;
        let kind = node_json
            .kind
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|source| StoreError::UnknownKind {
                field: "nodes[].type",
                source,
            })?;

        let mut node = Node::new(node_id, Position::new(node_json.position.x, node_json.position.y));
        node.set_kind(kind);
        *node.data_mut() = node_json.data;
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(graph_json.edges.len());
    for edge_json in graph_json.edges {
        let edge_id =
            EdgeId::new(edge_json.id.clone()).map_err(|source| StoreError::InvalidId {
                field: "edges[].id",
                value: edge_json.id,
                source: Box::new(source),
            })?;
        let source =
            NodeId::new(edge_json.source.clone()).map_err(|source| StoreError::InvalidId {
                field: "edges[].source",
                value: edge_json.source,
                source: Box::new(source),
            })?;
        let target =
            NodeId::new(edge_json.target.clone()).map_err(|source| StoreError::InvalidId {
                field: "edges[].target",
                value: edge_json.target,
                source: Box::new(source),
            })?;
        let kind = edge_json
            .kind
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|source| StoreError::UnknownKind {
                field: "edges[].type",
                source,
            })?;

        let mut edge = Edge::new_with(edge_id, source, target, kind);
        *edge.data_mut() = edge_json.data;
        edges.push(edge);
    }

    Ok(GraphSnapshot::new(nodes, edges))
}
