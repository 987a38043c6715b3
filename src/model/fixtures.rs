// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use super::graph::{Edge, GraphSnapshot, Node, NodeKind, Position};
use super::ids::{EdgeId, NodeId};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// The built-in demo graph: a small intent-routing pipeline.
pub fn demo_graph() -> GraphSnapshot {
    let nodes = vec![
        Node::new_with(nid("n1"), Position::new(0.0, 0.0), Some(NodeKind::Input), "Intent"),
        Node::new_with(nid("n2"), Position::new(240.0, -40.0), None, "Classifier"),
        Node::new_with(nid("n3"), Position::new(480.0, -40.0), None, "Tool / Agent"),
        Node::new_with(nid("n4"), Position::new(720.0, 0.0), Some(NodeKind::Output), "Output"),
    ];

    let edges = vec![
        Edge::new(eid("e1-2"), nid("n1"), nid("n2")),
        Edge::new(eid("e2-3"), nid("n2"), nid("n3")),
        Edge::new(eid("e3-4"), nid("n3"), nid("n4")),
    ];

    GraphSnapshot::new(nodes, edges)
}
