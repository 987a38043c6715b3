// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use super::{ApplyMode, EditError, Editor, EdgePatch, NodePatch, PatchOutcome, PositionPatch};
use crate::model::fixtures::demo_graph;
use crate::model::{Edge, EdgeId, EdgeKind, Node, NodeId, NodeKind, Position};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

#[test]
fn live_patch_updates_graph_without_history() {
    let mut editor = Editor::new(demo_graph());

    let outcome = editor.patch_node(&nid("n1"), &NodePatch::label("x"), ApplyMode::Live);

    assert_eq!(outcome, PatchOutcome::Applied);
    assert_eq!(editor.graph().node(&nid("n1")).and_then(Node::label), Some("x"));
    assert_eq!(editor.history().past_len(), 0);
    assert!(!editor.history().can_undo());
}

#[test]
fn commit_patch_records_one_undoable_step() {
    let mut editor = Editor::new(demo_graph());

    editor.patch_node(&nid("n1"), &NodePatch::label("x"), ApplyMode::Commit);

    assert_eq!(editor.history().past_len(), 1);
    assert!(editor.undo());
    assert_eq!(
        editor.graph().node(&nid("n1")).and_then(Node::label),
        Some("Intent")
    );
}

#[test]
fn typing_live_then_committing_same_value_is_one_step() {
    let mut editor = Editor::new(demo_graph());

    // Every keystroke previews live; only the final blur commits.
    for draft in ["I", "In", "Int", "Final"] {
        editor.patch_node(&nid("n1"), &NodePatch::label(draft), ApplyMode::Live);
        assert_eq!(editor.history().past_len(), 0);
    }
    editor.patch_node(&nid("n1"), &NodePatch::label("Final"), ApplyMode::Commit);
    assert_eq!(editor.history().past_len(), 1);

    // A blur that re-commits the unchanged value adds nothing.
    editor.patch_node(&nid("n1"), &NodePatch::label("Final"), ApplyMode::Commit);
    assert_eq!(editor.history().past_len(), 1);
}

#[test]
fn committing_the_initial_state_back_is_a_no_op() {
    let mut editor = Editor::new(demo_graph());

    editor.patch_node(&nid("n1"), &NodePatch::label("Intent"), ApplyMode::Live);
    editor.patch_node(&nid("n1"), &NodePatch::label("Intent"), ApplyMode::Commit);

    // Label already was "Intent", so the fingerprint never changed.
    assert_eq!(editor.history().past_len(), 0);
}

#[test]
fn patch_miss_is_benign() {
    let mut editor = Editor::new(demo_graph());

    let outcome = editor.patch_node(&nid("ghost"), &NodePatch::label("x"), ApplyMode::Commit);

    assert_eq!(outcome, PatchOutcome::NoMatch);
    assert_eq!(editor.graph(), &demo_graph());
    assert_eq!(editor.history().past_len(), 0);
}

#[test]
fn commit_mode_patch_miss_still_checkpoints_pending_live_edits() {
    let mut editor = Editor::new(demo_graph());

    editor.patch_node(&nid("n1"), &NodePatch::label("pending"), ApplyMode::Live);
    editor.patch_node(&nid("ghost"), &NodePatch::default(), ApplyMode::Commit);

    assert_eq!(editor.history().past_len(), 1);
}

#[test]
fn data_merge_preserves_unrelated_attributes() {
    let mut editor = Editor::new(demo_graph());
    editor.patch_node(
        &nid("n2"),
        &NodePatch {
            data: [("color".to_owned(), "red".to_owned())].into_iter().collect(),
            ..NodePatch::default()
        },
        ApplyMode::Commit,
    );

    editor.patch_node(&nid("n2"), &NodePatch::label("Router"), ApplyMode::Commit);

    let node = editor.graph().node(&nid("n2")).expect("n2 present");
    assert_eq!(node.label(), Some("Router"));
    assert_eq!(node.data().get("color").map(String::as_str), Some("red"));
}

#[test]
fn position_merge_is_field_by_field() {
    let mut editor = Editor::new(demo_graph());

    editor.patch_node(
        &nid("n2"),
        &NodePatch {
            position: Some(PositionPatch {
                x: Some(300.0),
                y: None,
            }),
            ..NodePatch::default()
        },
        ApplyMode::Commit,
    );

    let node = editor.graph().node(&nid("n2")).expect("n2 present");
    assert_eq!(node.position(), Position::new(300.0, -40.0));
}

#[test]
fn kind_patch_leaves_other_fields_alone() {
    let mut editor = Editor::new(demo_graph());

    editor.patch_node(
        &nid("n2"),
        &NodePatch {
            kind: Some(NodeKind::Output),
            ..NodePatch::default()
        },
        ApplyMode::Commit,
    );

    let node = editor.graph().node(&nid("n2")).expect("n2 present");
    assert_eq!(node.kind(), Some(NodeKind::Output));
    assert_eq!(node.label(), Some("Classifier"));
    assert_eq!(node.position(), Position::new(240.0, -40.0));
}

#[test]
fn edge_patch_retargets_and_rekinds() {
    let mut editor = Editor::new(demo_graph());

    let outcome = editor.patch_edge(
        &eid("e1-2"),
        &EdgePatch {
            target: Some(nid("n3")),
            kind: Some(EdgeKind::Bezier),
            ..EdgePatch::default()
        },
        ApplyMode::Commit,
    );

    assert_eq!(outcome, PatchOutcome::Applied);
    let edge = editor.graph().edge(&eid("e1-2")).expect("edge present");
    assert_eq!(edge.target(), &nid("n3"));
    assert_eq!(edge.kind(), Some(EdgeKind::Bezier));
    assert_eq!(editor.history().past_len(), 1);
}

#[test]
fn edge_patch_accepts_dangling_endpoint() {
    let mut editor = Editor::new(demo_graph());

    let outcome = editor.patch_edge(
        &eid("e1-2"),
        &EdgePatch {
            target: Some(nid("nowhere")),
            ..EdgePatch::default()
        },
        ApplyMode::Commit,
    );

    assert_eq!(outcome, PatchOutcome::Applied);
    assert_eq!(
        editor.graph().edge(&eid("e1-2")).map(Edge::target),
        Some(&nid("nowhere"))
    );
}

#[test]
fn add_node_twice_then_undo_redo_round_trips() {
    let mut editor = Editor::new(demo_graph());

    editor
        .add_node(Node::new_with(nid("n5"), Position::new(80.0, 80.0), None, "Node n5"))
        .expect("add n5");
    editor
        .add_node(Node::new_with(nid("n6"), Position::new(120.0, 80.0), None, "Node n6"))
        .expect("add n6");

    let two_added = editor.graph().clone();

    assert!(editor.undo());
    assert!(editor.graph().contains_node(&nid("n5")));
    assert!(!editor.graph().contains_node(&nid("n6")));

    assert!(editor.redo());
    assert_eq!(editor.graph(), &two_added);
}

#[test]
fn add_node_rejects_duplicate_identity() {
    let mut editor = Editor::new(demo_graph());

    let result = editor.add_node(Node::new(nid("n1"), Position::default()));

    assert_eq!(
        result,
        Err(EditError::NodeAlreadyExists { node_id: nid("n1") })
    );
    assert_eq!(editor.history().past_len(), 0);
}

#[test]
fn remove_node_purges_incident_edges_and_selection() {
    let mut editor = Editor::new(demo_graph());
    editor.selection_mut().select([nid("n2")], [eid("e1-2")]);

    editor.remove_node(&nid("n2")).expect("remove n2");

    assert!(!editor.graph().contains_node(&nid("n2")));
    assert!(!editor.graph().contains_edge(&eid("e1-2")));
    assert!(!editor.graph().contains_edge(&eid("e2-3")));
    assert!(editor.graph().contains_edge(&eid("e3-4")));
    assert!(editor.selection().is_empty());

    // The purge is a single undoable step.
    assert!(editor.undo());
    assert_eq!(editor.graph(), &demo_graph());
}

#[test]
fn remove_edge_is_one_step() {
    let mut editor = Editor::new(demo_graph());

    editor.remove_edge(&eid("e2-3")).expect("remove edge");
    assert!(!editor.graph().contains_edge(&eid("e2-3")));

    assert!(editor.undo());
    assert!(editor.graph().contains_edge(&eid("e2-3")));
}

#[test]
fn remove_missing_entities_error_without_state_change() {
    let mut editor = Editor::new(demo_graph());

    assert_eq!(
        editor.remove_node(&nid("ghost")),
        Err(EditError::NodeNotFound { node_id: nid("ghost") })
    );
    assert_eq!(
        editor.remove_edge(&eid("ghost")),
        Err(EditError::EdgeNotFound { edge_id: eid("ghost") })
    );
    assert_eq!(editor.graph(), &demo_graph());
    assert_eq!(editor.history().past_len(), 0);
}

#[test]
fn replace_graph_commits_and_prunes_selection() {
    let mut editor = Editor::new(demo_graph());
    editor.selection_mut().select_node(nid("n4"));

    let replacement = crate::model::GraphSnapshot::new(
        vec![Node::new_with(nid("solo"), Position::default(), None, "Solo")],
        Vec::new(),
    );
    editor.replace_graph(replacement.clone());

    assert_eq!(editor.graph(), &replacement);
    assert!(editor.selection().is_empty());
    assert!(editor.undo());
    assert_eq!(editor.graph(), &demo_graph());
}

#[test]
fn undo_redo_prune_selection_against_restored_graph() {
    let mut editor = Editor::new(demo_graph());
    editor
        .add_node(Node::new_with(nid("n5"), Position::default(), None, "Node n5"))
        .expect("add n5");
    editor.selection_mut().select_node(nid("n5"));

    assert!(editor.undo());
    assert!(editor.selection().is_empty());
}

#[test]
fn undo_redo_signal_when_nothing_to_do() {
    let mut editor = Editor::new(demo_graph());
    assert!(!editor.undo());
    assert!(!editor.redo());
}
