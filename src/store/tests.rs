// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::graph_file::load_graph_if_exists;
use super::{load_graph, load_prefs, save_graph, save_prefs, Preferences, StoreError, Theme};
use crate::model::fixtures::demo_graph;
use crate::model::{EdgeId, EdgeKind, Node, NodeId};
use crate::ops::Editor;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!(
            "flowboard-{prefix}-{}-{nanos}-{counter}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[fixture]
fn tmp() -> TempDir {
    TempDir::new("store")
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

#[rstest]
fn graph_round_trips_through_disk(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    let mut graph = demo_graph();
    graph.edges_mut()[0].set_kind(Some(EdgeKind::Straight));
    graph.edges_mut()[1].set_label("handoff");

    save_graph(&path, &graph).unwrap();
    let loaded = load_graph(&path).unwrap();

    assert_eq!(loaded, graph);
}

#[rstest]
fn saved_document_has_exactly_two_top_level_keys(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    save_graph(&path, &demo_graph()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert!(object["nodes"].is_array());
    assert!(object["edges"].is_array());
    assert_eq!(object["nodes"][0]["id"], "n1");
    assert_eq!(object["nodes"][0]["type"], "input");
    assert_eq!(object["nodes"][0]["data"]["label"], "Intent");
}

#[rstest]
fn load_rejects_document_without_graph_shape(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(&path, r#"{"foo": 1}"#).unwrap();

    let err = load_graph(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }), "{err}");
}

#[rstest]
fn load_rejects_non_array_nodes(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(&path, r#"{"nodes": 7, "edges": []}"#).unwrap();

    let err = load_graph(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }), "{err}");
}

#[rstest]
fn load_rejects_invalid_entity_id(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(
        &path,
        r#"{"nodes": [{"id": "a|b", "position": {"x": 0, "y": 0}}], "edges": []}"#,
    )
    .unwrap();

    let err = load_graph(&path).unwrap_err();
    assert!(
        matches!(err, StoreError::InvalidId { field: "nodes[].id", .. }),
        "{err}"
    );
}

#[rstest]
fn load_rejects_unknown_kind(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(
        &path,
        r#"{"nodes": [], "edges": [{"id": "e1", "source": "a", "target": "b", "type": "zigzag"}]}"#,
    )
    .unwrap();

    let err = load_graph(&path).unwrap_err();
    assert!(
        matches!(err, StoreError::UnknownKind { field: "edges[].type", .. }),
        "{err}"
    );
}

#[rstest]
fn load_ignores_unknown_record_keys(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(
        &path,
        r#"{
            "nodes": [{"id": "n1", "position": {"x": 1.5, "y": 2.0}, "draggable": true}],
            "edges": [{"id": "e1", "source": "n1", "target": "n1", "markerEnd": {"type": "arrowclosed"}}]
        }"#,
    )
    .unwrap();

    let loaded = load_graph(&path).unwrap();
    assert_eq!(loaded.nodes().len(), 1);
    assert_eq!(loaded.edges().len(), 1);
    assert_eq!(loaded.nodes()[0].kind(), None);
}

#[rstest]
fn failed_load_leaves_editor_state_untouched(tmp: TempDir) {
    let path = tmp.path().join("graph.json");
    std::fs::write(&path, r#"{"foo": 1}"#).unwrap();

    let mut editor = Editor::new(demo_graph());
    editor.selection_mut().select_node(nid("n1"));
    editor
        .add_node(Node::new(nid("n5"), crate::model::Position::default()))
        .unwrap();

    // The boundary contract: only apply the replacement after a clean parse.
    if let Ok(graph) = load_graph(&path) {
        editor.replace_graph(graph);
    }

    assert!(editor.graph().contains_node(&nid("n5")));
    assert!(editor.graph().contains_edge(&eid("e1-2")));
    assert!(editor.selection().contains_node(&nid("n1")));
    assert_eq!(editor.history().past_len(), 1);
}

#[rstest]
fn load_if_exists_distinguishes_missing_from_malformed(tmp: TempDir) {
    let missing = tmp.path().join("absent.json");
    assert!(load_graph_if_exists(&missing).unwrap().is_none());

    let malformed = tmp.path().join("bad.json");
    std::fs::write(&malformed, "not json").unwrap();
    assert!(load_graph_if_exists(&malformed).is_err());
}

#[rstest]
fn prefs_round_trip(tmp: TempDir) {
    let path = tmp.path().join("prefs.json");
    let prefs = Preferences {
        snap: false,
        grid: [8, 8],
        line_type: EdgeKind::Straight,
        show_minimap: false,
        show_controls: true,
        theme: Theme::Dark,
    };

    save_prefs(&path, &prefs).unwrap();
    assert_eq!(load_prefs(&path).unwrap(), prefs);
}

#[rstest]
fn prefs_missing_file_yields_defaults(tmp: TempDir) {
    let path = tmp.path().join("absent-prefs.json");
    assert_eq!(load_prefs(&path).unwrap(), Preferences::default());
}

#[rstest]
fn prefs_partial_document_falls_back_per_field(tmp: TempDir) {
    let path = tmp.path().join("prefs.json");
    std::fs::write(&path, r#"{"snap": false, "theme": "dark"}"#).unwrap();

    let prefs = load_prefs(&path).unwrap();
    assert!(!prefs.snap);
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.grid, [16, 16]);
    assert_eq!(prefs.line_type, EdgeKind::SmoothStep);
    assert!(prefs.show_minimap);
    assert!(prefs.show_controls);
}

#[rstest]
fn prefs_reject_unknown_line_type(tmp: TempDir) {
    let path = tmp.path().join("prefs.json");
    std::fs::write(&path, r#"{"line_type": "zigzag"}"#).unwrap();

    let err = load_prefs(&path).unwrap_err();
    assert!(
        matches!(err, StoreError::UnknownKind { field: "line_type", .. }),
        "{err}"
    );
}
