// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! A deliberately thin shell over the editor core (ratatui + crossterm):
//! node/edge list panes plus an inspector, not a spatial canvas. All key
//! handling runs synchronously to completion before the next event is read,
//! so commit/undo/redo are strictly serialized in event order.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::{Edge, EdgeId, EdgeKind, Node, NodeId, NodeKind, Position};
use crate::ops::{ApplyMode, Editor, EdgePatch, NodePatch};
use crate::store::{load_graph, save_graph, Preferences, Theme};

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the interactive shell. Returns the (possibly toggled) preferences so
/// the caller can persist them on the way out.
pub fn run(
    editor: Editor,
    prefs: Preferences,
    graph_path: Option<PathBuf>,
) -> Result<Preferences, Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(editor, prefs, graph_path);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(app.prefs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Nodes,
    Edges,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditTarget {
    Node(NodeId),
    Edge(EdgeId),
}

/// In-flight inline label edit. Every keystroke patches the live graph
/// without committing; Enter records one history step; Esc restores the
/// pre-edit label.
#[derive(Debug, Clone)]
struct LabelEdit {
    target: EditTarget,
    draft: String,
    original: String,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    editor: Editor,
    prefs: Preferences,
    graph_path: Option<PathBuf>,
    pane: Pane,
    node_cursor: usize,
    edge_cursor: usize,
    edit: Option<LabelEdit>,
    next_node_seq: u64,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(editor: Editor, prefs: Preferences, graph_path: Option<PathBuf>) -> Self {
        let next_node_seq = editor.graph().nodes().len() as u64 + 1;
        Self {
            editor,
            prefs,
            graph_path,
            pane: Pane::Nodes,
            node_cursor: 0,
            edge_cursor: 0,
            edit: None,
            next_node_seq,
            toast: None,
            should_quit: false,
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn toast_line(&mut self) -> Option<String> {
        match &self.toast {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            Some(_) => {
                self.toast = None;
                None
            }
            None => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.edit.is_some() {
            self.handle_edit_key(key);
            return;
        }
        self.handle_browse_key(key);
    }

    /// Key handling while the label editor has focus. Undo/redo chords are
    /// deliberately not recognized here: shortcuts are suppressed while an
    /// editable text field owns the keyboard.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.finish_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Backspace => {
                if let Some(edit) = &mut self.edit {
                    edit.draft.pop();
                }
                self.apply_draft(ApplyMode::Live);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(edit) = &mut self.edit {
                    edit.draft.push(ch);
                }
                self.apply_draft(ApplyMode::Live);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('z') | KeyCode::Char('Z') if ctrl && shift => self.redo(),
            KeyCode::Char('z') if ctrl => self.undo(),
            KeyCode::Char('y') if ctrl => self.redo(),
            KeyCode::Up if ctrl => self.nudge_selected(0.0, -1.0),
            KeyCode::Down if ctrl => self.nudge_selected(0.0, 1.0),
            KeyCode::Left if ctrl => self.nudge_selected(-1.0, 0.0),
            KeyCode::Right if ctrl => self.nudge_selected(1.0, 0.0),
            KeyCode::Up => self.move_cursor(-1, shift),
            KeyCode::Down => self.move_cursor(1, shift),
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Nodes => Pane::Edges,
                    Pane::Edges => Pane::Nodes,
                };
            }
            KeyCode::Esc => self.editor.selection_mut().clear(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('a') => self.add_node(),
            KeyCode::Char('c') => self.connect_selected(shift),
            KeyCode::Char('C') => self.connect_selected(true),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('t') => self.cycle_node_kind(),
            KeyCode::Char('y') => self.cycle_edge_kind(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('l') => self.reload(),
            KeyCode::Char('g') => {
                self.prefs.toggle_snap();
                self.set_toast(format!("Snap: {}", if self.prefs.snap { "on" } else { "off" }));
            }
            KeyCode::Char('m') => self.prefs.toggle_minimap(),
            KeyCode::Char('o') => self.prefs.toggle_controls(),
            KeyCode::Char('T') => self.prefs.toggle_theme(),
            _ => {}
        }
    }

    fn cursor_node_id(&self) -> Option<NodeId> {
        self.editor
            .graph()
            .nodes()
            .get(self.node_cursor)
            .map(|node| node.node_id().clone())
    }

    fn cursor_edge_id(&self) -> Option<EdgeId> {
        self.editor
            .graph()
            .edges()
            .get(self.edge_cursor)
            .map(|edge| edge.edge_id().clone())
    }

    /// Moves the cursor in the focused pane. A plain move replaces the
    /// selection with the entity under the cursor; a Shift-move extends it,
    /// mirroring modifier-held clicks on a canvas.
    fn move_cursor(&mut self, delta: i64, extend: bool) {
        let len = match self.pane {
            Pane::Nodes => self.editor.graph().nodes().len(),
            Pane::Edges => self.editor.graph().edges().len(),
        };
        if len == 0 {
            return;
        }

        let cursor = match self.pane {
            Pane::Nodes => &mut self.node_cursor,
            Pane::Edges => &mut self.edge_cursor,
        };
        *cursor = (*cursor as i64 + delta).rem_euclid(len as i64) as usize;

        match self.pane {
            Pane::Nodes => {
                if let Some(node_id) = self.cursor_node_id() {
                    if extend {
                        self.editor.selection_mut().extend_node(node_id);
                    } else {
                        self.editor.selection_mut().select_node(node_id);
                    }
                }
            }
            Pane::Edges => {
                if let Some(edge_id) = self.cursor_edge_id() {
                    if extend {
                        self.editor.selection_mut().extend_edge(edge_id);
                    } else {
                        self.editor.selection_mut().select_edge(edge_id);
                    }
                }
            }
        }
    }

    fn start_edit(&mut self) {
        let target = match self.pane {
            Pane::Nodes => {
                let selected = self.editor.selection().nodes();
                if selected.len() != 1 {
                    self.set_toast("Select exactly one node to edit");
                    return;
                }
                let node_id = selected.iter().next().cloned();
                node_id.map(EditTarget::Node)
            }
            Pane::Edges => {
                let selected = self.editor.selection().edges();
                if selected.len() != 1 {
                    self.set_toast("Select exactly one edge to edit");
                    return;
                }
                let edge_id = selected.iter().next().cloned();
                edge_id.map(EditTarget::Edge)
            }
        };
        let Some(target) = target else {
            return;
        };

        let original = match &target {
            EditTarget::Node(node_id) => self
                .editor
                .graph()
                .node(node_id)
                .and_then(Node::label)
                .unwrap_or_default()
                .to_owned(),
            EditTarget::Edge(edge_id) => self
                .editor
                .graph()
                .edge(edge_id)
                .and_then(Edge::label)
                .unwrap_or_default()
                .to_owned(),
        };

        self.edit = Some(LabelEdit {
            target,
            draft: original.clone(),
            original,
        });
    }

    fn apply_draft(&mut self, mode: ApplyMode) {
        let Some(edit) = &self.edit else {
            return;
        };
        let draft = edit.draft.clone();
        match edit.target.clone() {
            EditTarget::Node(node_id) => {
                self.editor.patch_node(&node_id, &NodePatch::label(draft), mode);
            }
            EditTarget::Edge(edge_id) => {
                self.editor.patch_edge(&edge_id, &EdgePatch::label(draft), mode);
            }
        }
    }

    /// One history step for the whole editing interaction.
    fn finish_edit(&mut self) {
        self.apply_draft(ApplyMode::Commit);
        self.edit = None;
    }

    /// Restores the pre-edit label without touching history.
    fn cancel_edit(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.draft = edit.original.clone();
        }
        self.apply_draft(ApplyMode::Live);
        self.edit = None;
    }

    fn undo(&mut self) {
        if !self.editor.undo() {
            self.set_toast("Nothing to undo");
        }
    }

    fn redo(&mut self) {
        if !self.editor.redo() {
            self.set_toast("Nothing to redo");
        }
    }

    fn free_node_id(&mut self) -> NodeId {
        loop {
            let candidate = format!("n{}", self.next_node_seq);
            self.next_node_seq += 1;
            match NodeId::new(candidate) {
                Ok(node_id) if !self.editor.graph().contains_node(&node_id) => return node_id,
                _ => continue,
            }
        }
    }

    fn add_node(&mut self) {
        let node_id = self.free_node_id();
        let index = self.editor.graph().nodes().len() as f64;
        let mut position = Position::new(80.0 + index * 40.0, 80.0 + index * 24.0);
        if self.prefs.snap {
            position = snap_position(position, self.prefs.grid);
        }

        let label = format!("Node {node_id}");
        match self.editor.add_node(Node::new_with(node_id.clone(), position, None, label)) {
            Ok(()) => {
                self.node_cursor = self.editor.graph().nodes().len().saturating_sub(1);
                self.editor.selection_mut().select_node(node_id);
            }
            Err(err) => self.set_toast(err.to_string()),
        }
    }

    /// Connects the two selected nodes in selection order. The edge takes the
    /// preferred line type; holding Shift forces a straight edge, like
    /// Shift-dragging a connection on the canvas.
    fn connect_selected(&mut self, straight: bool) {
        let selected = self.editor.selection().nodes().iter().cloned().collect::<Vec<_>>();
        let [source, target] = selected.as_slice() else {
            self.set_toast("Select exactly two nodes to connect");
            return;
        };

        let kind = if straight {
            EdgeKind::Straight
        } else {
            self.prefs.line_type
        };
        let raw_id = format!("e{source}-{target}");
        let edge_id = match EdgeId::new(raw_id) {
            Ok(edge_id) => edge_id,
            Err(err) => {
                self.set_toast(err.to_string());
                return;
            }
        };

        let edge = Edge::new_with(edge_id, source.clone(), target.clone(), Some(kind));
        if let Err(err) = self.editor.add_edge(edge) {
            self.set_toast(err.to_string());
        }
    }

    fn delete_selected(&mut self) {
        let nodes = self.editor.selection().nodes().iter().cloned().collect::<Vec<_>>();
        let edges = self.editor.selection().edges().iter().cloned().collect::<Vec<_>>();
        if nodes.is_empty() && edges.is_empty() {
            self.set_toast("Nothing selected");
            return;
        }

        for edge_id in edges {
            // Incident edges may already be gone from an earlier node purge.
            if self.editor.graph().contains_edge(&edge_id) {
                if let Err(err) = self.editor.remove_edge(&edge_id) {
                    self.set_toast(err.to_string());
                }
            }
        }
        for node_id in nodes {
            if let Err(err) = self.editor.remove_node(&node_id) {
                self.set_toast(err.to_string());
            }
        }

        self.node_cursor = self.node_cursor.min(self.editor.graph().nodes().len().saturating_sub(1));
        self.edge_cursor = self.edge_cursor.min(self.editor.graph().edges().len().saturating_sub(1));
    }

    fn cycle_node_kind(&mut self) {
        let selected = self.editor.selection().nodes().iter().cloned().collect::<Vec<_>>();
        let [node_id] = selected.as_slice() else {
            self.set_toast("Select exactly one node");
            return;
        };

        let next = match self.editor.graph().node(node_id).and_then(Node::kind) {
            None | Some(NodeKind::Output) => NodeKind::Default,
            Some(NodeKind::Default) => NodeKind::Input,
            Some(NodeKind::Input) => NodeKind::Output,
        };
        self.editor.patch_node(
            node_id,
            &NodePatch {
                kind: Some(next),
                ..NodePatch::default()
            },
            ApplyMode::Commit,
        );
    }

    fn cycle_edge_kind(&mut self) {
        let selected = self.editor.selection().edges().iter().cloned().collect::<Vec<_>>();
        let [edge_id] = selected.as_slice() else {
            self.set_toast("Select exactly one edge");
            return;
        };

        let next = match self.editor.graph().edge(edge_id).and_then(Edge::kind) {
            None | Some(EdgeKind::Bezier) => EdgeKind::SmoothStep,
            Some(EdgeKind::SmoothStep) => EdgeKind::Straight,
            Some(EdgeKind::Straight) => EdgeKind::Bezier,
        };
        self.editor.patch_edge(
            edge_id,
            &EdgePatch {
                kind: Some(next),
                ..EdgePatch::default()
            },
            ApplyMode::Commit,
        );
    }

    /// Nudges every selected node one grid step (or one pixel with snap off).
    /// Each nudge is a discrete commit: the keypress is the drag-end.
    fn nudge_selected(&mut self, dx: f64, dy: f64) {
        let selected = self.editor.selection().nodes().iter().cloned().collect::<Vec<_>>();
        if selected.is_empty() {
            self.set_toast("No nodes selected");
            return;
        }

        let [step_x, step_y] = if self.prefs.snap {
            [f64::from(self.prefs.grid[0]), f64::from(self.prefs.grid[1])]
        } else {
            [1.0, 1.0]
        };

        for node_id in selected {
            let Some(current) = self.editor.graph().node(&node_id).map(Node::position) else {
                continue;
            };
            let mut next = Position::new(current.x + dx * step_x, current.y + dy * step_y);
            if self.prefs.snap {
                next = snap_position(next, self.prefs.grid);
            }
            self.editor
                .patch_node(&node_id, &NodePatch::position(next.x, next.y), ApplyMode::Commit);
        }
    }

    fn save(&mut self) {
        let Some(path) = self.graph_path.clone() else {
            self.set_toast("No graph file; pass a path on the command line");
            return;
        };
        match save_graph(&path, self.editor.graph()) {
            Ok(()) => self.set_toast(format!("Saved {}", path.display())),
            Err(err) => self.set_toast(format!("Save failed: {err}")),
        }
    }

    /// Reloads the graph file. A malformed document is surfaced as a toast
    /// and leaves the live graph, history and selection exactly as they were.
    fn reload(&mut self) {
        let Some(path) = self.graph_path.clone() else {
            self.set_toast("No graph file; pass a path on the command line");
            return;
        };
        match load_graph(&path) {
            Ok(graph) => {
                self.editor.replace_graph(graph);
                self.node_cursor = 0;
                self.edge_cursor = 0;
                self.set_toast(format!("Loaded {}", path.display()));
            }
            Err(err) => self.set_toast(format!("Load failed: {err}")),
        }
    }
}

fn snap_position(position: Position, grid: [u16; 2]) -> Position {
    let gx = f64::from(grid[0].max(1));
    let gy = f64::from(grid[1].max(1));
    Position::new((position.x / gx).round() * gx, (position.y / gy).round() * gy)
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let base_style = match app.prefs.theme {
        Theme::Light => Style::default(),
        Theme::Dark => Style::default().fg(Color::Gray),
    };

    let footer_height = u16::from(app.prefs.show_controls);
    let overview_height = u16::from(app.prefs.show_minimap);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(overview_height),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());
    let main_area = layout[0];
    let overview_area = layout[1];
    let footer_area = layout[2];

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(32),
            Constraint::Percentage(36),
        ])
        .split(main_area);

    draw_node_pane(frame, app, panes[0], base_style);
    draw_edge_pane(frame, app, panes[1], base_style);
    draw_inspector(frame, app, panes[2], base_style);

    if app.prefs.show_minimap {
        let graph = app.editor.graph();
        let overview = format!(
            " {} nodes · {} edges · snap {} [{}x{}] · line {} · undo {} · redo {}",
            graph.nodes().len(),
            graph.edges().len(),
            if app.prefs.snap { "on" } else { "off" },
            app.prefs.grid[0],
            app.prefs.grid[1],
            app.prefs.line_type,
            app.editor.history().past_len(),
            app.editor.history().future_len(),
        );
        frame.render_widget(
            Paragraph::new(overview).style(base_style.fg(FOOTER_LABEL_COLOR)),
            overview_area,
        );
    }

    if app.prefs.show_controls {
        frame.render_widget(footer_paragraph(app, base_style), footer_area);
    }
}

fn draw_node_pane(frame: &mut Frame<'_>, app: &App, area: Rect, base_style: Style) {
    let items = app
        .editor
        .graph()
        .nodes()
        .iter()
        .map(|node| {
            let marker = if app.editor.selection().contains_node(node.node_id()) {
                "*"
            } else {
                " "
            };
            let kind = node.kind().map(NodeKind::as_str).unwrap_or("-");
            let position = node.position();
            ListItem::new(format!(
                "{marker} {}  [{kind}]  ({:.0},{:.0})  {}",
                node.node_id(),
                position.x,
                position.y,
                node.label().unwrap_or(""),
            ))
        })
        .collect::<Vec<_>>();

    let focused = app.pane == Pane::Nodes && app.edit.is_none();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Nodes")
        .border_style(if focused {
            base_style.fg(FOCUS_COLOR)
        } else {
            base_style
        });

    let mut state = ListState::default();
    state.select(Some(app.node_cursor.min(items.len().saturating_sub(1))));
    let list = List::new(items)
        .block(block)
        .style(base_style)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_edge_pane(frame: &mut Frame<'_>, app: &App, area: Rect, base_style: Style) {
    let items = app
        .editor
        .graph()
        .edges()
        .iter()
        .map(|edge| {
            let marker = if app.editor.selection().contains_edge(edge.edge_id()) {
                "*"
            } else {
                " "
            };
            let kind = edge.kind().map(EdgeKind::as_str).unwrap_or("-");
            ListItem::new(format!(
                "{marker} {}  {} -> {}  [{kind}]  {}",
                edge.edge_id(),
                edge.source(),
                edge.target(),
                edge.label().unwrap_or(""),
            ))
        })
        .collect::<Vec<_>>();

    let focused = app.pane == Pane::Edges && app.edit.is_none();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Edges")
        .border_style(if focused {
            base_style.fg(FOCUS_COLOR)
        } else {
            base_style
        });

    let mut state = ListState::default();
    state.select(Some(app.edge_cursor.min(items.len().saturating_sub(1))));
    let list = List::new(items)
        .block(block)
        .style(base_style)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_inspector(frame: &mut Frame<'_>, app: &App, area: Rect, base_style: Style) {
    let mut lines = Vec::<Line<'_>>::new();

    if let Some(edit) = &app.edit {
        let target = match &edit.target {
            EditTarget::Node(node_id) => format!("node {node_id}"),
            EditTarget::Edge(edge_id) => format!("edge {edge_id}"),
        };
        lines.push(Line::from(format!("Editing label of {target}")));
        lines.push(Line::from(format!("> {}_", edit.draft)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter commit · Esc cancel",
            Style::default().fg(FOOTER_LABEL_COLOR),
        )));
    } else {
        let selection = app.editor.selection();
        let graph = app.editor.graph();
        let node_id = (selection.nodes().len() == 1)
            .then(|| selection.nodes().iter().next().cloned())
            .flatten();
        let edge_id = (selection.edges().len() == 1)
            .then(|| selection.edges().iter().next().cloned())
            .flatten();

        match (node_id.as_ref().and_then(|id| graph.node(id)), edge_id.as_ref().and_then(|id| graph.edge(id))) {
            (Some(node), _) => {
                lines.push(Line::from(format!("Node: {}", node.node_id())));
                lines.push(Line::from(format!("Label: {}", node.label().unwrap_or(""))));
                lines.push(Line::from(format!(
                    "Type: {}",
                    node.kind().map(NodeKind::as_str).unwrap_or("(unset)")
                )));
                let position = node.position();
                lines.push(Line::from(format!("Position: ({:.1}, {:.1})", position.x, position.y)));
                for (key, value) in node.data() {
                    if key != crate::model::LABEL_ATTR {
                        lines.push(Line::from(format!("{key}: {value}")));
                    }
                }
            }
            (None, Some(edge)) => {
                lines.push(Line::from(format!("Edge: {}", edge.edge_id())));
                lines.push(Line::from(format!("Label: {}", edge.label().unwrap_or(""))));
                lines.push(Line::from(format!(
                    "Type: {}",
                    edge.kind().map(EdgeKind::as_str).unwrap_or("(unset)")
                )));
                lines.push(Line::from(format!("{} -> {}", edge.source(), edge.target())));
            }
            (None, None) => {
                let count = selection.nodes().len() + selection.edges().len();
                if count > 1 {
                    lines.push(Line::from(format!(
                        "{} nodes, {} edges selected",
                        selection.nodes().len(),
                        selection.edges().len()
                    )));
                } else {
                    lines.push(Line::from("No selection."));
                    lines.push(Line::from(Span::styled(
                        "Move with Up/Down; Shift extends.",
                        Style::default().fg(FOOTER_LABEL_COLOR),
                    )));
                }
            }
        }
    }

    let block = Block::default().borders(Borders::ALL).title("Inspector");
    frame.render_widget(Paragraph::new(lines).block(block).style(base_style), area);
}

fn footer_paragraph(app: &mut App, base_style: Style) -> Paragraph<'static> {
    if let Some(message) = app.toast_line() {
        return Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        )))
        .style(base_style);
    }

    let hints: &[(&str, &str)] = if app.edit.is_some() {
        &[("Enter", "commit"), ("Esc", "cancel")]
    } else {
        &[
            ("e", "edit"),
            ("a", "add"),
            ("c", "connect"),
            ("d", "delete"),
            ("t/y", "type"),
            ("^z", "undo"),
            ("^y", "redo"),
            ("s", "save"),
            ("l", "load"),
            ("g", "snap"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (key, label) in hints {
        spans.push(Span::styled(format!("{key} "), Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(
            format!("{label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    Paragraph::new(Line::from(spans)).style(base_style)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
