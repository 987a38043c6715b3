// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

use crate::model::GraphSnapshot;

/// Separator between fields inside one entity tuple.
const FIELD_SEP: char = ':';
/// Separator between entity tuples.
const ENTITY_SEP: char = '|';
/// Separator between the node half and the edge half.
const HALF_SEP: &str = "//";

/// Derives a compact, order-sensitive identity string for a snapshot.
///
/// Two snapshots produce the same fingerprint iff their nodes (in sequence
/// order) agree on id, rounded position, kind and label, and their edges (in
/// sequence order) agree on id, endpoints and kind. Positions are rounded to
/// the nearest integer first, so sub-pixel jitter from drag interactions does
/// not defeat commit deduplication.
///
/// Id validation guarantees the separator characters cannot occur inside
/// identities. No cryptographic property is intended; collisions over the
/// remaining free-form field (the label) are accepted as negligible for
/// interactive session sizes.
pub fn fingerprint(snapshot: &GraphSnapshot) -> String {
    let mut out = String::with_capacity(
        snapshot.nodes().len().saturating_mul(24) + snapshot.edges().len().saturating_mul(16) + 2,
    );
    let mut coords = itoa::Buffer::new();

    for (index, node) in snapshot.nodes().iter().enumerate() {
        if index > 0 {
            out.push(ENTITY_SEP);
        }
        out.push_str(node.node_id().as_str());
        out.push(FIELD_SEP);
        out.push_str(coords.format(round_coord(node.position().x)));
        out.push(FIELD_SEP);
        out.push_str(coords.format(round_coord(node.position().y)));
        out.push(FIELD_SEP);
        if let Some(kind) = node.kind() {
            out.push_str(kind.as_str());
        }
        out.push(FIELD_SEP);
        if let Some(label) = node.label() {
            out.push_str(label);
        }
    }

    out.push_str(HALF_SEP);

    for (index, edge) in snapshot.edges().iter().enumerate() {
        if index > 0 {
            out.push(ENTITY_SEP);
        }
        out.push_str(edge.edge_id().as_str());
        out.push(FIELD_SEP);
        out.push_str(edge.source().as_str());
        out.push_str("->");
        out.push_str(edge.target().as_str());
        out.push(FIELD_SEP);
        if let Some(kind) = edge.kind() {
            out.push_str(kind.as_str());
        }
    }

    out
}

/// Rounds half away from zero, clamping non-finite values to zero.
fn round_coord(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
