// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Linear undo/redo history over graph snapshots.
//!
//! The stack holds past/present/future snapshots, deduplicates no-op commits
//! by fingerprint, and bounds retained depth. It is an explicit context object
//! owned by the editor, not a process-wide singleton, so tests construct a
//! fresh instance each.

use std::collections::VecDeque;

use crate::model::GraphSnapshot;

pub mod fingerprint;

pub use fingerprint::fingerprint;

/// Maximum number of retained past snapshots. Eviction drops the oldest entry,
/// preserving recency over total history length.
pub const MAX_DEPTH: usize = 50;

/// Bounded linear history: `past` (oldest first), `present`, `future`
/// (nearest-undo first), with the present fingerprint cached for O(1) no-op
/// detection on commit.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<GraphSnapshot>,
    present: Option<GraphSnapshot>,
    present_fingerprint: String,
    future: VecDeque<GraphSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the stack to a single present snapshot, discarding all prior
    /// history.
    pub fn init(&mut self, snapshot: GraphSnapshot) {
        self.present_fingerprint = fingerprint(&snapshot);
        self.present = Some(snapshot);
        self.past.clear();
        self.future.clear();
    }

    /// Records a snapshot as a new history step.
    ///
    /// A snapshot whose fingerprint equals the cached present fingerprint is
    /// silently absorbed: a drag that ends where it started or a blur after a
    /// no-change edit must not pollute history. Otherwise the current present
    /// moves onto `past` (evicting the oldest entry beyond [`MAX_DEPTH`]),
    /// the snapshot becomes present, and `future` is cleared — a forward edit
    /// invalidates any redo branch.
    ///
    /// Committing before [`History::init`] acts as an implicit init: with no
    /// present, nothing is pushed to `past` and the snapshot simply becomes
    /// the present.
    pub fn commit(&mut self, snapshot: GraphSnapshot) {
        let next_fingerprint = fingerprint(&snapshot);
        if self.present.is_some() && next_fingerprint == self.present_fingerprint {
            return;
        }

        if let Some(present) = self.present.take() {
            self.past.push_back(present);
            while self.past.len() > MAX_DEPTH {
                self.past.pop_front();
            }
        }
        self.present = Some(snapshot);
        self.present_fingerprint = next_fingerprint;
        self.future.clear();
    }

    /// Steps back one committed state.
    ///
    /// Returns the new present (a copy for the caller to apply as the live
    /// graph), or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<GraphSnapshot> {
        let present = self.present.take()?;
        let Some(previous) = self.past.pop_back() else {
            self.present = Some(present);
            return None;
        };

        self.future.push_front(present);
        self.present_fingerprint = fingerprint(&previous);
        self.present = Some(previous.clone());
        Some(previous)
    }

    /// Steps forward one undone state; the mirror of [`History::undo`].
    pub fn redo(&mut self) -> Option<GraphSnapshot> {
        let present = self.present.take()?;
        let Some(next) = self.future.pop_front() else {
            self.present = Some(present);
            return None;
        };

        self.past.push_back(present);
        while self.past.len() > MAX_DEPTH {
            self.past.pop_front();
        }
        self.present_fingerprint = fingerprint(&next);
        self.present = Some(next.clone());
        Some(next)
    }

    /// True iff at least one undo step is available. Exposed for UI
    /// enablement.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True iff at least one redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn present(&self) -> Option<&GraphSnapshot> {
        self.present.as_ref()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}
