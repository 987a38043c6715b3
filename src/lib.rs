// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Flowboard — terminal node-graph editor with linear undo history.
//!
//! The crate splits into a pure editing core (`model`, `history`, `ops`),
//! a JSON persistence layer (`store`) and a ratatui shell (`tui`).

pub mod history;
pub mod model;
pub mod ops;
pub mod store;
pub mod tui;
