// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Canvas preferences persistence.
//!
//! A small configuration record that survives across sessions; each field
//! falls back to its default when absent from the file, and a missing file
//! yields the defaults wholesale. History and selection are excluded by
//! construction.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{write_atomic, StoreError};
use crate::model::EdgeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub snap: bool,
    pub grid: [u16; 2],
    pub line_type: EdgeKind,
    pub show_minimap: bool,
    pub show_controls: bool,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            snap: true,
            grid: [16, 16],
            line_type: EdgeKind::SmoothStep,
            show_minimap: true,
            show_controls: true,
            theme: Theme::Light,
        }
    }
}

impl Preferences {
    pub fn toggle_snap(&mut self) {
        self.snap = !self.snap;
    }

    pub fn toggle_minimap(&mut self) {
        self.show_minimap = !self.show_minimap;
    }

    pub fn toggle_controls(&mut self) {
        self.show_controls = !self.show_controls;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Loads preferences; a missing file is not an error and yields defaults.
pub fn load_prefs(path: &Path) -> Result<Preferences, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Ok(Preferences::default())
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let prefs_json: PrefsJson =
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    prefs_from_json(prefs_json)
}

pub fn save_prefs(path: &Path, prefs: &Preferences) -> Result<(), StoreError> {
    let prefs_json = prefs_to_json(prefs);
    let mut contents =
        serde_json::to_string_pretty(&prefs_json).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    contents.push('\n');
    write_atomic(path, contents.as_bytes())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsJson {
    #[serde(default = "default_true")]
    snap: bool,
    #[serde(default = "default_grid")]
    grid: [u16; 2],
    #[serde(default = "default_line_type")]
    line_type: String,
    #[serde(default = "default_true")]
    show_minimap: bool,
    #[serde(default = "default_true")]
    show_controls: bool,
    #[serde(default)]
    theme: Theme,
}

fn default_true() -> bool {
    true
}

fn default_grid() -> [u16; 2] {
    [16, 16]
}

fn default_line_type() -> String {
    EdgeKind::SmoothStep.as_str().to_owned()
}

fn prefs_to_json(prefs: &Preferences) -> PrefsJson {
    PrefsJson {
        snap: prefs.snap,
        grid: prefs.grid,
        line_type: prefs.line_type.as_str().to_owned(),
        show_minimap: prefs.show_minimap,
        show_controls: prefs.show_controls,
        theme: prefs.theme,
    }
}

fn prefs_from_json(prefs_json: PrefsJson) -> Result<Preferences, StoreError> {
    let line_type = prefs_json
        .line_type
        .parse()
        .map_err(|source| StoreError::UnknownKind {
            field: "line_type",
            source,
        })?;

    Ok(Preferences {
        snap: prefs_json.snap,
        grid: prefs_json.grid,
        line_type,
        show_minimap: prefs_json.show_minimap,
        show_controls: prefs_json.show_controls,
        theme: prefs_json.theme,
    })
}
