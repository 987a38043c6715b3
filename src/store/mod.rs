// SPDX-FileCopyrightText: 2026 Flowboard contributors
// SPDX-License-Identifier: MIT

//! Persistence for graphs and preferences on disk.
//!
//! Two independent JSON documents: the graph file (`{ "nodes": [...],
//! "edges": [...] }`) and the preferences file. History and selection are
//! session-scoped and never persisted. Malformed input is rejected at this
//! boundary and never reaches the core; a failed load leaves all in-memory
//! state untouched.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{IdError, UnknownKindError};

pub mod graph_file;
pub mod prefs_file;

pub use graph_file::{load_graph, load_graph_if_exists, save_graph};
pub use prefs_file::{load_prefs, save_prefs, Preferences, Theme};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    UnknownKind {
        field: &'static str,
        source: UnknownKindError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::UnknownKind { field, source } => {
                write!(f, "invalid value for {field}: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::UnknownKind { source, .. } => Some(source),
        }
    }
}

/// Writes a file via temp-file-plus-rename so readers never observe a
/// partially written document.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let Some(file_name) = path.file_name() else {
        return Err(io_err(io::Error::other("path has no file name")));
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp_name = std::ffi::OsString::from(format!(".{nanos}-{}-", std::process::id()));
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = match parent {
        Some(parent) => parent.join(&tmp_name),
        None => PathBuf::from(&tmp_name),
    };

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.flush()?;
        drop(file);
        fs::rename(&tmp_path, path)
    })();

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
