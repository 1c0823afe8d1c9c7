// src/store.rs
//
// JSON persistence for both datasets. Each file is a pretty-printed array of
// records. Loads and saves are synchronous.
//
// Missing-file policy:
// - teams:        missing → empty list, nothing written
// - eliminations: missing → file created with sample records, then loaded

use std::{fmt, fs, io, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};

use crate::file::ensure_parent;
use crate::model::elimination::{samples, Elimination};
use crate::model::team::Team;

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
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/* ---------------- Generic ---------------- */

/// Read a JSON array. Missing file, blank content or `null` → empty.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logw!("{} not found; starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };

    if text.trim().is_empty() { return Ok(Vec::new()); }

    let records: Option<Vec<T>> = serde_json::from_str(&text).map_err(|source| {
        loge!("Malformed JSON in {}: {source}", path.display());
        StoreError::Json { path: path.to_path_buf(), source }
    })?;
    let records = records.unwrap_or_default();
    logd!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write a pretty JSON array, creating parent directories as needed.
pub fn save_records<T: Serialize>(records: &[T], path: &Path) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io { path: path.to_path_buf(), source };

    ensure_parent(path).map_err(io_err)?;
    let json = serde_json::to_string_pretty(records)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    fs::write(path, json).map_err(io_err)?;

    logf!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/* ---------------- Datasets ---------------- */

pub fn load_teams(path: &Path) -> Result<Vec<Team>, StoreError> {
    load_records(path)
}

pub fn save_teams(teams: &[Team], path: &Path) -> Result<(), StoreError> {
    save_records(teams, path)
}

pub fn load_eliminations(path: &Path) -> Result<Vec<Elimination>, StoreError> {
    if !path.exists() {
        seed_eliminations(path)?;
    }
    load_records(path)
}

pub fn save_eliminations(eliminations: &[Elimination], path: &Path) -> Result<(), StoreError> {
    save_records(eliminations, path)
}

/// Write the sample eliminations to `path`, replacing any existing file.
pub fn seed_eliminations(path: &Path) -> Result<(), StoreError> {
    logf!("Seeding sample eliminations into {}", path.display());
    save_records(&samples(), path)
}
