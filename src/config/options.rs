// src/config/options.rs
use std::fmt;
use std::path::{ Path, PathBuf };
use std::str::FromStr;

use super::consts::*;
use crate::file::resolve_data_path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataPaths,
    pub log_path: PathBuf,
    pub team_sort: TeamSort,
    pub elimination_sort: EliminationSort,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            log_path: PathBuf::from(LOG_FILE),
            team_sort: TeamSort::default(),
            elimination_sort: EliminationSort::default(),
        }
    }
}

/// Where each dataset lives. Defaults sit under `DATA_DIR`; either one can be
/// overridden with a user-chosen file (or a directory, which gets the default name).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    dir: PathBuf,
    champions: Option<PathBuf>,
    eliminations: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self { dir: PathBuf::from(DATA_DIR), champions: None, eliminations: None }
    }
}

impl DataPaths {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Self::default() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn champions(&self) -> PathBuf {
        self.champions.clone().unwrap_or_else(|| self.dir.join(CHAMPIONS_FILE))
    }

    pub fn eliminations(&self) -> PathBuf {
        self.eliminations.clone().unwrap_or_else(|| self.dir.join(ELIMINATIONS_FILE))
    }

    /// Apply user text as the champions file. Empty text restores the default.
    pub fn set_champions(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.champions = override_path(text, CHAMPIONS_FILE)?;
        Ok(())
    }

    pub fn set_eliminations(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.eliminations = override_path(text, ELIMINATIONS_FILE)?;
        Ok(())
    }
}

fn override_path(text: &str, default_filename: &str) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let text = text.trim();
    if text.is_empty() { return Ok(None); }
    Ok(Some(resolve_data_path(text, default_filename)?))
}

/* ---------------- Sort criteria ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamSort {
    /// Most titles first. Applied after every load and mutation.
    #[default]
    TitlesDesc,
    TitlesAsc,
    NameAsc,
    NameDesc,
}

impl TeamSort {
    pub const ALL: [TeamSort; 4] = [Self::TitlesDesc, Self::TitlesAsc, Self::NameAsc, Self::NameDesc];

    pub fn key(self) -> &'static str {
        match self {
            Self::TitlesDesc => "titles-desc",
            Self::TitlesAsc  => "titles-asc",
            Self::NameAsc    => "name-asc",
            Self::NameDesc   => "name-desc",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EliminationSort {
    /// Most recent season first.
    #[default]
    SeasonDesc,
    SeasonAsc,
    /// Deepest knockout round first.
    PhaseImportance,
    /// Deepest round first, then most recent season.
    PhaseThenSeason,
}

impl EliminationSort {
    pub const ALL: [EliminationSort; 4] =
        [Self::SeasonDesc, Self::SeasonAsc, Self::PhaseImportance, Self::PhaseThenSeason];

    pub fn key(self) -> &'static str {
        match self {
            Self::SeasonDesc      => "season-desc",
            Self::SeasonAsc       => "season-asc",
            Self::PhaseImportance => "phase",
            Self::PhaseThenSeason => "phase-season",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSort(pub String);

impl fmt::Display for UnknownSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown sort: {}", self.0)
    }
}

impl std::error::Error for UnknownSort {}

impl FromStr for TeamSort {
    type Err = UnknownSort;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.key() == s).ok_or(UnknownSort(s))
    }
}

impl FromStr for EliminationSort {
    type Err = UnknownSort;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.key() == s).ok_or(UnknownSort(s))
    }
}
