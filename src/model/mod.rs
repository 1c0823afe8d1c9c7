// src/model/mod.rs
//! Records and the two dataset models.
//!
//! - `ChampionsModel`: teams in a `CircularList`, kept ordered by title count.
//! - `EliminationsModel`: eliminations on a stack (`Vec`, top = last).
//!
//! Models own their data and their file path. They never print; callers decide
//! how to present results and errors.

use std::fmt;

use crate::store::StoreError;

pub mod champions;
pub mod elimination;
pub mod eliminations;
pub mod navigate;
pub mod team;

pub use champions::{ChampionsModel, ChampionsStats};
pub use elimination::{phase_weight, Elimination};
pub use eliminations::EliminationsModel;
pub use navigate::Navigator;
pub use team::{Team, Title};

#[derive(Debug)]
pub enum ModelError {
    NotFound(String),
    Duplicate(String),
    Store(StoreError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::Duplicate(what) => write!(f, "already exists: {what}"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ModelError {
    fn from(e: StoreError) -> Self { Self::Store(e) }
}
