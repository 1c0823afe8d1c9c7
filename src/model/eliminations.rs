// src/model/eliminations.rs
//! Knockout eliminations on a stack.
//!
//! Storage order is insertion order (bottom → top); `push`/`pop`/`peek` work on
//! the top. Sorted views never reorder the stack itself.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::config::options::EliminationSort;
use crate::core::merge::merge_sort_by;
use crate::core::sanitize::{contains_folded, fold};
use crate::store::{self, StoreError};

use super::elimination::{phase_weight, Elimination};

pub struct EliminationsModel {
    stack: Vec<Elimination>,
    path: PathBuf,
}

impl EliminationsModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { stack: Vec::new(), path: path.into() }
    }

    pub fn data_path(&self) -> &Path { &self.path }

    pub fn set_data_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Replace the stack with the file contents. A missing file is first
    /// created with sample records.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        self.stack = store::load_eliminations(&self.path)?;
        logf!("Eliminations: {} records from {}", self.stack.len(), self.path.display());
        Ok(self.stack.len())
    }

    pub fn save(&self) -> Result<(), StoreError> {
        store::save_eliminations(&self.stack, &self.path)
    }

    /* ---------------- Stack ---------------- */

    #[inline] pub fn len(&self) -> usize { self.stack.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// Bottom → top.
    pub fn all(&self) -> Vec<Elimination> { self.stack.clone() }

    pub fn get(&self, index: usize) -> Option<&Elimination> { self.stack.get(index) }

    pub fn push(&mut self, e: Elimination) {
        logd!("Eliminations: push {} {} {}", e.season, e.phase, e.opponent);
        self.stack.push(e);
    }

    pub fn pop(&mut self) -> Option<Elimination> { self.stack.pop() }

    pub fn peek(&self) -> Option<&Elimination> { self.stack.last() }

    /// Remove the first entry equal to `e` (same season, phase and opponent).
    pub fn remove(&mut self, e: &Elimination) -> bool {
        match self.stack.iter().position(|x| x == e) {
            Some(ix) => { self.stack.remove(ix); true }
            None => false,
        }
    }

    /// Replace the first entry equal to `old` with `new`, keeping its position.
    pub fn update(&mut self, old: &Elimination, new: Elimination) -> bool {
        match self.stack.iter_mut().find(|x| **x == *old) {
            Some(slot) => { *slot = new; true }
            None => false,
        }
    }

    /* ---------------- Views ---------------- */

    /// Case-insensitive substring match over season, phase, opponent and
    /// description. A blank term returns everything.
    pub fn search(&self, term: &str) -> Vec<Elimination> {
        let needle = fold(term.trim());
        if needle.is_empty() { return self.all(); }
        self.stack
            .iter()
            .filter(|e| {
                contains_folded(&e.season, &needle)
                    || contains_folded(&e.phase, &needle)
                    || contains_folded(&e.opponent, &needle)
                    || contains_folded(&e.description, &needle)
            })
            .cloned()
            .collect()
    }

    /// Sorted copy; the stack order is untouched.
    pub fn sorted(&self, by: EliminationSort) -> Vec<Elimination> {
        merge_sort_by(self.all(), comparator(by))
    }
}

pub fn comparator(by: EliminationSort) -> fn(&Elimination, &Elimination) -> Ordering {
    match by {
        EliminationSort::SeasonDesc      => cmp_season_desc,
        EliminationSort::SeasonAsc       => cmp_season_asc,
        EliminationSort::PhaseImportance => cmp_phase,
        EliminationSort::PhaseThenSeason => cmp_phase_then_season,
    }
}

/// By start year; falls back to comparing the raw season text when either
/// side does not parse.
fn cmp_season_asc(a: &Elimination, b: &Elimination) -> Ordering {
    match (a.start_year(), b.start_year()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.season.cmp(&b.season),
    }
}

fn cmp_season_desc(a: &Elimination, b: &Elimination) -> Ordering {
    cmp_season_asc(b, a)
}

/// Deepest round first.
fn cmp_phase(a: &Elimination, b: &Elimination) -> Ordering {
    phase_weight(&b.phase).cmp(&phase_weight(&a.phase))
}

fn cmp_phase_then_season(a: &Elimination, b: &Elimination) -> Ordering {
    cmp_phase(a, b).then_with(|| cmp_season_desc(a, b))
}
