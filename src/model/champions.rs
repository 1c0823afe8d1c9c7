// src/model/champions.rs
//! Champion teams, stored in a `CircularList`.
//!
//! The list is re-sorted by `TeamSort::TitlesDesc` after every load and every
//! mutation that can change title counts, so index 0 is always the most
//! decorated team unless the caller explicitly re-sorts.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::consts::NO_DATA;
use crate::config::options::TeamSort;
use crate::core::ring::{CircularList, Iter, RingError};
use crate::core::sanitize::{cmp_ignore_case, contains_folded, fold, normalize_ws};
use crate::store::{self, StoreError};

use super::team::{Team, Title};
use super::ModelError;

pub struct ChampionsModel {
    teams: CircularList<Team>,
    path: PathBuf,
}

impl ChampionsModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { teams: CircularList::new(), path: path.into() }
    }

    pub fn current_path(&self) -> &Path { &self.path }

    /* ---------------- Persistence ---------------- */

    /// Reload from the current path. Returns the number of teams loaded.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let teams = store::load_teams(&self.path)?;
        Ok(self.replace_all(teams))
    }

    /// Load another file; on success it becomes the current path.
    pub fn load_from(&mut self, path: impl Into<PathBuf>) -> Result<usize, StoreError> {
        let path = path.into();
        let teams = store::load_teams(&path)?;
        self.path = path;
        Ok(self.replace_all(teams))
    }

    pub fn save(&self) -> Result<(), StoreError> {
        store::save_teams(&self.teams(), &self.path)
    }

    /// Save to another file; on success it becomes the current path.
    pub fn save_to(&mut self, path: impl Into<PathBuf>) -> Result<(), StoreError> {
        let path = path.into();
        store::save_teams(&self.teams(), &path)?;
        self.path = path;
        Ok(())
    }

    fn replace_all(&mut self, teams: Vec<Team>) -> usize {
        self.teams.clear();
        self.teams.extend(teams.into_iter().map(normalized));
        self.sort(TeamSort::default());
        logf!("Champions: {} teams from {}", self.teams.len(), self.path.display());
        self.teams.len()
    }

    /* ---------------- Queries ---------------- */

    #[inline] pub fn len(&self) -> usize { self.teams.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.teams.is_empty() }

    /// Snapshot in current order.
    pub fn teams(&self) -> Vec<Team> { self.teams.to_vec() }

    pub fn iter(&self) -> Iter<'_, Team> { self.teams.iter() }

    pub fn team_at(&self, index: usize) -> Result<&Team, RingError> {
        self.teams.get(index)
    }

    /// Case-insensitive exact match on the name.
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        let key = name_key(name);
        self.teams.find(|t| name_key(&t.name) == key)
    }

    /// Case-insensitive substring match on the name; an empty term returns all.
    pub fn search(&self, term: &str) -> Vec<Team> {
        let needle = fold(term.trim());
        self.teams
            .iter()
            .filter(|t| contains_folded(&t.name, &needle))
            .cloned()
            .collect()
    }

    /* ---------------- Mutations ---------------- */

    pub fn sort(&mut self, by: TeamSort) {
        match by {
            TeamSort::TitlesDesc => self.teams.sort_by(|a, b| b.title_count().cmp(&a.title_count())),
            TeamSort::TitlesAsc  => self.teams.sort_by(|a, b| a.title_count().cmp(&b.title_count())),
            TeamSort::NameAsc    => self.teams.sort_by(|a, b| cmp_ignore_case(&a.name, &b.name)),
            TeamSort::NameDesc   => self.teams.sort_by(|a, b| cmp_ignore_case(&b.name, &a.name)),
        }
    }

    /// Names are unique ignoring case.
    pub fn add_team(&mut self, team: Team) -> Result<(), ModelError> {
        let team = normalized(team);
        if self.team_by_name(&team.name).is_some() {
            logw!("Champions: refused duplicate team {}", team.name);
            return Err(ModelError::Duplicate(team.name));
        }
        logd!("Champions: add {}", team.name);
        self.teams.push_back(team);
        self.sort(TeamSort::default());
        Ok(())
    }

    /// Replace the stored team with the same name. `false` if there is none.
    pub fn update_team(&mut self, team: Team) -> bool {
        let team = normalized(team);
        let name = team.name.clone();
        let found = self.teams.update(team);
        if found {
            self.sort(TeamSort::default());
        }
        logd!("Champions: update {name} -> {found}");
        found
    }

    pub fn remove_team(&mut self, name: &str) -> Option<Team> {
        // Resolve the stored spelling first; ring equality is exact.
        let key = self.team_by_name(name).map(|t| Team { name: t.name.clone(), titles: Vec::new() })?;
        let removed = self.teams.remove(&key);
        logd!("Champions: remove {} -> {}", key.name, removed.is_some());
        removed
    }

    pub fn add_title_to_team(&mut self, name: &str, title: Title) -> Result<(), ModelError> {
        let key = name_key(name);
        let team = self
            .teams
            .find_mut(|t| name_key(&t.name) == key)
            .ok_or_else(|| ModelError::NotFound(s!(name)))?;

        if team.has_title(title.year) {
            return Err(ModelError::Duplicate(format!("{} title {}", team.name, title.year)));
        }
        logd!("Champions: {} +title {}", team.name, title.year);
        team.add_title(title);
        self.sort(TeamSort::default());
        Ok(())
    }

    pub fn remove_title_from_team(&mut self, name: &str, year: i32) -> Result<(), ModelError> {
        let key = name_key(name);
        let team = self
            .teams
            .find_mut(|t| name_key(&t.name) == key)
            .ok_or_else(|| ModelError::NotFound(s!(name)))?;

        if !team.remove_title(year) {
            return Err(ModelError::NotFound(format!("{} title {}", team.name, year)));
        }
        self.sort(TeamSort::default());
        Ok(())
    }

    /* ---------------- Statistics ---------------- */

    pub fn statistics(&self) -> ChampionsStats {
        let mut most_titles: Option<(&str, usize)> = None;
        let mut most_recent: Option<(&str, i32)> = None;

        for team in &self.teams {
            let n = team.title_count();
            if most_titles.is_none_or(|(_, best)| n > best) {
                most_titles = Some((team.name.as_str(), n));
            }
            if let Some(latest) = team.latest_title() {
                if most_recent.is_none_or(|(_, year)| latest.year > year) {
                    most_recent = Some((team.name.as_str(), latest.year));
                }
            }
        }

        ChampionsStats {
            most_titles: most_titles.map(|(name, n)| (s!(name), n)),
            most_recent: most_recent.map(|(name, year)| (s!(name), year)),
            total_teams: self.teams.len(),
        }
    }
}

/// Lookup key: whitespace collapsed, case folded.
fn name_key(name: &str) -> String {
    fold(&normalize_ws(name))
}

/// Stored names always have collapsed whitespace, whatever the file held.
fn normalized(mut team: Team) -> Team {
    team.name = normalize_ws(&team.name);
    team
}

/// Summary shown on the champions screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChampionsStats {
    /// Team with the most titles; the first in list order wins ties.
    pub most_titles: Option<(String, usize)>,
    /// Team holding the latest title, and its year.
    pub most_recent: Option<(String, i32)>,
    pub total_teams: usize,
}

impl fmt::Display for ChampionsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_teams == 0 {
            return f.write_str(NO_DATA);
        }
        writeln!(f, "Champions League statistics:")?;
        if let Some((name, n)) = &self.most_titles {
            writeln!(f, "- Most titles: {name} ({n} titles)")?;
        }
        if let Some((name, year)) = &self.most_recent {
            writeln!(f, "- Most recent champion: {name} ({year})")?;
        }
        write!(f, "- Total champion teams: {}", self.total_teams)
    }
}
