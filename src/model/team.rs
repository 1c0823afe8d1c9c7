// src/model/team.rs
use serde::{Deserialize, Serialize};

use crate::core::sanitize::normalize_ws;

/// One Champions League title.
/// Identity is the year: two titles for the same season compare equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub year: i32,
    /// Goals scored by the team's top scorer in that campaign.
    pub top_scorer_goals: u32,
}

impl Title {
    pub fn new(year: i32, top_scorer_goals: u32) -> Self {
        Self { year, top_scorer_goals }
    }
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool { self.year == other.year }
}
impl Eq for Title {}

/// A champion club and its titles.
/// Identity is the name; the title list is not part of equality, so a ring
/// `update` with a same-named team refreshes its titles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub titles: Vec<Title>,
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool { self.name == other.name }
}
impl Eq for Team {}

impl Team {
    pub fn new(name: &str) -> Self {
        Self { name: normalize_ws(name), titles: Vec::new() }
    }

    pub fn with_titles(name: &str, titles: Vec<Title>) -> Self {
        Self { name: normalize_ws(name), titles }
    }

    pub fn add_title(&mut self, title: Title) {
        self.titles.push(title);
    }

    /// Remove the title won in `year`. `false` if there is none.
    pub fn remove_title(&mut self, year: i32) -> bool {
        match self.titles.iter().position(|t| t.year == year) {
            Some(ix) => { self.titles.remove(ix); true }
            None => false,
        }
    }

    pub fn has_title(&self, year: i32) -> bool {
        self.titles.iter().any(|t| t.year == year)
    }

    #[inline] pub fn title_count(&self) -> usize { self.titles.len() }

    /// Title with the greatest year; the first one wins on ties.
    pub fn latest_title(&self) -> Option<&Title> {
        let mut latest: Option<&Title> = None;
        for t in &self.titles {
            if latest.is_none_or(|l| t.year > l.year) { latest = Some(t); }
        }
        latest
    }

    /// 0 when the team has no titles.
    pub fn latest_title_year(&self) -> i32 {
        self.latest_title().map_or(0, |t| t.year)
    }
}
