// src/model/elimination.rs
use serde::{Deserialize, Serialize};

use crate::core::sanitize::fold;

/// A knockout-stage exit.
/// Identity is (season, phase, opponent); results and free text are not compared.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Elimination {
    /// "YYYY-YYYY"
    pub season: String,
    pub phase: String,
    pub opponent: String,
    /// First leg score
    pub result_home: String,
    /// Second leg score
    pub result_away: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: String,
}

impl PartialEq for Elimination {
    fn eq(&self, other: &Self) -> bool {
        self.season == other.season && self.phase == other.phase && self.opponent == other.opponent
    }
}
impl Eq for Elimination {}

impl Elimination {
    pub fn new(season: &str, phase: &str, opponent: &str, result_home: &str, result_away: &str) -> Self {
        Self {
            season: s!(season.trim()),
            phase: s!(phase.trim()),
            opponent: s!(opponent.trim()),
            result_home: s!(result_home.trim()),
            result_away: s!(result_away.trim()),
            description: s!(),
            image_path: s!(),
        }
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.description = s!(text);
        self
    }

    pub fn with_image(mut self, path: &str) -> Self {
        self.image_path = s!(path);
        self
    }

    /// Leading year of "YYYY-YYYY", if it parses.
    pub fn start_year(&self) -> Option<i32> {
        self.season.split('-').next()?.trim().parse().ok()
    }

    pub fn aggregate(&self) -> String {
        join!(&self.result_home, " / ", &self.result_away)
    }
}

/// Rank of a knockout phase; deeper rounds weigh more, unknown phases 0.
/// Spanish and English names are both recognised. Specific rounds are matched
/// before the bare word "final", which every "... de final" name contains.
pub fn phase_weight(phase: &str) -> u8 {
    let p = fold(phase);
    let has = |keys: &[&str]| keys.iter().any(|k| p.contains(k));

    if has(&["semi"]) { 9 }
    else if has(&["cuartos", "quarter"]) { 8 }
    else if has(&["octavos", "round of 16", "last 16"]) { 7 }
    else if has(&["dieciseisavos", "round of 32", "last 32", "play-off", "playoff"]) { 6 }
    else if has(&["grupo", "group"]) { 5 }
    else if has(&["final"]) { 10 }
    else { 0 }
}

/// Records written when the eliminations file does not exist yet.
pub fn samples() -> Vec<Elimination> {
    vec![
        Elimination::new("2022-2023", "Semi-final", "Manchester City", "1-1", "0-4")
            .with_description("Knocked out in the semi-finals after a 4-0 defeat at the Etihad Stadium.")
            .with_image("images/eliminations/city_2023.jpg"),
        Elimination::new("2019-2020", "Round of 16", "Manchester City", "1-2", "1-2")
            .with_description("Eliminated in the round of 16 by Guardiola's City, 2-4 on aggregate.")
            .with_image("images/eliminations/city_2020.jpg"),
        Elimination::new("2018-2019", "Round of 16", "Ajax", "2-1", "1-4")
            .with_description("Ajax came back with a 1-4 win at the Bernabeu to knock out the three-time holders.")
            .with_image("images/eliminations/ajax_2019.jpg"),
    ]
}
