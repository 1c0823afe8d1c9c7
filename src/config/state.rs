// src/config/state.rs
use super::options::AppOptions;
use crate::model::{ChampionsModel, EliminationsModel, Navigator};
use crate::store::StoreError;

/// Everything a front-end holds for one session: options, both datasets, and
/// a navigation cursor per dataset.
pub struct AppState {
    pub options: AppOptions,
    pub champions: ChampionsModel,
    pub eliminations: EliminationsModel,
    pub team_nav: Navigator,
    pub elim_nav: Navigator,
}

impl Default for AppState {
    fn default() -> Self { Self::new(AppOptions::default()) }
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let champions = ChampionsModel::new(options.data.champions());
        let eliminations = EliminationsModel::new(options.data.eliminations());
        Self {
            options,
            champions,
            eliminations,
            team_nav: Navigator::default(),
            elim_nav: Navigator::default(),
        }
    }

    pub fn load_champions(&mut self) -> Result<usize, StoreError> {
        let n = self.champions.load()?;
        self.team_nav.reset(n);
        Ok(n)
    }

    pub fn load_eliminations(&mut self) -> Result<usize, StoreError> {
        let n = self.eliminations.load()?;
        self.elim_nav.reset(n);
        Ok(n)
    }

    /// Re-sync the cursors after a mutation changed a dataset's size.
    pub fn refresh_navigation(&mut self) {
        self.team_nav.reset(self.champions.len());
        self.elim_nav.reset(self.eliminations.len());
    }
}
