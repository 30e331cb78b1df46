use std::collections::BTreeSet;

use crate::domain::PlayerHistory;
use crate::errors::EngineResult;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Source of game logs and rosters
///
/// Histories come back oldest game first with at most one game per date.
/// Team arguments are canonical abbreviations.
pub trait GameLogStore {
    /// Fails with `PlayerNotFound` for an unknown player
    fn fetch_history(&self, player: &str) -> EngineResult<PlayerHistory>;

    /// Fails with `TeamNotFound` for an unknown team
    fn fetch_roster(&self, team: &str) -> EngineResult<BTreeSet<String>>;

    fn resolve_player_team(&self, player: &str) -> EngineResult<String>;

    /// Every player the store knows about
    fn list_players(&self) -> EngineResult<BTreeSet<String>>;
}

impl<T: GameLogStore + ?Sized> GameLogStore for Box<T> {
    fn fetch_history(&self, player: &str) -> EngineResult<PlayerHistory> {
        (**self).fetch_history(player)
    }

    fn fetch_roster(&self, team: &str) -> EngineResult<BTreeSet<String>> {
        (**self).fetch_roster(team)
    }

    fn resolve_player_team(&self, player: &str) -> EngineResult<String> {
        (**self).resolve_player_team(player)
    }

    fn list_players(&self) -> EngineResult<BTreeSet<String>> {
        (**self).list_players()
    }
}
