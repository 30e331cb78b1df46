use std::collections::{BTreeSet, HashMap};

use super::GameLogStore;
use crate::config::resolve_team;
use crate::domain::{GameRecord, PlayerHistory};
use crate::errors::{EngineError, EngineResult};

#[derive(Debug, Clone)]
struct PlayerEntry {
    name: String,
    team: String,
    games: Vec<GameRecord>,
}

/// In-process store, keyed by case-insensitive player name
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    players: HashMap<String, PlayerEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, GameRecord)>,
    {
        let mut store = Self::new();
        for (player, record) in records {
            store.add_game(&player, record);
        }
        store
    }

    /// Registers a player who may not have played yet
    pub fn add_player(&mut self, name: &str, team: &str) {
        self.players
            .entry(key(name))
            .and_modify(|entry| entry.team = team.to_string())
            .or_insert_with(|| PlayerEntry {
                name: name.to_string(),
                team: team.to_string(),
                games: Vec::new(),
            });
    }

    /// Adds a game; a second game on the same date replaces the first
    pub fn add_game(&mut self, name: &str, record: GameRecord) {
        let entry = self.players.entry(key(name)).or_insert_with(|| PlayerEntry {
            name: name.to_string(),
            team: record.team.clone(),
            games: Vec::new(),
        });

        match entry.games.binary_search_by_key(&record.date, |g| g.date) {
            Ok(pos) => entry.games[pos] = record,
            Err(pos) => entry.games.insert(pos, record),
        }

        if let Some(latest) = entry.games.last() {
            entry.team = latest.team.clone();
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn entry(&self, player: &str) -> EngineResult<&PlayerEntry> {
        self.players
            .get(&key(player))
            .ok_or_else(|| EngineError::PlayerNotFound(player.to_string()))
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl GameLogStore for MemoryStore {
    fn fetch_history(&self, player: &str) -> EngineResult<PlayerHistory> {
        let entry = self.entry(player)?;
        Ok(PlayerHistory::new(entry.name.clone(), entry.games.clone()))
    }

    fn fetch_roster(&self, team: &str) -> EngineResult<BTreeSet<String>> {
        let team = resolve_team(team)?;
        Ok(self
            .players
            .values()
            .filter(|entry| entry.team.eq_ignore_ascii_case(team))
            .map(|entry| entry.name.clone())
            .collect())
    }

    fn resolve_player_team(&self, player: &str) -> EngineResult<String> {
        Ok(self.entry(player)?.team.clone())
    }

    fn list_players(&self) -> EngineResult<BTreeSet<String>> {
        Ok(self.players.values().map(|entry| entry.name.clone()).collect())
    }
}
