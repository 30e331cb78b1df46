use anyhow::Result;
use std::collections::BTreeSet;

use super::GameLogStore;
use crate::config::resolve_team;
use crate::database::{self, DbConn, DbPool};
use crate::domain::PlayerHistory;
use crate::errors::{EngineError, EngineResult};

/// Game logs persisted by the ingest command
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the database at `path`, creating the schema if needed
    pub fn open(path: &str) -> Result<Self> {
        let pool = database::create_pool(path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn connection(&self) -> EngineResult<DbConn> {
        Ok(database::get_connection(&self.pool)?)
    }

    fn find_player(&self, conn: &mut DbConn, name: &str) -> EngineResult<database::Player> {
        database::players::find_by_name(conn, name)?
            .ok_or_else(|| EngineError::PlayerNotFound(name.to_string()))
    }
}

impl GameLogStore for SqliteStore {
    fn fetch_history(&self, player: &str) -> EngineResult<PlayerHistory> {
        let mut conn = self.connection()?;
        let row = self.find_player(&mut conn, player)?;
        let games = database::games::list_for_player(&mut conn, row.id)?;
        Ok(PlayerHistory::new(row.name, games))
    }

    fn fetch_roster(&self, team: &str) -> EngineResult<BTreeSet<String>> {
        let team = resolve_team(team)?;
        let mut conn = self.connection()?;
        let rows = database::players::list_by_team(&mut conn, team)?;
        Ok(rows.into_iter().map(|p| p.name).collect())
    }

    fn resolve_player_team(&self, player: &str) -> EngineResult<String> {
        let mut conn = self.connection()?;
        Ok(self.find_player(&mut conn, player)?.team)
    }

    fn list_players(&self) -> EngineResult<BTreeSet<String>> {
        let mut conn = self.connection()?;
        let rows = database::players::list_all(&mut conn)?;
        Ok(rows.into_iter().map(|p| p.name).collect())
    }
}
