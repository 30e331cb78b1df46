use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{GameRecord, StatLine};

/// Inserts a game; returns false when the player already has a game on that date
pub fn insert_game(conn: &mut DbConn, player_id: i32, game: &GameRecord) -> Result<bool> {
    let sql = "INSERT OR IGNORE INTO games (player_id, game_date, team, opponent, home, points, rebounds, assists, blocks, steals) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

    let inserted = conn
        .execute(
            sql,
            params![
                player_id,
                game.date,
                game.team,
                game.opponent,
                game.home,
                game.stats.points,
                game.stats.rebounds,
                game.stats.assists,
                game.stats.blocks,
                game.stats.steals
            ],
        )
        .context("Failed to insert game")?;

    Ok(inserted > 0)
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameRecord> {
    Ok(GameRecord {
        date: row.get(0)?,
        team: row.get(1)?,
        opponent: row.get(2)?,
        home: row.get(3)?,
        stats: StatLine {
            points: row.get(4)?,
            rebounds: row.get(5)?,
            assists: row.get(6)?,
            blocks: row.get(7)?,
            steals: row.get(8)?,
        },
    })
}

/// All games for a player, oldest first
pub fn list_for_player(conn: &mut DbConn, player_id: i32) -> Result<Vec<GameRecord>> {
    let sql = "SELECT game_date, team, opponent, home, points, rebounds, assists, blocks, steals FROM games WHERE player_id = ?1 ORDER BY game_date ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .context("Failed to count games")
}
