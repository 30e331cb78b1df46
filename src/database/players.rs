use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use super::models::Player;

const PLAYER_COLUMNS: &str = "id, name, team";

pub fn upsert_player(conn: &mut DbConn, name: &str, team: &str) -> Result<Player> {
    if let Some(existing) = find_by_name(conn, name)? {
        return Ok(existing);
    }

    insert_new_player(conn, name, team)
}

pub fn find_by_name(conn: &mut DbConn, name: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE name = ?1 COLLATE NOCASE");

    conn.query_row(&sql, params![name.trim()], parse_player_row)
        .optional()
        .context("Failed to query player by name")
}

fn insert_new_player(conn: &mut DbConn, name: &str, team: &str) -> Result<Player> {
    let sql = format!("INSERT INTO players (name, team) VALUES (?1, ?2) RETURNING {PLAYER_COLUMNS}");

    conn.query_row(&sql, params![name.trim(), team], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        team: row.get(2)?,
    })
}

/// Sets each player's team to the team of their most recent game
pub fn refresh_teams(conn: &mut DbConn) -> Result<usize> {
    let sql = "UPDATE players SET team = (
            SELECT g.team FROM games g WHERE g.player_id = players.id ORDER BY g.game_date DESC LIMIT 1
        )
        WHERE EXISTS (SELECT 1 FROM games g WHERE g.player_id = players.id)";

    conn.execute(sql, [])
        .context("Failed to refresh player teams")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY name");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_by_team(conn: &mut DbConn, team: &str) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE team = ?1 ORDER BY name");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![team], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
