use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, StatsParams};
use crate::api::ApiError;
use crate::api::models::{
    GameRow, PlayerListResponse, PlayerStatsResponse, TeamListResponse, TeamRow,
};
use crate::config::get_teams;
use crate::engine::{StatCategory, StatExtractor};
use crate::store::GameLogStore;

pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<StatsParams>,
) -> Result<Json<PlayerStatsResponse>, ApiError> {
    let history = state.engine.store().fetch_history(&name)?;

    let min_filter = match (params.stat.as_deref(), params.min) {
        (Some(stat), Some(min)) => Some((StatExtractor::category(stat)?, min)),
        (None, Some(min)) => Some((StatCategory::Points, min)),
        _ => None,
    };

    let stats: Vec<GameRow> = history
        .between(params.start_date, params.end_date)
        .into_iter()
        .filter(|game| {
            min_filter.is_none_or(|(category, min)| category.value_of(&game.stats) as f64 >= min)
        })
        .map(GameRow::from)
        .collect();

    Ok(Json(PlayerStatsResponse {
        player: history.player().to_string(),
        total: stats.len(),
        stats,
    }))
}

pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let players: Vec<String> = state.engine.store().list_players()?.into_iter().collect();

    Ok(Json(PlayerListResponse {
        total: players.len(),
        players,
    }))
}

pub async fn list_teams() -> Json<TeamListResponse> {
    let teams: Vec<TeamRow> = get_teams().iter().map(TeamRow::from).collect();

    Json(TeamListResponse {
        total: teams.len(),
        teams,
    })
}
