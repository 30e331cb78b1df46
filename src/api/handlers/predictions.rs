use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, PredictionParams, SimilarParams};
use crate::api::ApiError;
use crate::api::models::{
    PredictionResponse, SimilarPlayer, SimilarResponse, TrendPointRow, TrendResponse,
};
use crate::config::resolve_team;
use crate::engine::StatExtractor;
use crate::store::GameLogStore;

pub async fn get_prediction(
    State(state): State<Arc<AppState>>,
    Path((stat, player, team, threshold)): Path<(String, String, String, f64)>,
    Query(params): Query<PredictionParams>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let result = state
        .engine
        .estimate_likelihood(&player, &team, &stat, threshold, params.window)?;

    Ok(Json(PredictionResponse::from(&result)))
}

pub async fn get_similar_players(
    State(state): State<Arc<AppState>>,
    Path((stat, player, team, threshold)): Path<(String, String, String, f64)>,
    Query(params): Query<SimilarParams>,
) -> Result<Json<SimilarResponse>, ApiError> {
    let store = state.engine.store();
    let pool = match params.pool_team.as_deref() {
        Some(pool_team) => store.fetch_roster(pool_team)?,
        None => store.list_players()?,
    };

    let entries = state
        .engine
        .recommend_similar(&player, &team, &stat, threshold, &pool)?;

    Ok(Json(SimilarResponse {
        player,
        team: resolve_team(&team)?.to_string(),
        stat_type: StatExtractor::category(&stat)?.to_string(),
        threshold,
        similar: SimilarPlayer::from_ranked(entries),
    }))
}

pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Path((player, stat)): Path<(String, String)>,
) -> Result<Json<TrendResponse>, ApiError> {
    let series = state.engine.get_trend(&player, &stat)?;

    Ok(Json(TrendResponse {
        player: series.player.clone(),
        stat_type: series.category.to_string(),
        series: series.points.iter().map(TrendPointRow::from).collect(),
    }))
}
