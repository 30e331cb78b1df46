use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    players::{get_player_stats, list_players, list_teams},
    predictions::{get_prediction, get_similar_players, get_trend},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(list_players))
        .route("/api/teams", get(list_teams))
        .route("/api/player/:name/stats", get(get_player_stats))
        .route("/api/predict/:stat/:player/:team/:threshold", get(get_prediction))
        .route("/api/similar/:stat/:player/:team/:threshold", get(get_similar_players))
        .route("/api/trend/:player/:stat", get(get_trend))
        .with_state(state)
}
