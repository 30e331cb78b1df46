use chrono::NaiveDate;
use serde::Deserialize;

use crate::engine::ThresholdEngine;
use crate::store::GameLogStore;

pub mod players;
pub mod predictions;

pub type SharedStore = Box<dyn GameLogStore + Send + Sync>;

pub struct AppState {
    pub engine: ThresholdEngine<SharedStore>,
}

#[derive(Deserialize)]
pub struct StatsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Category the `min` filter applies to, points when absent
    pub stat: Option<String>,
    pub min: Option<f64>,
}

#[derive(Deserialize)]
pub struct PredictionParams {
    pub window: Option<usize>,
}

#[derive(Deserialize)]
pub struct SimilarParams {
    /// Restrict candidates to this team's roster instead of every known player
    pub pool_team: Option<String>,
}
