use serde::Serialize;

use crate::config::TeamConfig;
use crate::domain::{GameRecord, season_for};
use crate::engine::{LikelihoodResult, SimilarityEntry, TrendPoint};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRow {
    pub game_date: String,
    pub season: String,
    pub matchup: String,
    pub opponent: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub blocks: u32,
    pub steals: u32,
}

impl From<&GameRecord> for GameRow {
    fn from(game: &GameRecord) -> Self {
        Self {
            game_date: game.date.to_string(),
            season: season_for(game.date),
            matchup: game.matchup(),
            opponent: game.opponent.clone(),
            points: game.stats.points,
            rebounds: game.stats.rebounds,
            assists: game.stats.assists,
            blocks: game.stats.blocks,
            steals: game.stats.steals,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub player: String,
    pub total: usize,
    pub stats: Vec<GameRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub player: String,
    pub team: String,
    pub stat_type: String,
    pub threshold: f64,
    pub likelihood: String,
    pub percentage: u8,
    pub band: String,
    pub matchup_hit_rate: Option<f64>,
    pub recent_hit_rate: Option<f64>,
    pub recent_games: Vec<GameRow>,
    pub games: Vec<GameRow>,
}

impl From<&LikelihoodResult> for PredictionResponse {
    fn from(result: &LikelihoodResult) -> Self {
        Self {
            player: result.player.clone(),
            team: result.opponent.clone(),
            stat_type: result.category.to_string(),
            threshold: result.threshold,
            likelihood: result.likelihood(),
            percentage: result.percentage(),
            band: result.band().as_str().to_string(),
            matchup_hit_rate: result.estimate.matchup.map(|s| s.rate()),
            recent_hit_rate: result.estimate.recent.map(|s| s.rate()),
            recent_games: result.recent_games().into_iter().map(GameRow::from).collect(),
            games: result.vs_opponent_games().into_iter().map(GameRow::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarPlayer {
    pub rank: usize,
    pub player: String,
    pub score: f64,
    pub hit_rate: f64,
    pub note: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarResponse {
    pub player: String,
    pub team: String,
    pub stat_type: String,
    pub threshold: f64,
    pub similar: Vec<SimilarPlayer>,
}

impl SimilarPlayer {
    pub fn from_ranked(entries: Vec<SimilarityEntry>) -> Vec<Self> {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| SimilarPlayer {
                rank: i + 1,
                player: entry.player,
                score: entry.score,
                hit_rate: entry.hit_rate,
                note: entry.note,
            })
            .collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointRow {
    pub date: String,
    pub value: u32,
}

impl From<&TrendPoint> for TrendPointRow {
    fn from(point: &TrendPoint) -> Self {
        Self {
            date: point.date.to_string(),
            value: point.value,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub player: String,
    pub stat_type: String,
    pub series: Vec<TrendPointRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub total: usize,
    pub players: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub abbreviation: String,
    pub full_name: String,
}

impl From<&TeamConfig> for TeamRow {
    fn from(team: &TeamConfig) -> Self {
        Self {
            abbreviation: team.abbreviation.to_string(),
            full_name: team.name.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListResponse {
    pub total: usize,
    pub teams: Vec<TeamRow>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}
