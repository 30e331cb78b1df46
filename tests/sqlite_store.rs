use serde_json::json;
use std::fs;
use tempfile::TempDir;

use nba_stats_recommender::config::{AppConfig, EngineSettings};
use nba_stats_recommender::engine::ThresholdEngine;
use nba_stats_recommender::errors::EngineError;
use nba_stats_recommender::services::IngestionService;
use nba_stats_recommender::store::{GameLogStore, SqliteStore};

fn row(player: &str, date: &str, matchup: &str, pts: u32) -> serde_json::Value {
    json!({
        "PLAYER_NAME": player,
        "GAME_DATE": date,
        "MATCHUP": matchup,
        "PTS": pts,
        "REB": 7,
        "AST": 5,
        "BLK": 1,
        "STL": 2
    })
}

fn ingest(dir: &TempDir, rows: Vec<serde_json::Value>) -> (AppConfig, SqliteStore) {
    let dataset = dir.path().join("player_data.json");
    fs::write(&dataset, serde_json::to_string(&rows).unwrap()).unwrap();

    let config = AppConfig {
        engine: EngineSettings::default(),
        database_path: dir.path().join("nba.db").to_string_lossy().into_owned(),
    };
    let summary = IngestionService::new(config.clone()).unwrap().run(&dataset).unwrap();
    assert_eq!(summary.rows, rows.len());

    let store = SqliteStore::open(&config.database_path).unwrap();
    (config, store)
}

fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        row("Jayson Tatum", "2024-01-10", "BOS vs. MIA", 30),
        row("Jayson Tatum", "JAN 03, 2024", "BOS @ LAL", 22),
        row("Jayson Tatum", "2024-01-06", "BOS vs. MIA", 27),
        row("Jayson Tatum", "2024-01-06", "BOS vs. MIA", 27),
        row("Jayson Tatum", "2024-01-12", "nonsense", 27),
        row("Traded Guard", "2024-01-02", "DET vs. CHI", 12),
        row("Traded Guard", "2024-01-09", "CHI @ NYK", 16),
    ]
}

#[test]
fn ingestion_reports_duplicates_and_bad_rows() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("player_data.json");
    fs::write(&dataset, serde_json::to_string(&sample_rows()).unwrap()).unwrap();

    let config = AppConfig {
        engine: EngineSettings::default(),
        database_path: dir.path().join("nba.db").to_string_lossy().into_owned(),
    };
    let summary = IngestionService::new(config.clone()).unwrap().run(&dataset).unwrap();

    assert_eq!(summary.rows, 7);
    assert_eq!(summary.inserted, 5);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.players, 2);
    assert_eq!(summary.stored, 5);
    assert!(!dir.path().join("nba.db.tmp").exists());
}

#[test]
fn history_comes_back_oldest_first() {
    let dir = TempDir::new().unwrap();
    let (_, store) = ingest(&dir, sample_rows());

    let history = store.fetch_history("jayson tatum").unwrap();
    assert_eq!(history.player(), "Jayson Tatum");

    let points: Vec<u32> = history.games().iter().map(|g| g.stats.points).collect();
    assert_eq!(points, vec![22, 27, 30]);
    assert_eq!(history.games()[0].opponent, "LAL");
    assert!(!history.games()[0].home);
    assert_eq!(history.games()[0].stats.steals, 2);
}

#[test]
fn team_and_roster_follow_latest_game() {
    let dir = TempDir::new().unwrap();
    let (_, store) = ingest(&dir, sample_rows());

    assert_eq!(store.resolve_player_team("Traded Guard").unwrap(), "CHI");
    assert!(store.fetch_roster("Chicago Bulls").unwrap().contains("Traded Guard"));
    assert!(store.fetch_roster("DET").unwrap().is_empty());
    assert_eq!(store.list_players().unwrap().len(), 2);
}

#[test]
fn unknown_lookups_map_to_engine_errors() {
    let dir = TempDir::new().unwrap();
    let (_, store) = ingest(&dir, sample_rows());

    assert!(matches!(
        store.fetch_history("Nobody").unwrap_err(),
        EngineError::PlayerNotFound(_)
    ));
    assert!(matches!(
        store.fetch_roster("Nowhere").unwrap_err(),
        EngineError::TeamNotFound(_)
    ));
}

#[test]
fn engine_runs_over_sqlite_store() {
    let dir = TempDir::new().unwrap();
    let (config, store) = ingest(&dir, sample_rows());
    let engine = ThresholdEngine::new(store, config.engine);

    let result = engine
        .estimate_likelihood("Jayson Tatum", "MIA", "points", 28.0, None)
        .unwrap();

    // matchup: 27, 30 → 1/2; recent: 30, 27, 22 → 1/3
    assert_eq!(result.percentage(), 43);
    assert_eq!(result.vs_opponent_games().len(), 2);

    let err = engine
        .estimate_likelihood("Jayson Tatum", "BOS", "points", 28.0, None)
        .unwrap_err();
    assert!(matches!(err, EngineError::SelfMatchup { .. }));
}

#[test]
fn reingesting_replaces_previous_data() {
    let dir = TempDir::new().unwrap();
    let _ = ingest(&dir, sample_rows());
    let (_, store) = ingest(&dir, vec![row("Solo Player", "2024-02-01", "UTA vs. SAC", 18)]);

    assert_eq!(store.list_players().unwrap().len(), 1);
    assert!(store.fetch_history("Jayson Tatum").is_err());
}
