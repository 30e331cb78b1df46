use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::database::{self, DbConn};
use crate::domain::RawGameLog;
use crate::engine::StatExtractor;

/// Counts reported after a dataset load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub players: usize,
    /// Games present in the rebuilt database
    pub stored: usize,
}

/// Loads a provider game log dump into the SQLite store
pub struct IngestionService {
    config: AppConfig,
    extractor: StatExtractor,
}

impl IngestionService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            config,
            extractor: StatExtractor::new()?,
        })
    }

    pub fn run(&self, dataset: &Path) -> Result<IngestSummary> {
        let db_path = &self.config.database_path;
        let temp_db_path = format!("{}.tmp", db_path);

        info!("=== Starting Data Ingestion (Atomic) ===\n");
        info!("Dataset: {}, Target DB: {}, Temp DB: {}", dataset.display(), db_path, temp_db_path);

        let rows = self.load_rows(dataset)?;
        info!("  → Loaded {} raw game rows\n", rows.len());

        if Path::new(&temp_db_path).exists() {
            fs::remove_file(&temp_db_path)?;
        }

        let summary = self.process_to_db(&temp_db_path, &rows)?;

        fs::rename(&temp_db_path, db_path)
            .with_context(|| format!("Failed to move {} into place", temp_db_path))?;
        info!("Successfully swapped database to {}", db_path);

        info!("=== Ingestion Complete ===");
        Ok(summary)
    }

    fn load_rows(&self, dataset: &Path) -> Result<Vec<RawGameLog>> {
        let json = fs::read_to_string(dataset)
            .with_context(|| format!("Failed to read dataset {}", dataset.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse dataset {}", dataset.display()))
    }

    fn process_to_db(&self, db_path: &str, rows: &[RawGameLog]) -> Result<IngestSummary> {
        let pool = database::create_pool(db_path)?;
        let mut conn = database::get_connection(&pool)?;

        database::setup::reset_database(&mut conn)?;
        info!("  → Database schema reset\n");

        let mut summary = database::in_transaction(&mut conn, |conn| self.insert_rows(conn, rows))?;

        database::players::refresh_teams(&mut conn)?;
        summary.players = database::players::list_all(&mut conn)?.len();
        summary.stored = database::games::count_all(&mut conn)?;
        info!(
            "  → Stored {} games for {} players ({} duplicates, {} skipped)\n",
            summary.stored, summary.players, summary.duplicates, summary.skipped
        );

        Ok(summary)
    }

    fn insert_rows(&self, conn: &mut DbConn, rows: &[RawGameLog]) -> Result<IngestSummary> {
        let mut summary = IngestSummary {
            rows: rows.len(),
            ..IngestSummary::default()
        };

        for (idx, raw) in rows.iter().enumerate() {
            if (idx + 1) % 1000 == 0 || idx + 1 == rows.len() {
                info!("  Processing row {}/{}", idx + 1, rows.len());
            }

            let record = match self.extractor.normalize(raw) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping row {}: {:#}", idx + 1, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let player = database::players::upsert_player(conn, &raw.player_name, &record.team)?;
            if database::games::insert_game(conn, player.id, &record)? {
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        Ok(summary)
    }
}
