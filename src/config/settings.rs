/// Tunables of the likelihood estimator and similarity index
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Share of the blended likelihood taken from games against the opponent.
    /// Recent form gets the remainder.
    pub matchup_weight: f64,
    pub recency_window: usize,
    pub max_similar: usize,
    /// Candidates below this full-history hit rate do not "tend to clear" the threshold
    pub min_candidate_hit_rate: f64,
}

impl EngineSettings {
    /// Share taken from recent form, the complement of `matchup_weight`
    pub fn recency_weight(&self) -> f64 {
        1.0 - self.matchup_weight.clamp(0.0, 1.0)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            matchup_weight: 0.6,
            recency_window: 5,
            max_similar: 5,
            min_candidate_hit_rate: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            engine: EngineSettings::default(),
            database_path: resolve_database_path(),
        }
    }
}

fn resolve_database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "nba_stats.db".to_string())
}
