//! Threshold likelihood and similarity engine
//!
//! Pure functions over game logs, plus [`ThresholdEngine`] which pulls the
//! logs from a [`GameLogStore`] and validates requests.

pub mod category;
pub mod extractor;
pub mod filter;
pub mod likelihood;
pub mod similarity;
pub mod trend;
pub mod types;

pub use category::StatCategory;
pub use extractor::{StatExtractor, StatSample};
pub use filter::{EvidenceIndices, EvidenceSets, MatchupFilter};
pub use likelihood::{LikelihoodEstimator, hit_rate};
pub use similarity::{FeatureVector, SimilarityIndex};
pub use trend::build_trend;
pub use types::{
    EvidenceSummary, LikelihoodBand, LikelihoodEstimate, LikelihoodResult, SimilarityEntry,
    TrendPoint, TrendSeries,
};

use log::warn;
use std::collections::BTreeMap;

use crate::config::{EngineSettings, resolve_team};
use crate::domain::PlayerHistory;
use crate::errors::{EngineError, EngineResult};
use crate::store::GameLogStore;

/// A validated threshold request
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdQuery {
    pub player: String,
    /// Canonical team abbreviation
    pub opponent: String,
    pub category: StatCategory,
    pub threshold: f64,
}

pub struct ThresholdEngine<S> {
    store: S,
    settings: EngineSettings,
}

impl<S: GameLogStore> ThresholdEngine<S> {
    pub fn new(store: S, settings: EngineSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Checks category, threshold, opponent and that the opponent is not the player's own team
    pub fn build_query(
        &self,
        player: &str,
        opponent: &str,
        category: &str,
        threshold: f64,
    ) -> EngineResult<ThresholdQuery> {
        let category = StatExtractor::category(category)?;
        likelihood::validate_threshold(threshold)?;
        let opponent = resolve_team(opponent)?;

        let own_team = self.store.resolve_player_team(player)?;
        if own_team.eq_ignore_ascii_case(opponent) {
            return Err(EngineError::SelfMatchup {
                player: player.to_string(),
                team: own_team,
            });
        }

        Ok(ThresholdQuery {
            player: player.to_string(),
            opponent: opponent.to_string(),
            category,
            threshold,
        })
    }

    pub fn estimate_likelihood(
        &self,
        player: &str,
        opponent: &str,
        category: &str,
        threshold: f64,
        recency_window: Option<usize>,
    ) -> EngineResult<LikelihoodResult> {
        let window = recency_window.unwrap_or(self.settings.recency_window);
        if window == 0 {
            return Err(EngineError::InvalidWindow(window));
        }

        let query = self.build_query(player, opponent, category, threshold)?;
        let history = self.store.fetch_history(&query.player)?;

        let indices = MatchupFilter::new(window).split_indices(&history, &query.opponent);
        let estimate = LikelihoodEstimator::from_settings(&self.settings).estimate(
            &indices.resolve(&history),
            query.category,
            query.threshold,
        )?;

        Ok(LikelihoodResult::new(
            query.opponent,
            query.category,
            query.threshold,
            estimate,
            history,
            indices,
        ))
    }

    pub fn recommend_similar<I, P>(
        &self,
        player: &str,
        opponent: &str,
        category: &str,
        threshold: f64,
        candidate_pool: I,
    ) -> EngineResult<Vec<SimilarityEntry>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let query = self.build_query(player, opponent, category, threshold)?;
        let reference = self.store.fetch_history(&query.player)?;
        let candidates = self.fetch_candidates(&reference, candidate_pool)?;

        SimilarityIndex::from_settings(&self.settings).rank(
            &reference,
            &candidates,
            query.category,
            query.threshold,
        )
    }

    pub fn get_trend(&self, player: &str, category: &str) -> EngineResult<TrendSeries> {
        let category = StatExtractor::category(category)?;
        let history = self.store.fetch_history(player)?;
        Ok(build_trend(&history, category))
    }

    fn fetch_candidates<I, P>(
        &self,
        reference: &PlayerHistory,
        candidate_pool: I,
    ) -> EngineResult<Vec<PlayerHistory>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut candidates = BTreeMap::new();

        for name in candidate_pool {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case(reference.player()) {
                continue;
            }
            match self.store.fetch_history(name) {
                Ok(history) => {
                    candidates
                        .entry(history.player().to_lowercase())
                        .or_insert(history);
                }
                Err(EngineError::PlayerNotFound(_)) => {
                    warn!("Candidate {} has no game log, skipping", name);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(candidates.into_values().collect())
    }
}
