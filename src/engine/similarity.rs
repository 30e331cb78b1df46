use log::{debug, info};
use ndarray::{Array1, array};
use rayon::prelude::*;
use std::cmp::Ordering;

use super::category::StatCategory;
use super::likelihood::{summarize, validate_threshold};
use super::types::{EvidenceSummary, SimilarityEntry};
use crate::config::EngineSettings;
use crate::domain::PlayerHistory;
use crate::errors::{EngineError, EngineResult};

/// Mean and sample standard deviation of one category over a player's games
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    pub fn from_history(history: &PlayerHistory, category: StatCategory) -> Option<Self> {
        let values: Array1<f64> = history
            .games()
            .iter()
            .map(|g| category.value_of(&g.stats) as f64)
            .collect();

        let mean = values.mean()?;
        let stdev = if values.len() > 1 { values.std(1.0) } else { 0.0 };
        Some(Self(array![mean, stdev]))
    }

    pub fn mean(&self) -> f64 {
        self.0[0]
    }

    pub fn stdev(&self) -> f64 {
        self.0[1]
    }

    pub fn distance(&self, other: &FeatureVector) -> f64 {
        (&self.0 - &other.0).mapv(|x| x * x).sum().sqrt()
    }
}

/// Maps a distance onto (0, 100]: identical profiles score 100
pub fn similarity_score(distance: f64) -> f64 {
    // formula: score = 100 / (1 + d)
    let score = 100.0 / (1.0 + distance);
    (score * 100.0).round() / 100.0
}

/// Ranks candidates by closeness of profile to the reference player
pub struct SimilarityIndex {
    max_results: usize,
    min_hit_rate: f64,
}

impl SimilarityIndex {
    pub fn new(max_results: usize, min_hit_rate: f64) -> Self {
        Self {
            max_results,
            min_hit_rate,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.max_similar, settings.min_candidate_hit_rate)
    }

    pub fn rank(
        &self,
        reference: &PlayerHistory,
        candidates: &[PlayerHistory],
        category: StatCategory,
        threshold: f64,
    ) -> EngineResult<Vec<SimilarityEntry>> {
        validate_threshold(threshold)?;

        let reference_vector = FeatureVector::from_history(reference, category)
            .ok_or_else(|| EngineError::InsufficientData(reference.player().to_string()))?;

        let mut entries: Vec<SimilarityEntry> = candidates
            .par_iter()
            .filter(|c| !c.player().eq_ignore_ascii_case(reference.player()))
            .filter_map(|c| self.score_candidate(&reference_vector, c, category, threshold))
            .collect();

        entries.sort_by(compare_entries);
        entries.truncate(self.max_results);

        info!(
            "Ranked {} similar players for {} ({} >= {}) from {} candidates",
            entries.len(),
            reference.player(),
            category,
            threshold,
            candidates.len()
        );
        Ok(entries)
    }

    fn score_candidate(
        &self,
        reference: &FeatureVector,
        candidate: &PlayerHistory,
        category: StatCategory,
        threshold: f64,
    ) -> Option<SimilarityEntry> {
        let Some(vector) = FeatureVector::from_history(candidate, category) else {
            debug!("Skipping {}: no games recorded", candidate.player());
            return None;
        };

        let summary = summarize(candidate.games(), category, threshold)?;
        if summary.rate() < self.min_hit_rate {
            return None;
        }

        Some(SimilarityEntry {
            player: candidate.player().to_string(),
            score: similarity_score(reference.distance(&vector)),
            hit_rate: summary.rate(),
            note: build_note(&summary, category, threshold),
        })
    }
}

fn build_note(summary: &EvidenceSummary, category: StatCategory, threshold: f64) -> String {
    format!(
        "Also reached {} {} in {} of {} games",
        threshold, category, summary.hits, summary.games
    )
}

/// Score descending, then name ascending
fn compare_entries(a: &SimilarityEntry, b: &SimilarityEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.player.to_lowercase().cmp(&b.player.to_lowercase()))
        .then_with(|| a.player.cmp(&b.player))
}
