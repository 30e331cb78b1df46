use log::{debug, info};

use super::category::StatCategory;
use super::filter::EvidenceSets;
use super::types::{EvidenceSummary, LikelihoodEstimate};
use crate::config::EngineSettings;
use crate::domain::GameRecord;
use crate::errors::{EngineError, EngineResult};

pub fn validate_threshold(threshold: f64) -> EngineResult<()> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidThreshold(threshold))
    }
}

/// Summarises how often the games in `games` met the threshold.
/// Returns `None` for an empty set.
pub fn summarize<'a, I>(games: I, category: StatCategory, threshold: f64) -> Option<EvidenceSummary>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let (hits, total) = games.into_iter().fold((0usize, 0usize), |(hits, total), game| {
        let value = category.value_of(&game.stats) as f64;
        (hits + usize::from(value >= threshold), total + 1)
    });

    (total > 0).then(|| EvidenceSummary { hits, games: total })
}

/// Fraction of games at or above the threshold, `None` for an empty set
pub fn hit_rate<'a, I>(games: I, category: StatCategory, threshold: f64) -> Option<f64>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    summarize(games, category, threshold).map(|s| s.rate())
}

/// Blends matchup and recent-form hit rates into one percentage
pub struct LikelihoodEstimator {
    matchup_weight: f64,
    recency_weight: f64,
}

impl LikelihoodEstimator {
    pub fn new(matchup_weight: f64) -> Self {
        let matchup_weight = matchup_weight.clamp(0.0, 1.0);
        Self {
            matchup_weight,
            recency_weight: 1.0 - matchup_weight,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            matchup_weight: settings.matchup_weight.clamp(0.0, 1.0),
            recency_weight: settings.recency_weight(),
        }
    }

    pub fn estimate(
        &self,
        evidence: &EvidenceSets<'_>,
        category: StatCategory,
        threshold: f64,
    ) -> EngineResult<LikelihoodEstimate> {
        validate_threshold(threshold)?;

        let matchup = summarize(evidence.vs_opponent.iter().copied(), category, threshold);
        let recent = summarize(evidence.recent.iter().copied(), category, threshold);

        let probability = match (&matchup, &recent) {
            (Some(m), Some(r)) => self.blend(m.rate(), r.rate()),
            (Some(m), None) => m.rate(),
            (None, Some(r)) => {
                debug!("No matchup games for {}, using recent form only", evidence.player);
                r.rate()
            }
            (None, None) => return Err(EngineError::InsufficientData(evidence.player.to_string())),
        };

        let percentage = to_percentage(probability);
        info!(
            "Likelihood for {} ({} >= {}): {}% [matchup {:?}, recent {:?}]",
            evidence.player, category, threshold, percentage, matchup, recent
        );

        Ok(LikelihoodEstimate {
            percentage,
            matchup,
            recent,
        })
    }

    fn blend(&self, matchup_rate: f64, recent_rate: f64) -> f64 {
        self.matchup_weight * matchup_rate + self.recency_weight * recent_rate
    }
}

fn to_percentage(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
