use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::StatCategory;
use super::filter::EvidenceIndices;
use crate::domain::{GameRecord, PlayerHistory};

/// Hit count over one evidence set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub hits: usize,
    pub games: usize,
}

impl EvidenceSummary {
    pub fn rate(&self) -> f64 {
        self.hits as f64 / self.games as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikelihoodEstimate {
    /// Whole percentage points, 0..=100
    pub percentage: u8,
    pub matchup: Option<EvidenceSummary>,
    pub recent: Option<EvidenceSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikelihoodBand {
    Unlikely,   // < 35%
    TossUp,     // 35-64%
    Likely,     // 65-84%
    VeryLikely, // 85%+
}

impl LikelihoodBand {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < 35 {
            LikelihoodBand::Unlikely
        } else if percentage < 65 {
            LikelihoodBand::TossUp
        } else if percentage < 85 {
            LikelihoodBand::Likely
        } else {
            LikelihoodBand::VeryLikely
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LikelihoodBand::Unlikely => "unlikely",
            LikelihoodBand::TossUp => "toss-up",
            LikelihoodBand::Likely => "likely",
            LikelihoodBand::VeryLikely => "very likely",
        }
    }
}

/// Answer to a threshold query, holding the history it was computed from.
/// The evidence lists are views into that history.
#[derive(Debug, Clone)]
pub struct LikelihoodResult {
    pub player: String,
    pub opponent: String,
    pub category: StatCategory,
    pub threshold: f64,
    pub estimate: LikelihoodEstimate,
    history: PlayerHistory,
    evidence: EvidenceIndices,
}

impl LikelihoodResult {
    pub fn new(
        opponent: String,
        category: StatCategory,
        threshold: f64,
        estimate: LikelihoodEstimate,
        history: PlayerHistory,
        evidence: EvidenceIndices,
    ) -> Self {
        Self {
            player: history.player().to_string(),
            opponent,
            category,
            threshold,
            estimate,
            history,
            evidence,
        }
    }

    pub fn percentage(&self) -> u8 {
        self.estimate.percentage
    }

    /// "54%"
    pub fn likelihood(&self) -> String {
        format!("{}%", self.estimate.percentage)
    }

    pub fn band(&self) -> LikelihoodBand {
        LikelihoodBand::from_percentage(self.estimate.percentage)
    }

    pub fn history(&self) -> &PlayerHistory {
        &self.history
    }

    /// Games against the opponent, oldest first
    pub fn vs_opponent_games(&self) -> Vec<&GameRecord> {
        self.evidence.resolve(&self.history).vs_opponent
    }

    /// Most recent games, newest first
    pub fn recent_games(&self) -> Vec<&GameRecord> {
        self.evidence.resolve(&self.history).recent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub player: String,
    /// 100 for an identical profile, decaying towards 0 with distance
    pub score: f64,
    /// Candidate's own full-history hit rate at the same threshold
    pub hit_rate: f64,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub player: String,
    pub category: StatCategory,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(LikelihoodBand::from_percentage(0), LikelihoodBand::Unlikely);
        assert_eq!(LikelihoodBand::from_percentage(34), LikelihoodBand::Unlikely);
        assert_eq!(LikelihoodBand::from_percentage(35), LikelihoodBand::TossUp);
        assert_eq!(LikelihoodBand::from_percentage(64), LikelihoodBand::TossUp);
        assert_eq!(LikelihoodBand::from_percentage(65), LikelihoodBand::Likely);
        assert_eq!(LikelihoodBand::from_percentage(85), LikelihoodBand::VeryLikely);
        assert_eq!(LikelihoodBand::from_percentage(100).as_str(), "very likely");
    }

    #[test]
    fn test_summary_rate() {
        let summary = EvidenceSummary { hits: 3, games: 5 };
        assert!((summary.rate() - 0.6).abs() < 1e-12);
    }
}
