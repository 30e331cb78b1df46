use crate::domain::{GameRecord, PlayerHistory};

/// The two evidence sets carved out of a player's history
///
/// Both hold borrowed records, so the history keeps its own order.
#[derive(Debug, Clone)]
pub struct EvidenceSets<'a> {
    pub player: &'a str,
    /// Games against the opponent, oldest first
    pub vs_opponent: Vec<&'a GameRecord>,
    /// Last `window` games overall, most recent first
    pub recent: Vec<&'a GameRecord>,
}

/// Positions of the evidence games inside the history's own ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceIndices {
    pub vs_opponent: Vec<usize>,
    pub recent: Vec<usize>,
}

impl EvidenceIndices {
    pub fn resolve<'a>(&self, history: &'a PlayerHistory) -> EvidenceSets<'a> {
        let games = history.games();
        EvidenceSets {
            player: history.player(),
            vs_opponent: self.vs_opponent.iter().map(|&i| &games[i]).collect(),
            recent: self.recent.iter().map(|&i| &games[i]).collect(),
        }
    }
}

pub struct MatchupFilter {
    window: usize,
}

impl MatchupFilter {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn split<'a>(&self, history: &'a PlayerHistory, opponent: &str) -> EvidenceSets<'a> {
        self.split_indices(history, opponent).resolve(history)
    }

    pub fn split_indices(&self, history: &PlayerHistory, opponent: &str) -> EvidenceIndices {
        EvidenceIndices {
            vs_opponent: games_against(history, opponent),
            recent: self.recent_games(history),
        }
    }

    fn recent_games(&self, history: &PlayerHistory) -> Vec<usize> {
        history
            .recent_first()
            .take(self.window)
            .map(|(i, _)| i)
            .collect()
    }
}

fn games_against(history: &PlayerHistory, opponent: &str) -> Vec<usize> {
    history
        .games()
        .iter()
        .enumerate()
        .filter(|(_, g)| g.is_against(opponent))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatLine;
    use chrono::NaiveDate;

    fn history(opponents: &[&str]) -> PlayerHistory {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let games = opponents
            .iter()
            .enumerate()
            .map(|(i, opp)| GameRecord {
                date: start + chrono::Duration::days(i as i64 * 2),
                team: "LAL".to_string(),
                opponent: opp.to_string(),
                home: i % 2 == 0,
                stats: StatLine {
                    points: i as u32,
                    ..StatLine::default()
                },
            })
            .collect();
        PlayerHistory::new("Test Player", games)
    }

    #[test]
    fn test_split_orders_each_set() {
        let history = history(&["BOS", "MIA", "BOS", "NYK", "DEN", "BOS", "PHX"]);
        let sets = MatchupFilter::new(3).split(&history, "BOS");

        let vs: Vec<u32> = sets.vs_opponent.iter().map(|g| g.stats.points).collect();
        assert_eq!(vs, vec![0, 2, 5]);

        let recent: Vec<u32> = sets.recent.iter().map(|g| g.stats.points).collect();
        assert_eq!(recent, vec![6, 5, 4]);
    }

    #[test]
    fn test_short_history_returns_everything_recent() {
        let history = history(&["MIA", "NYK"]);
        let sets = MatchupFilter::new(5).split(&history, "BOS");

        assert!(sets.vs_opponent.is_empty());
        assert_eq!(sets.recent.len(), 2);
    }

    #[test]
    fn test_indices_point_into_history() {
        let history = history(&["BOS", "MIA", "BOS"]);
        let indices = MatchupFilter::new(2).split_indices(&history, "bos");
        assert_eq!(indices.vs_opponent, vec![0, 2]);
        assert_eq!(indices.recent, vec![2, 1]);
    }

    #[test]
    fn test_split_leaves_history_untouched() {
        let history = history(&["BOS", "MIA", "NYK"]);
        let before = history.clone();
        let _ = MatchupFilter::new(2).split(&history, "MIA");
        assert_eq!(history, before);
    }
}
