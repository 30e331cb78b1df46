use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Box score counts for the five tracked categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub blocks: u32,
    pub steals: u32,
}

/// One player's performance in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    /// Team the player suited up for
    pub team: String,
    pub opponent: String,
    pub home: bool,
    pub stats: StatLine,
}

impl GameRecord {
    pub fn is_against(&self, opponent: &str) -> bool {
        self.opponent.eq_ignore_ascii_case(opponent)
    }

    pub fn matchup(&self) -> String {
        if self.home {
            format!("{} vs. {}", self.team, self.opponent)
        } else {
            format!("{} @ {}", self.team, self.opponent)
        }
    }
}

/// A player's game log, oldest game first
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHistory {
    player: String,
    games: Vec<GameRecord>,
}

impl PlayerHistory {
    pub fn new(player: impl Into<String>, games: Vec<GameRecord>) -> Self {
        Self {
            player: player.into(),
            games,
        }
    }

    pub fn empty(player: impl Into<String>) -> Self {
        Self::new(player, Vec::new())
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Most recent game first with its position in the stored order
    pub fn recent_first(&self) -> impl Iterator<Item = (usize, &GameRecord)> {
        self.games.iter().enumerate().rev()
    }

    /// Games played within the inclusive date range; open ends are unbounded
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<&GameRecord> {
        self.games
            .iter()
            .filter(|g| start.is_none_or(|s| g.date >= s))
            .filter(|g| end.is_none_or(|e| g.date <= e))
            .collect()
    }
}

/// Game log row as delivered by the stats provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGameLog {
    #[serde(rename = "PLAYER_NAME")]
    pub player_name: String,
    #[serde(rename = "GAME_DATE")]
    pub game_date: String,
    #[serde(rename = "MATCHUP")]
    pub matchup: String,
    #[serde(rename = "PTS")]
    pub points: u32,
    #[serde(rename = "REB")]
    pub rebounds: u32,
    #[serde(rename = "AST")]
    pub assists: u32,
    #[serde(rename = "BLK", default)]
    pub blocks: u32,
    #[serde(rename = "STL", default)]
    pub steals: u32,
}

impl RawGameLog {
    pub fn stat_line(&self) -> StatLine {
        StatLine {
            points: self.points,
            rebounds: self.rebounds,
            assists: self.assists,
            blocks: self.blocks,
            steals: self.steals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(date: &str, opponent: &str) -> GameRecord {
        GameRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            team: "LAL".to_string(),
            opponent: opponent.to_string(),
            home: true,
            stats: StatLine::default(),
        }
    }

    #[test]
    fn test_recent_first_does_not_reorder_source() {
        let history = PlayerHistory::new(
            "Test Player",
            vec![game("2024-01-01", "BOS"), game("2024-01-03", "MIA"), game("2024-01-05", "NYK")],
        );

        let recent: Vec<_> = history
            .recent_first()
            .map(|(i, g)| (i, g.opponent.as_str()))
            .collect();
        assert_eq!(recent, vec![(2, "NYK"), (1, "MIA"), (0, "BOS")]);
        assert_eq!(history.games()[0].opponent, "BOS");
    }

    #[test]
    fn test_between_is_inclusive_and_open_ended() {
        let history = PlayerHistory::new(
            "Test Player",
            vec![game("2024-01-01", "BOS"), game("2024-01-03", "MIA"), game("2024-01-05", "NYK")],
        );
        let start = NaiveDate::from_ymd_opt(2024, 1, 3);

        assert_eq!(history.between(start, None).len(), 2);
        assert_eq!(history.between(None, start).len(), 2);
        assert_eq!(history.between(start, start).len(), 1);
        assert_eq!(history.between(None, None).len(), 3);
    }

    #[test]
    fn test_matchup_round_trips_home_flag() {
        let mut g = game("2024-01-01", "BOS");
        assert_eq!(g.matchup(), "LAL vs. BOS");
        g.home = false;
        assert_eq!(g.matchup(), "LAL @ BOS");
        assert!(g.is_against("bos"));
    }

    #[test]
    fn test_raw_row_parses_provider_columns() {
        let raw = r#"{"PLAYER_NAME":"LeBron James","GAME_DATE":"OCT 24, 2023","MATCHUP":"LAL @ DEN","PTS":21,"REB":8,"AST":5,"BLK":1}"#;
        let row: RawGameLog = serde_json::from_str(raw).unwrap();
        assert_eq!(row.player_name, "LeBron James");
        assert_eq!(row.stat_line().steals, 0);
        assert_eq!(row.stat_line().points, 21);
    }
}
