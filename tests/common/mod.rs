#![allow(dead_code)]

use chrono::NaiveDate;

use nba_stats_recommender::domain::{GameRecord, StatLine};
use nba_stats_recommender::store::MemoryStore;

pub const PLAYER: &str = "Test Player";

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

pub fn game(day: u32, team: &str, opponent: &str, points: u32) -> GameRecord {
    GameRecord {
        date: date(day),
        team: team.to_string(),
        opponent: opponent.to_string(),
        home: day % 2 == 0,
        stats: StatLine {
            points,
            rebounds: points / 3,
            assists: points / 4,
            blocks: 1,
            steals: 1,
        },
    }
}

/// Ten games for the reference player: four against BOS, then five recent games
/// elsewhere, so the matchup and recency sets do not overlap.
pub fn reference_games() -> Vec<GameRecord> {
    vec![
        game(1, "LAL", "BOS", 28),
        game(3, "LAL", "BOS", 31),
        game(5, "LAL", "MIA", 10),
        game(7, "LAL", "BOS", 19),
        game(9, "LAL", "BOS", 24),
        game(11, "LAL", "NYK", 22),
        game(13, "LAL", "PHX", 30),
        game(15, "LAL", "DAL", 18),
        game(17, "LAL", "MIL", 40),
        game(19, "LAL", "CHI", 25),
    ]
}

pub fn fixture_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for record in reference_games() {
        store.add_game(PLAYER, record);
    }

    let candidates: [(&str, &str, [u32; 4]); 7] = [
        ("Close Match", "MIA", [24, 28, 26, 30]),
        ("Near Twin", "MIA", [20, 30, 25, 28]),
        ("Big Scorer", "DEN", [38, 41, 36, 40]),
        ("Steady Hand", "DEN", [26, 26, 26, 26]),
        ("Streaky Shooter", "PHX", [12, 40, 15, 44]),
        ("Bench Guard", "PHX", [6, 8, 4, 9]),
        ("Boston Star", "BOS", [27, 29, 31, 26]),
    ];
    for (name, team, points) in candidates {
        for (i, p) in points.into_iter().enumerate() {
            store.add_game(name, game(2 + 2 * i as u32, team, "SAS", p));
        }
    }

    store.add_player("Fresh Rookie", "LAL");
    store
}
