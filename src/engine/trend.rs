use super::category::StatCategory;
use super::extractor::StatExtractor;
use super::types::{TrendPoint, TrendSeries};
use crate::domain::PlayerHistory;

/// Full chronological series of one category for display
pub fn build_trend(history: &PlayerHistory, category: StatCategory) -> TrendSeries {
    let points = history
        .games()
        .iter()
        .map(|game| StatExtractor::extract(game, category))
        .map(|sample| TrendPoint {
            date: sample.date,
            value: sample.value,
        })
        .collect();

    TrendSeries {
        player: history.player().to_string(),
        category,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameRecord, StatLine};
    use chrono::NaiveDate;

    #[test]
    fn test_trend_has_one_point_per_game_in_order() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let games = (0..4)
            .map(|i| GameRecord {
                date: start + chrono::Duration::days(i),
                team: "DEN".to_string(),
                opponent: "UTA".to_string(),
                home: true,
                stats: StatLine {
                    assists: 10 + i as u32,
                    ..StatLine::default()
                },
            })
            .collect();
        let history = PlayerHistory::new("Test Player", games);

        let trend = build_trend(&history, StatCategory::Assists);
        assert_eq!(trend.len(), 4);
        assert_eq!(trend.points[0].date, start);
        assert_eq!(trend.points.iter().map(|p| p.value).collect::<Vec<_>>(), vec![10, 11, 12, 13]);
        assert!(trend.points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_empty_history_gives_empty_trend() {
        let trend = build_trend(&PlayerHistory::empty("Rookie"), StatCategory::Points);
        assert!(trend.is_empty());
        assert_eq!(trend.player, "Rookie");
    }
}
