use chrono::{Datelike, NaiveDate};

/// First month of a new NBA season
const SEASON_START_MONTH: u32 = 10;

/// NBA season label ("2023-24") a game date belongs to
pub fn season_for(date: NaiveDate) -> String {
    let start_year = season_start_year(date);
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

fn season_start_year(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_october_opens_a_new_season() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 24).unwrap();
        assert_eq!(season_for(date), "2023-24");
    }

    #[test]
    fn test_spring_games_belong_to_previous_year_start() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
        assert_eq!(season_for(date), "2023-24");
    }

    #[test]
    fn test_century_rollover_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2099, 11, 1).unwrap();
        assert_eq!(season_for(date), "2099-00");
    }
}
