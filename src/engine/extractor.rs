use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::category::StatCategory;
use crate::domain::{GameRecord, RawGameLog};
use crate::errors::EngineResult;

/// A single game projected onto one stat category
#[derive(Debug, Clone, PartialEq)]
pub struct StatSample<'a> {
    pub date: NaiveDate,
    pub opponent: &'a str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Matchup {
    team: String,
    opponent: String,
    home: bool,
}

/// Turns provider rows into typed records and resolves category names
pub struct StatExtractor {
    matchup_regex: Regex,
}

impl StatExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            matchup_regex: Self::compile_regex()?,
        })
    }

    pub fn category(name: &str) -> EngineResult<StatCategory> {
        name.parse()
    }

    pub fn extract<'a>(record: &'a GameRecord, category: StatCategory) -> StatSample<'a> {
        StatSample {
            date: record.date,
            opponent: &record.opponent,
            value: category.value_of(&record.stats),
        }
    }

    pub fn normalize(&self, raw: &RawGameLog) -> Result<GameRecord> {
        let date = parse_game_date(&raw.game_date)?;
        let matchup = self
            .parse_matchup(&raw.matchup)
            .with_context(|| format!("Bad matchup for {} on {}", raw.player_name, raw.game_date))?;

        Ok(GameRecord {
            date,
            team: matchup.team,
            opponent: matchup.opponent,
            home: matchup.home,
            stats: raw.stat_line(),
        })
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^\s*([A-Za-z]{2,4})\s+(vs\.?|@)\s+([A-Za-z]{2,4})\s*$")
            .context("Failed to compile matchup regex")
    }

    // --- Parsing ---

    fn parse_matchup(&self, text: &str) -> Result<Matchup> {
        let Some(captures) = self.matchup_regex.captures(text) else {
            bail!("Unrecognised matchup: {:?}", text);
        };

        Ok(Matchup {
            team: captures[1].to_ascii_uppercase(),
            opponent: captures[3].to_ascii_uppercase(),
            home: captures[2].starts_with("vs"),
        })
    }
}

fn parse_game_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    // Provider format: "OCT 24, 2023"
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%b %d, %Y") {
        return Ok(date);
    }

    bail!("Failed to parse game date: {}", date_str)
}
