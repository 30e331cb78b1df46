use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::StatLine;
use crate::errors::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Blocks,
    Steals,
}

impl StatCategory {
    pub const ALL: [StatCategory; 5] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Blocks,
        StatCategory::Steals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Points => "points",
            StatCategory::Rebounds => "rebounds",
            StatCategory::Assists => "assists",
            StatCategory::Blocks => "blocks",
            StatCategory::Steals => "steals",
        }
    }

    /// Column label used by the stats provider
    pub fn column(&self) -> &'static str {
        match self {
            StatCategory::Points => "PTS",
            StatCategory::Rebounds => "REB",
            StatCategory::Assists => "AST",
            StatCategory::Blocks => "BLK",
            StatCategory::Steals => "STL",
        }
    }

    pub fn value_of(&self, line: &StatLine) -> u32 {
        match self {
            StatCategory::Points => line.points,
            StatCategory::Rebounds => line.rebounds,
            StatCategory::Assists => line.assists,
            StatCategory::Blocks => line.blocks,
            StatCategory::Steals => line.steals,
        }
    }
}

impl FromStr for StatCategory {
    type Err = EngineError;

    /// Accepts the category name or the provider's column label, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        StatCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle) || c.column().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EngineError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
