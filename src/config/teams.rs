use crate::errors::{EngineError, EngineResult};

/// NBA franchise as it appears in game log matchup strings
///
/// The abbreviation is the canonical identifier used throughout the engine;
/// full names are accepted from users and mapped back to it.
#[derive(Debug, Clone)]
pub struct TeamConfig {
    pub abbreviation: &'static str,
    pub name: &'static str,
}

impl TeamConfig {
    pub const fn new(abbreviation: &'static str, name: &'static str) -> Self {
        Self { abbreviation, name }
    }
}

static TEAMS: [TeamConfig; 30] = [
    TeamConfig::new("ATL", "Atlanta Hawks"),
    TeamConfig::new("BOS", "Boston Celtics"),
    TeamConfig::new("BKN", "Brooklyn Nets"),
    TeamConfig::new("CHA", "Charlotte Hornets"),
    TeamConfig::new("CHI", "Chicago Bulls"),
    TeamConfig::new("CLE", "Cleveland Cavaliers"),
    TeamConfig::new("DAL", "Dallas Mavericks"),
    TeamConfig::new("DEN", "Denver Nuggets"),
    TeamConfig::new("DET", "Detroit Pistons"),
    TeamConfig::new("GSW", "Golden State Warriors"),
    TeamConfig::new("HOU", "Houston Rockets"),
    TeamConfig::new("IND", "Indiana Pacers"),
    TeamConfig::new("LAC", "LA Clippers"),
    TeamConfig::new("LAL", "Los Angeles Lakers"),
    TeamConfig::new("MEM", "Memphis Grizzlies"),
    TeamConfig::new("MIA", "Miami Heat"),
    TeamConfig::new("MIL", "Milwaukee Bucks"),
    TeamConfig::new("MIN", "Minnesota Timberwolves"),
    TeamConfig::new("NOP", "New Orleans Pelicans"),
    TeamConfig::new("NYK", "New York Knicks"),
    TeamConfig::new("OKC", "Oklahoma City Thunder"),
    TeamConfig::new("ORL", "Orlando Magic"),
    TeamConfig::new("PHI", "Philadelphia 76ers"),
    TeamConfig::new("PHX", "Phoenix Suns"),
    TeamConfig::new("POR", "Portland Trail Blazers"),
    TeamConfig::new("SAC", "Sacramento Kings"),
    TeamConfig::new("SAS", "San Antonio Spurs"),
    TeamConfig::new("TOR", "Toronto Raptors"),
    TeamConfig::new("UTA", "Utah Jazz"),
    TeamConfig::new("WAS", "Washington Wizards"),
];

/// Get the list of NBA teams known to the engine
pub fn get_teams() -> &'static [TeamConfig] {
    &TEAMS
}

/// Resolve an abbreviation or full franchise name to its canonical abbreviation
pub fn resolve_team(input: &str) -> EngineResult<&'static str> {
    let needle = input.trim();
    get_teams()
        .iter()
        .find(|team| {
            team.abbreviation.eq_ignore_ascii_case(needle) || team.name.eq_ignore_ascii_case(needle)
        })
        .map(|team| team.abbreviation)
        .ok_or_else(|| EngineError::TeamNotFound(input.to_string()))
}
