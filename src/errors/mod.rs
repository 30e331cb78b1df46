use thiserror::Error;

/// Everything that can go wrong while answering a threshold query
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown stat category: {0}")]
    UnknownCategory(String),

    #[error("Invalid threshold {0}: must be greater than zero")]
    InvalidThreshold(f64),

    #[error("Invalid recency window {0}: must cover at least one game")]
    InvalidWindow(usize),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("{player} plays for {team} and cannot be matched up against their own team")]
    SelfMatchup { player: String, team: String },

    #[error("Not enough games for {0} to compute a likelihood")]
    InsufficientData(String),

    #[error("Game log store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::UnknownCategory(_) => "unknown_category",
            EngineError::InvalidThreshold(_) => "invalid_threshold",
            EngineError::InvalidWindow(_) => "invalid_window",
            EngineError::PlayerNotFound(_) => "player_not_found",
            EngineError::TeamNotFound(_) => "team_not_found",
            EngineError::SelfMatchup { .. } => "self_matchup",
            EngineError::InsufficientData(_) => "insufficient_data",
            EngineError::Store(_) => "store",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = EngineError::UnknownCategory("turnovers".to_string());
        assert_eq!(err.to_string(), "Unknown stat category: turnovers");

        let err = EngineError::SelfMatchup {
            player: "LeBron James".to_string(),
            team: "LAL".to_string(),
        };
        assert!(err.to_string().contains("LAL"));
        assert_eq!(err.kind(), "self_matchup");
    }

    #[test]
    fn test_store_errors_wrap_anyhow() {
        let err: EngineError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.kind(), "store");
        assert!(err.to_string().contains("disk on fire"));
    }
}
