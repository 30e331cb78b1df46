pub mod settings;
pub mod teams;

pub use settings::{AppConfig, EngineSettings};
pub use teams::{TeamConfig, get_teams, resolve_team};
