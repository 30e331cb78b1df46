pub mod models;
pub mod season;

pub use models::*;
pub use season::season_for;
