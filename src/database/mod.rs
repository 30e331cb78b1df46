pub mod connection;
pub mod games;
pub mod models;
pub mod players;
pub mod setup;

pub use connection::{DbConn, DbPool, create_pool, get_connection, in_transaction};
pub use models::*;
