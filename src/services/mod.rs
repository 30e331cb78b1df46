pub mod ingestion;
pub mod server;

pub use ingestion::{IngestSummary, IngestionService};
pub use server::ServerService;
