use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{AppState, SharedStore};
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::engine::ThresholdEngine;
use crate::store::SqliteStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let store: SharedStore = Box::new(SqliteStore::open(&self.config.database_path)?);
        info!("Serving game logs from {}", self.config.database_path);

        let state = Arc::new(AppState {
            engine: ThresholdEngine::new(store, self.config.engine.clone()),
        });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
