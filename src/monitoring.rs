use std::sync::Arc;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tracing::warn;

pub struct HealthMonitor {
    db: Arc<DatabaseConnection>,
}

impl HealthMonitor {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn is_healthy(&self) -> bool {
        match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}

pub(crate) fn health_routes(monitor: Arc<HealthMonitor>) -> Router {
    Router::new().route("/up", get(|| async { "OK" })).route(
        "/health",
        get(move || async move {
            if monitor.is_healthy().await {
                (axum::http::StatusCode::OK, "OK")
            } else {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "UNHEALTHY")
            }
        }),
    )
}
