mod create_tag;
mod create_webhook;
pub mod data_service;
pub(crate) mod db;
mod get_tag;
mod list_bots;
mod list_tags;
mod list_webhooks;

use std::sync::Arc;
use tokio::signal;

use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use anyhow::Context;
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};
use utoipa::OpenApi;

use crate::{
    config::Settings,
    monitoring::{health_routes, HealthMonitor},
    pagination::PaginationError,
};

use self::{
    create_tag::api_create_tag,
    create_webhook::api_create_webhook,
    data_service::{BotlistDataService, DataService},
    get_tag::api_get_tag,
    list_bots::api_list_bots,
    list_tags::api_list_tags,
    list_webhooks::api_list_webhooks,
};

pub(crate) const TAG_BOTS: &str = "bots";
pub(crate) const TAG_TAGS: &str = "tags";
pub(crate) const TAG_WEBHOOKS: &str = "webhooks";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_bots::api_list_bots,
        list_tags::api_list_tags,
        get_tag::api_get_tag,
        create_tag::api_create_tag,
        list_webhooks::api_list_webhooks,
        create_webhook::api_create_webhook,
    ),
    servers((url = "/api")),
    tags(
        (name = "bots", description = "Bot listing"),
        (name = "tags", description = "Bot tags"),
        (name = "webhooks", description = "Bot webhooks"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub(crate) struct ApiContext {
    data_service: Arc<dyn DataService>,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ApiErrors {
    #[error("Internal server error")]
    InternalServerError,
    #[error("Bad request: {0}")]
    BadRequestJson(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ApiErrors {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiErrors::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            )
                .into_response(),
            ApiErrors::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiErrors::BadRequestJson(jsonstring) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                jsonstring,
            )
                .into_response(),
            ApiErrors::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
        }
    }
}

impl From<DbErr> for ApiErrors {
    fn from(value: DbErr) -> Self {
        match value {
            DbErr::Exec(sea_orm::RuntimeErr::SqlxError(error))
            | DbErr::Query(sea_orm::RuntimeErr::SqlxError(error)) => match error {
                sqlx::error::Error::Database(e) => {
                    let code: String = e.code().unwrap_or_default().to_string();

                    error!("Database runtime error: {}", e);
                    ApiErrors::BadRequest(format!("Cannot run query, code {}", code))
                }
                _ => {
                    error!("Database runtime error: {}", error);
                    ApiErrors::InternalServerError
                }
            },
            DbErr::RecordNotFound(t) => ApiErrors::NotFound(t),
            _ => {
                error!("Database error: {:?}", value);
                ApiErrors::InternalServerError
            }
        }
    }
}

impl From<PaginationError> for ApiErrors {
    fn from(value: PaginationError) -> Self {
        match value {
            PaginationError::UnknownSortField { .. } => ApiErrors::BadRequest(value.to_string()),
            PaginationError::Store(dberr) => ApiErrors::from(dberr),
        }
    }
}

#[derive(Serialize, Debug)]
struct ValidationErrors {
    errors: Vec<String>,
}

impl From<validator::ValidationErrors> for ApiErrors {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiErrors::BadRequestJson(
            serde_json::to_string(&err).unwrap_or_else(|_| {
                serde_json::to_string(&ValidationErrors {
                    errors: vec!["Validation error".to_owned()],
                })
                .unwrap_or_default()
            }),
        )
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

pub async fn serve(db: DatabaseConnection, settings: &Settings) -> anyhow::Result<()> {
    let db = Arc::new(db);
    let data_service = Arc::new(BotlistDataService::new(
        Arc::clone(&db),
        settings.count_mode(),
    ));
    let monitor = Arc::new(HealthMonitor::new(db));
    let app = api_routes(data_service)
        .nest("/app", health_routes(monitor))
        .layer(TraceLayer::new_for_http());

    tracing::debug!("Initializing service...");
    let addr = SocketAddr::new(IpAddr::from_str("::")?, settings.port);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Cannot start server")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running server")?;

    debug!("Shutdown complete");
    Ok(())
}

pub(crate) fn api_routes(data_service: Arc<dyn DataService>) -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .route("/bots", get(api_list_bots))
            .route("/tags", get(api_list_tags).post(api_create_tag))
            .route("/tags/:tag_id", get(api_get_tag))
            .route("/webhooks", get(api_list_webhooks).post(api_create_webhook))
            .with_state(ApiContext { data_service }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_field_is_bad_request() {
        let err = ApiErrors::from(PaginationError::UnknownSortField {
            collection: "bot".to_string(),
            field: "karma".to_string(),
        });

        assert_eq!(
            err,
            ApiErrors::BadRequest("Unknown sort field karma for bot".to_string())
        );
    }

    #[test]
    fn store_errors_map_like_db_errors() {
        let not_found = ApiErrors::from(PaginationError::Store(DbErr::RecordNotFound(
            "tag".to_string(),
        )));
        assert_eq!(not_found, ApiErrors::NotFound("tag".to_string()));

        let other = ApiErrors::from(PaginationError::Store(DbErr::Custom("boom".to_string())));
        assert_eq!(other, ApiErrors::InternalServerError);
    }

    #[test]
    fn openapi_lists_paginated_routes() {
        let doc = ApiDoc::openapi();

        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/bots"));
        assert!(paths.contains_key("/tags"));
        assert!(paths.contains_key("/tags/{tag_id}"));
        assert!(paths.contains_key("/webhooks"));
        assert!(paths["/webhooks"].post.is_some());
    }

    #[test]
    fn openapi_renders_as_json_and_yaml() {
        let doc = ApiDoc::openapi();

        let json = doc.to_pretty_json().unwrap();
        let yaml = doc.to_yaml().unwrap();

        assert!(json.contains("createWebhook"));
        assert!(yaml.contains("listBots"));
    }
}
