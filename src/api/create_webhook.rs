use axum::{extract::State, http::StatusCode, Json};
use axum_macros::debug_handler;
use sea_orm::SqlErr;
use tracing::{error, warn};
use validator::Validate;

use crate::models::{CreateWebhookInput, WebhookObject};

use super::{ApiContext, ApiErrors};

/// Register webhook
///
/// The secret is stored but never returned.
#[debug_handler]
#[utoipa::path(
    post,
    path = "/webhooks",
    operation_id = "createWebhook",
    request_body = CreateWebhookInput,
    responses(
        (status = CREATED, description = "Webhook created", body = WebhookObject),
        (status = BAD_REQUEST, description = "Invalid webhook"),
        (status = NOT_FOUND, description = "Bot not found"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_WEBHOOKS,
)]
pub(crate) async fn api_create_webhook(
    State(ctx): State<ApiContext>,
    Json(payload): Json<CreateWebhookInput>,
) -> Result<(StatusCode, Json<WebhookObject>), ApiErrors> {
    payload.validate().map_err(ApiErrors::from)?;

    let webhook = ctx
        .data_service
        .create_webhook(&payload)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                warn!("Webhook for unknown bot {}", payload.bot_id);
                ApiErrors::NotFound(format!("Bot {} not found", payload.bot_id))
            }
            _ => {
                error!("Cannot create webhook for bot {}: {}", payload.bot_id, err);
                ApiErrors::InternalServerError
            }
        })?;

    Ok((StatusCode::CREATED, Json(webhook)))
}
