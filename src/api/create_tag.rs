use axum::{extract::State, http::StatusCode, Json};
use axum_macros::debug_handler;
use sea_orm::SqlErr;
use tracing::{error, warn};
use validator::Validate;

use crate::models::{CreateTagInput, TagObject};

use super::{ApiContext, ApiErrors};

/// Create tag
#[debug_handler]
#[utoipa::path(
    post,
    path = "/tags",
    operation_id = "createTag",
    request_body = CreateTagInput,
    responses(
        (status = CREATED, description = "Tag created", body = TagObject),
        (status = BAD_REQUEST, description = "Invalid or duplicate tag"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_TAGS,
)]
pub(crate) async fn api_create_tag(
    State(ctx): State<ApiContext>,
    Json(payload): Json<CreateTagInput>,
) -> Result<(StatusCode, Json<TagObject>), ApiErrors> {
    payload.validate().map_err(ApiErrors::from)?;

    let tag = ctx
        .data_service
        .create_tag(&payload.id)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                warn!("Duplicate tag {}", payload.id);
                ApiErrors::BadRequest("Duplicate tag".to_string())
            }
            _ => {
                error!("Cannot create tag {}: {}", payload.id, err);
                ApiErrors::InternalServerError
            }
        })?;

    Ok((StatusCode::CREATED, Json(tag)))
}
