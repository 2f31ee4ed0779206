use axum::{
    extract::{Path, State},
    Json,
};
use axum_macros::debug_handler;

use crate::models::TagObject;

use super::{ApiContext, ApiErrors};

/// Get tag
///
/// Fetches a tag by name.
#[debug_handler]
#[utoipa::path(
    get,
    path = "/tags/{tag_id}",
    operation_id = "getTag",
    params(
        ("tag_id" = String, Path, description = "Tag name", min_length = 1, max_length = 20),
    ),
    responses(
        (status = OK, description = "Tag", body = TagObject),
        (status = NOT_FOUND, description = "Tag not found"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_TAGS,
)]
pub(crate) async fn api_get_tag(
    State(ctx): State<ApiContext>,
    Path(tag_id): Path<String>,
) -> Result<Json<TagObject>, ApiErrors> {
    ctx.data_service
        .get_tag(&tag_id)
        .await
        .map_err(ApiErrors::from)?
        .map(Json)
        .ok_or(ApiErrors::NotFound(tag_id))
}
