use axum::{extract::State, Json};
use axum_macros::debug_handler;

use crate::{
    axumext::extractors::ValidatedQueryParams,
    models::{FiltersTagInput, TagObject},
    pagination::{Page, PaginationInput},
};

use super::{ApiContext, ApiErrors};

/// List tags
#[debug_handler]
#[utoipa::path(
    get,
    path = "/tags",
    operation_id = "listTags",
    params(PaginationInput, FiltersTagInput),
    responses(
        (status = OK, description = "Page of tags", body = Page<TagObject>),
        (status = BAD_REQUEST, description = "Invalid pagination or filter"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_TAGS,
)]
pub(crate) async fn api_list_tags(
    State(ctx): State<ApiContext>,
    ValidatedQueryParams(pagination): ValidatedQueryParams<PaginationInput>,
    ValidatedQueryParams(filters): ValidatedQueryParams<FiltersTagInput>,
) -> Result<Json<Page<TagObject>>, ApiErrors> {
    ctx.data_service
        .paginate_tags(&filters, pagination)
        .await
        .map(Json)
        .map_err(ApiErrors::from)
}
