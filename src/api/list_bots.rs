use axum::{extract::State, Json};
use axum_macros::debug_handler;

use crate::{
    axumext::extractors::ValidatedQueryParams,
    models::{BotObject, FiltersBotInput},
    pagination::{Page, PaginationInput},
};

use super::{ApiContext, ApiErrors};

/// List bots
///
/// Fetches a page of bots, optionally filtered by status or a search term.
#[debug_handler]
#[utoipa::path(
    get,
    path = "/bots",
    operation_id = "listBots",
    params(PaginationInput, FiltersBotInput),
    responses(
        (status = OK, description = "Page of bots", body = Page<BotObject>),
        (status = BAD_REQUEST, description = "Invalid pagination or filter"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_BOTS,
)]
pub(crate) async fn api_list_bots(
    State(ctx): State<ApiContext>,
    ValidatedQueryParams(pagination): ValidatedQueryParams<PaginationInput>,
    ValidatedQueryParams(filters): ValidatedQueryParams<FiltersBotInput>,
) -> Result<Json<Page<BotObject>>, ApiErrors> {
    let page = ctx
        .data_service
        .paginate_bots(&filters, pagination)
        .await
        .map_err(ApiErrors::from)?;
    Ok(Json(page))
}
