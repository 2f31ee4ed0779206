use axum::{extract::State, Json};
use axum_macros::debug_handler;

use crate::{
    axumext::extractors::ValidatedQueryParams,
    models::{FiltersWebhookInput, WebhookObject},
    pagination::{Page, PaginationInput},
};

use super::{ApiContext, ApiErrors};

/// List webhooks
///
/// Secrets are not included.
#[debug_handler]
#[utoipa::path(
    get,
    path = "/webhooks",
    operation_id = "listWebhooks",
    params(PaginationInput, FiltersWebhookInput),
    responses(
        (status = OK, description = "Page of webhooks", body = Page<WebhookObject>),
        (status = BAD_REQUEST, description = "Invalid pagination or filter"),
        (status = INTERNAL_SERVER_ERROR, description = "Internal server error"),
    ),
    tag = super::TAG_WEBHOOKS,
)]
pub(crate) async fn api_list_webhooks(
    State(ctx): State<ApiContext>,
    ValidatedQueryParams(pagination): ValidatedQueryParams<PaginationInput>,
    ValidatedQueryParams(filters): ValidatedQueryParams<FiltersWebhookInput>,
) -> Result<Json<Page<WebhookObject>>, ApiErrors> {
    ctx.data_service
        .paginate_webhooks(&filters, pagination)
        .await
        .map(Json)
        .map_err(ApiErrors::from)
}
