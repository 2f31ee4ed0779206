use entity::webhook;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    api::db::{insert_webhook, webhook_filter},
    models::{CreateWebhookInput, FiltersWebhookInput},
    pagination::{
        CountMode, Page, PageOptions, PaginationError, PaginationInput, Paginator, Store, Table,
    },
};

const SORTABLE: &[&str] = &["url", "createdAt"];

pub(crate) struct WebhookService {
    table: Table<webhook::Entity>,
}

impl WebhookService {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new().with_sortable(SORTABLE),
        }
    }

    pub(crate) async fn paginate_webhooks<S: Store>(
        &self,
        paginator: &Paginator<S>,
        filters: &FiltersWebhookInput,
        pagination: PaginationInput,
        count: CountMode,
    ) -> Result<Page<webhook::Model>, PaginationError> {
        let options = PageOptions::builder()
            .pagination(pagination)
            .filter(webhook_filter(filters))
            .count(count)
            .build();
        paginator.paginate(&self.table, options).await
    }

    pub(crate) async fn create_webhook(
        &self,
        db: &DatabaseConnection,
        input: &CreateWebhookInput,
    ) -> Result<webhook::Model, DbErr> {
        insert_webhook(db, input).await
    }
}
