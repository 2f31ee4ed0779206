use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    models::{
        BotObject, CreateWebhookInput, FiltersBotInput, FiltersTagInput, FiltersWebhookInput,
        TagObject, WebhookObject,
    },
    pagination::{CountMode, Page, PaginationError, PaginationInput, Paginator},
};

mod bot_service;
mod tag_service;
mod webhook_service;

/// Resource level operations used by the HTTP handlers.
#[async_trait]
pub trait DataService: Sync + Send {
    async fn paginate_bots(
        &self,
        filters: &FiltersBotInput,
        pagination: PaginationInput,
    ) -> Result<Page<BotObject>, PaginationError>;
    async fn paginate_tags(
        &self,
        filters: &FiltersTagInput,
        pagination: PaginationInput,
    ) -> Result<Page<TagObject>, PaginationError>;
    async fn paginate_webhooks(
        &self,
        filters: &FiltersWebhookInput,
        pagination: PaginationInput,
    ) -> Result<Page<WebhookObject>, PaginationError>;
    async fn get_tag(&self, id: &str) -> Result<Option<TagObject>, DbErr>;
    async fn create_tag(&self, id: &str) -> Result<TagObject, DbErr>;
    async fn create_webhook(&self, input: &CreateWebhookInput) -> Result<WebhookObject, DbErr>;
}

pub struct BotlistDataService {
    db: Arc<DatabaseConnection>,
    paginator: Paginator<Arc<DatabaseConnection>>,
    count_mode: CountMode,
    bot_service: bot_service::BotService,
    tag_service: tag_service::TagService,
    webhook_service: webhook_service::WebhookService,
}

impl BotlistDataService {
    pub fn new(db: Arc<DatabaseConnection>, count_mode: CountMode) -> Self {
        Self {
            paginator: Paginator::new(Arc::clone(&db)),
            db,
            count_mode,
            bot_service: bot_service::BotService::new(),
            tag_service: tag_service::TagService::new(),
            webhook_service: webhook_service::WebhookService::new(),
        }
    }
}

#[async_trait]
impl DataService for BotlistDataService {
    async fn paginate_bots(
        &self,
        filters: &FiltersBotInput,
        pagination: PaginationInput,
    ) -> Result<Page<BotObject>, PaginationError> {
        self.bot_service
            .paginate_bots(&self.paginator, filters, pagination, self.count_mode)
            .await
            .map(|page| page.map(BotObject::from))
    }

    async fn paginate_tags(
        &self,
        filters: &FiltersTagInput,
        pagination: PaginationInput,
    ) -> Result<Page<TagObject>, PaginationError> {
        self.tag_service
            .paginate_tags(&self.paginator, filters, pagination, self.count_mode)
            .await
            .map(|page| page.map(TagObject::from))
    }

    async fn paginate_webhooks(
        &self,
        filters: &FiltersWebhookInput,
        pagination: PaginationInput,
    ) -> Result<Page<WebhookObject>, PaginationError> {
        self.webhook_service
            .paginate_webhooks(&self.paginator, filters, pagination, self.count_mode)
            .await
            .map(|page| page.map(WebhookObject::from))
    }

    async fn get_tag(&self, id: &str) -> Result<Option<TagObject>, DbErr> {
        self.tag_service
            .get_tag(&self.db, id)
            .await
            .map(|tag| tag.map(TagObject::from))
    }

    async fn create_tag(&self, id: &str) -> Result<TagObject, DbErr> {
        self.tag_service
            .create_tag(&self.db, id)
            .await
            .map(TagObject::from)
    }

    async fn create_webhook(&self, input: &CreateWebhookInput) -> Result<WebhookObject, DbErr> {
        self.webhook_service
            .create_webhook(&self.db, input)
            .await
            .map(WebhookObject::from)
    }
}
