use entity::bot;

use crate::{
    api::db::bot_filter,
    models::FiltersBotInput,
    pagination::{
        CountMode, Page, PageOptions, PaginationError, PaginationInput, Paginator, Store, Table,
    },
};

const SORTABLE: &[&str] = &["name", "votes", "guildCount", "createdAt"];

pub(crate) struct BotService {
    table: Table<bot::Entity>,
}

impl BotService {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new().with_sortable(SORTABLE),
        }
    }

    pub(crate) async fn paginate_bots<S: Store>(
        &self,
        paginator: &Paginator<S>,
        filters: &FiltersBotInput,
        pagination: PaginationInput,
        count: CountMode,
    ) -> Result<Page<bot::Model>, PaginationError> {
        let options = PageOptions::builder()
            .pagination(pagination)
            .filter(bot_filter(filters))
            .count(count)
            .build();
        paginator.paginate(&self.table, options).await
    }
}
