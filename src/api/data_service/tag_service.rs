use entity::tag;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    api::db::{get_tag_by_id, insert_tag, tag_filter},
    models::FiltersTagInput,
    pagination::{
        CountMode, Page, PageOptions, PaginationError, PaginationInput, Paginator, Store, Table,
    },
};

const SORTABLE: &[&str] = &["id", "createdAt"];

pub(crate) struct TagService {
    table: Table<tag::Entity>,
}

impl TagService {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new().with_sortable(SORTABLE),
        }
    }

    pub(crate) async fn paginate_tags<S: Store>(
        &self,
        paginator: &Paginator<S>,
        filters: &FiltersTagInput,
        pagination: PaginationInput,
        count: CountMode,
    ) -> Result<Page<tag::Model>, PaginationError> {
        let options = PageOptions::builder()
            .pagination(pagination)
            .filter(tag_filter(filters))
            .count(count)
            .build();
        paginator.paginate(&self.table, options).await
    }

    pub(crate) async fn get_tag(
        &self,
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<Option<tag::Model>, DbErr> {
        get_tag_by_id(db, id).await
    }

    pub(crate) async fn create_tag(
        &self,
        db: &DatabaseConnection,
        id: &str,
    ) -> Result<tag::Model, DbErr> {
        insert_tag(db, id).await
    }
}
