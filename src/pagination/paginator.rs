use sea_orm::{Condition, QueryFilter, QueryOrder, QuerySelect, Select};
use tracing::debug;
use typed_builder::TypedBuilder;

use super::{
    collection::{CollectionDescriptor, ColumnOf, ModelOf},
    normalize::{normalize, FetchParams},
    page::Page,
    request::PaginationInput,
    store::Store,
    PaginationError,
};

/// How the envelope's counts are obtained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// One windowed fetch; counts describe the returned window only and a
    /// full window is reported as having a next page.
    #[default]
    Window,
    /// An additional count query over the filtered collection.
    Exact,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct PageOptions {
    pagination: PaginationInput,
    #[builder(default, setter(into))]
    filter: Option<Condition>,
    #[builder(default)]
    count: CountMode,
}

/// Page fetcher. Holds no state besides the injected store handle.
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    store: S,
}

impl<S: Store> Paginator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn paginate<D>(
        &self,
        collection: &D,
        options: PageOptions,
    ) -> Result<Page<ModelOf<D>>, PaginationError>
    where
        D: CollectionDescriptor,
        ModelOf<D>: Sync,
    {
        let params = normalize(&options.pagination, collection)?;
        debug!(
            "Fetching {} offset={} limit={} count={:?}",
            collection.name(),
            params.offset,
            params.limit,
            options.count
        );

        match options.count {
            CountMode::Window => {
                let nodes = self
                    .store
                    .fetch(build_query(collection, options.filter, &params))
                    .await?;
                debug!("Found {} {} record(s)", nodes.len(), collection.name());
                Ok(Page::from_window(nodes, params.page, params.limit))
            }
            CountMode::Exact => {
                let mut filtered = collection.select();
                if let Some(filter) = options.filter.clone() {
                    filtered = filtered.filter(filter);
                }
                let total = self.store.count(filtered).await?;
                let nodes = self
                    .store
                    .fetch(build_query(collection, options.filter, &params))
                    .await?;
                debug!(
                    "Found {} of {} {} record(s)",
                    nodes.len(),
                    total,
                    collection.name()
                );
                Ok(Page::from_total(
                    nodes,
                    params.page,
                    params.offset,
                    params.limit,
                    total,
                ))
            }
        }
    }
}

/// Windowed, optionally filtered and ordered select for a collection.
pub fn build_query<D>(
    collection: &D,
    filter: Option<Condition>,
    params: &FetchParams<ColumnOf<D>>,
) -> Select<D::Entity>
where
    D: CollectionDescriptor,
{
    let mut query = collection.select();
    if let Some(filter) = filter {
        query = query.filter(filter);
    }
    if let Some(column) = params.order_by {
        query = query.order_by(column, params.direction.into());
    }
    query.limit(params.limit).offset(params.offset)
}
