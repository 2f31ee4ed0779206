//! Offset based page slicing over any sea-orm entity.
//!
//! A resource service builds a [`Condition`](sea_orm::Condition), hands it to
//! [`Paginator::paginate`] together with the raw [`PaginationInput`] and a
//! [`CollectionDescriptor`], and receives a [`Page`] envelope.

mod collection;
mod normalize;
mod page;
mod paginator;
mod request;
mod store;

use sea_orm::DbErr;
use thiserror::Error;

pub use self::{
    collection::{CollectionDescriptor, ColumnOf, ModelOf, Table},
    normalize::{normalize, FetchParams},
    page::{Page, PageInfo},
    paginator::{build_query, CountMode, PageOptions, Paginator},
    request::{PaginationInput, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    store::Store,
};

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Unknown sort field {field} for {collection}")]
    UnknownSortField { collection: String, field: String },
    #[error("Fetch failed: {0}")]
    Store(#[from] DbErr),
}
