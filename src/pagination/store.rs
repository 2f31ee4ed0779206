use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

/// Read access to the backing store, injected into the
/// [`Paginator`](super::Paginator).
#[async_trait]
pub trait Store: Send + Sync {
    /// Runs the query once and returns every row it yields.
    async fn fetch<E>(&self, query: Select<E>) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync;

    /// Counts the rows the query would yield.
    async fn count<E>(&self, query: Select<E>) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync;
}

#[async_trait]
impl Store for DatabaseConnection {
    async fn fetch<E>(&self, query: Select<E>) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        query.all(self).await
    }

    async fn count<E>(&self, query: Select<E>) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        query.count(self).await
    }
}

#[async_trait]
impl<S: Store> Store for Arc<S> {
    async fn fetch<E>(&self, query: Select<E>) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        self.as_ref().fetch(query).await
    }

    async fn count<E>(&self, query: Select<E>) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        self.as_ref().count(query).await
    }
}
