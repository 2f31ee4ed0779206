use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

pub mod api;
mod axumext;
pub mod config;
pub mod models;
mod monitoring;
pub mod pagination;

pub async fn migrate(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    Migrator::up(db, None)
        .await
        .context("Database migration failed")
}

pub async fn danger_drop_database_tables(db: &DatabaseConnection) -> Result<(), anyhow::Error> {
    Migrator::down(db, None)
        .await
        .context("Database migration failed")
}
