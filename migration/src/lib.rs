pub use sea_orm_migration::prelude::*;

mod m20240301_000001_bots;
mod m20240301_000002_tags;
mod m20240302_000001_webhooks;

pub struct Migrator;
pub use m20240301_000001_bots::Bot;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_bots::Migration),
            Box::new(m20240301_000002_tags::Migration),
            Box::new(m20240302_000001_webhooks::Migration),
        ]
    }
}
