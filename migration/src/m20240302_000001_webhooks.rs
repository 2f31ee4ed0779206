use sea_orm_migration::prelude::*;

use crate::Bot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Webhook::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Webhook::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Webhook::BotId).string_len(20).not_null())
                    .col(ColumnDef::new(Webhook::Url).string_len(255).not_null())
                    .col(ColumnDef::new(Webhook::Secret).string_len(255).not_null())
                    .col(ColumnDef::new(Webhook::Events).json().not_null())
                    .col(ColumnDef::new(Webhook::PayloadFields).json().not_null())
                    .col(
                        ColumnDef::new(Webhook::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-webhook-bot_id")
                            .from(Webhook::Table, Webhook::BotId)
                            .to(Bot::Table, Bot::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-webhook-bot_id")
                    .table(Webhook::Table)
                    .col(Webhook::BotId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Webhook::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Webhook {
    Table,
    Id,
    BotId,
    Url,
    Secret,
    Events,
    PayloadFields,
    CreatedAt,
}
