use chrono::Utc;
use entity::{
    bot, tag,
    webhook::{self, WebhookEvents, WebhookPayloadFields},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Set,
};
use tracing::{debug, error, info};

use uuid::Uuid;

use crate::models::{CreateWebhookInput, FiltersBotInput, FiltersTagInput, FiltersWebhookInput};

fn search_term(query: &Option<String>) -> Option<&str> {
    query.as_deref().map(str::trim).filter(|q| !q.is_empty())
}

pub(crate) fn bot_filter(filters: &FiltersBotInput) -> Option<Condition> {
    let mut condition = Condition::all();
    let mut any = false;

    if let Some(status) = filters.status {
        condition = condition.add(bot::Column::Status.eq(status));
        any = true;
    }

    if let Some(term) = search_term(&filters.query) {
        condition = condition.add(
            Condition::any()
                .add(bot::Column::Name.contains(term))
                .add(bot::Column::ShortDescription.contains(term)),
        );
        any = true;
    }

    any.then_some(condition)
}

pub(crate) fn tag_filter(filters: &FiltersTagInput) -> Option<Condition> {
    search_term(&filters.query).map(|term| Condition::all().add(tag::Column::Id.contains(term)))
}

pub(crate) fn webhook_filter(filters: &FiltersWebhookInput) -> Option<Condition> {
    let mut condition = Condition::all();
    let mut any = false;

    if let Some(ref bot_id) = filters.bot_id {
        condition = condition.add(webhook::Column::BotId.eq(bot_id.as_str()));
        any = true;
    }

    if let Some(term) = search_term(&filters.query) {
        condition = condition.add(webhook::Column::Url.contains(term));
        any = true;
    }

    any.then_some(condition)
}

pub(crate) async fn get_tag_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<tag::Model>, DbErr> {
    let query_result = tag::Entity::find_by_id(id).one(db).await;

    match query_result {
        Ok(Some(tag)) => {
            debug!("Tag {} found", tag.id);
            Ok(Some(tag))
        }
        Ok(None) => {
            info!("Tag not found: {}", id);
            Ok(None)
        }
        Err(dberr) => {
            error!("Failed to read tag {}: {}", id, dberr);
            Err(dberr)
        }
    }
}

pub(crate) async fn insert_tag(db: &DatabaseConnection, id: &str) -> Result<tag::Model, DbErr> {
    let model = tag::ActiveModel {
        id: Set(id.to_string()),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await?;
    info!("Created new tag: {}", model.id);
    Ok(model)
}

pub(crate) async fn insert_webhook(
    db: &DatabaseConnection,
    input: &CreateWebhookInput,
) -> Result<webhook::Model, DbErr> {
    let model = webhook::ActiveModel {
        id: Set(Uuid::new_v4()),
        bot_id: Set(input.bot_id.clone()),
        url: Set(input.url.clone()),
        secret: Set(input.secret.clone()),
        events: Set(WebhookEvents(input.events.clone())),
        payload_fields: Set(WebhookPayloadFields(input.payload_fields.clone())),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await?;
    info!("Created webhook {} for bot {}", model.id, model.bot_id);
    Ok(model)
}

#[cfg(test)]
mod tests {
    use entity::bot::BotStatus;
    use sea_orm::{DatabaseBackend, QueryFilter, QueryTrait};

    use super::*;

    fn bot_sql(filters: &FiltersBotInput) -> String {
        let mut query = bot::Entity::find();
        if let Some(condition) = bot_filter(filters) {
            query = query.filter(condition);
        }
        query.build(DatabaseBackend::Postgres).to_string()
    }

    #[test]
    fn no_bot_filters() {
        assert!(bot_filter(&FiltersBotInput::default()).is_none());
        assert!(!bot_sql(&FiltersBotInput::default()).contains("WHERE"));
    }

    #[test]
    fn bot_status_and_query() {
        // Arrange
        let filters = FiltersBotInput {
            status: Some(BotStatus::Approved),
            query: Some(" music ".to_string()),
        };

        // Act
        let sql = bot_sql(&filters);

        // Assert
        assert!(sql.contains(r#""bot"."status" = 'APPROVED'"#), "{sql}");
        assert!(sql.contains(r#""bot"."name" LIKE '%music%'"#), "{sql}");
        assert!(
            sql.contains(r#""bot"."short_description" LIKE '%music%'"#),
            "{sql}"
        );
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn blank_query_is_ignored() {
        let filters = FiltersBotInput {
            status: None,
            query: Some("   ".to_string()),
        };
        assert!(bot_filter(&filters).is_none());
        assert!(tag_filter(&FiltersTagInput {
            query: Some(String::new())
        })
        .is_none());
    }

    #[test]
    fn webhook_filters() {
        let filters = FiltersWebhookInput {
            bot_id: Some("1093287492347381823".to_string()),
            query: Some("example.org".to_string()),
        };

        let sql = webhook::Entity::find()
            .filter(webhook_filter(&filters).unwrap())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(
            sql.contains(r#""webhook"."bot_id" = '1093287492347381823'"#),
            "{sql}"
        );
        assert!(sql.contains(r#""webhook"."url" LIKE '%example.org%'"#), "{sql}");
    }
}
