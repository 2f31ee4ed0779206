use std::{collections::HashSet, hash::Hash};

use chrono::{DateTime, Utc};
use entity::{
    bot::BotStatus,
    webhook::{WebhookEvent, WebhookPayloadField},
};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;
use validator::{Validate, ValidationError};

lazy_static::lazy_static! {
    static ref RE_SNOWFLAKE: regex::Regex = regex::Regex::new(r"^\d{17,20}$").unwrap();
    static ref RE_TAG_ID: regex::Regex = regex::Regex::new(r"^[a-z0-9][-a-z0-9]*$").unwrap();
}

const BLOCKED_WEBHOOK_HOSTS: &[&str] = &["discord.com", "discordapp.com"];

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotObject {
    /// Discord application id
    #[schema(examples("1093287492347381823"))]
    pub id: String,

    pub name: String,

    pub short_description: String,

    #[schema(value_type = String, examples("PENDING", "APPROVED", "DENIED"))]
    pub status: BotStatus,

    pub votes: i32,

    pub guild_count: i32,

    pub created_at: DateTime<Utc>,
}

impl From<entity::bot::Model> for BotObject {
    fn from(model: entity::bot::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            short_description: model.short_description,
            status: model.status,
            votes: model.votes,
            guild_count: model.guild_count,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagObject {
    /// Tag name, also its identifier
    #[schema(examples("moderation", "music"))]
    pub id: String,

    pub created_at: DateTime<Utc>,
}

impl From<entity::tag::Model> for TagObject {
    fn from(model: entity::tag::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
        }
    }
}

/// Webhook registration. The signing secret is never part of the response.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookObject {
    pub id: Uuid,

    pub bot_id: String,

    pub url: String,

    /// Events the webhook is notified about
    #[schema(value_type = Vec<String>)]
    pub events: Vec<WebhookEvent>,

    #[schema(value_type = Vec<String>)]
    pub payload_fields: Vec<WebhookPayloadField>,

    pub created_at: DateTime<Utc>,
}

impl From<entity::webhook::Model> for WebhookObject {
    fn from(model: entity::webhook::Model) -> Self {
        Self {
            id: model.id,
            bot_id: model.bot_id,
            url: model.url,
            events: model.events.0,
            payload_fields: model.payload_fields.0,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FiltersBotInput {
    /// Only bots with this status
    #[param(value_type = Option<String>, example = "APPROVED")]
    pub status: Option<BotStatus>,

    /// Substring of the bot name or short description
    #[validate(length(min = 1, max = 64))]
    pub query: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FiltersTagInput {
    /// Substring of the tag name
    #[validate(length(min = 1, max = 20))]
    pub query: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FiltersWebhookInput {
    /// Only webhooks of this bot
    #[validate(regex(path = *RE_SNOWFLAKE))]
    pub bot_id: Option<String>,

    /// Substring of the webhook url
    #[validate(length(min = 1, max = 255))]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateTagInput {
    /// Tag name
    #[validate(length(min = 1, max = 20), regex(path = *RE_TAG_ID))]
    #[schema(examples("moderation"), min_length = 1, max_length = 20)]
    pub id: String,
}

/// Register a webhook for a bot
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookInput {
    #[validate(regex(path = *RE_SNOWFLAKE))]
    #[schema(examples("1093287492347381823"))]
    pub bot_id: String,

    /// Receiver of the webhook calls, http or https
    #[validate(length(max = 2048), custom(function = "validate_webhook_url"))]
    #[schema(examples("https://example.org/hooks/votes"))]
    pub url: String,

    /// Sent along with every call so the receiver can verify the sender
    #[validate(length(min = 1, max = 255))]
    pub secret: String,

    #[serde(default)]
    #[validate(custom(function = "validate_unique_items"))]
    #[schema(value_type = Vec<String>)]
    pub events: Vec<WebhookEvent>,

    #[serde(default)]
    #[validate(custom(function = "validate_unique_items"))]
    #[schema(value_type = Vec<String>)]
    pub payload_fields: Vec<WebhookPayloadField>,
}

fn validate_webhook_url(value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|_| ValidationError::new("url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        let mut error = ValidationError::new("url_scheme");
        error.message = Some("Webhook url must use http or https".into());
        return Err(error);
    }
    match url.host_str() {
        Some(host) if !BLOCKED_WEBHOOK_HOSTS.contains(&host) => Ok(()),
        Some(_) => {
            let mut error = ValidationError::new("url_host");
            error.message = Some("Webhook host is not allowed".into());
            Err(error)
        }
        None => Err(ValidationError::new("url")),
    }
}

fn validate_unique_items<T: Eq + Hash>(items: &[T]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    if items.iter().all(|item| seen.insert(item)) {
        Ok(())
    } else {
        let mut error = ValidationError::new("unique");
        error.message = Some("Items must be unique".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use entity::webhook::{WebhookEvents, WebhookPayloadFields};

    use super::*;

    fn webhook_input(url: &str) -> CreateWebhookInput {
        CreateWebhookInput {
            bot_id: "1093287492347381823".to_string(),
            url: url.to_string(),
            secret: "s3cr3t".to_string(),
            events: vec![WebhookEvent::NewVote],
            payload_fields: vec![WebhookPayloadField::UserId, WebhookPayloadField::BotId],
        }
    }

    #[test]
    fn filters_validation() {
        let empty = FiltersWebhookInput::default();
        assert!(empty.validate().is_ok());

        let valid = FiltersWebhookInput {
            bot_id: Some("1093287492347381823".to_string()),
            query: None,
        };
        assert!(valid.validate().is_ok());

        let not_a_snowflake = FiltersWebhookInput {
            bot_id: Some("abc".to_string()),
            query: None,
        };
        assert!(not_a_snowflake.validate().is_err());

        let empty_query = FiltersBotInput {
            status: None,
            query: Some("".to_string()),
        };
        assert!(empty_query.validate().is_err());
    }

    #[test]
    fn create_tag_validation() {
        assert!(CreateTagInput { id: "music".to_string() }.validate().is_ok());
        assert!(CreateTagInput { id: "Music!".to_string() }.validate().is_err());
        assert!(CreateTagInput { id: "".to_string() }.validate().is_err());
    }

    #[test]
    fn webhook_object_omits_secret() {
        // Arrange
        let model = entity::webhook::Model {
            id: Uuid::new_v4(),
            bot_id: "1093287492347381823".to_string(),
            url: "https://example.org/hook".to_string(),
            secret: "s3cr3t".to_string(),
            events: WebhookEvents(vec![WebhookEvent::NewVote]),
            payload_fields: WebhookPayloadFields::default(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        // Act
        let json = serde_json::to_string(&WebhookObject::from(model)).unwrap();

        // Assert
        assert!(!json.contains("s3cr3t"));
        assert!(json.contains(r#""events":["NEW_VOTE"]"#));
        assert!(json.contains(r#""botId":"1093287492347381823""#));
    }

    #[test]
    fn create_webhook_url_validation() {
        assert!(webhook_input("https://example.org/hook").validate().is_ok());
        assert!(webhook_input("http://10.0.0.1:8080/hook").validate().is_ok());

        for url in [
            "ftp://example.org/hook",
            "https://discord.com/api/webhooks/1/abc",
            "https://discordapp.com/api/webhooks/1/abc",
            "not a url",
        ] {
            let errors = webhook_input(url).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("url"), "{url}");
        }
    }

    #[test]
    fn create_webhook_rejects_duplicates() {
        // Arrange
        let mut input = webhook_input("https://example.org/hook");
        input.events = vec![WebhookEvent::NewVote, WebhookEvent::NewVote];
        input.payload_fields = vec![WebhookPayloadField::Votes, WebhookPayloadField::Votes];

        // Act
        let errors = input.validate().unwrap_err();

        // Assert
        let fields = errors.field_errors();
        assert!(fields.contains_key("events"));
        assert!(fields.contains_key("payload_fields"));
    }

    #[test]
    fn create_webhook_parses_enum_arrays() {
        let input: CreateWebhookInput = serde_json::from_str(
            r#"{"botId":"1093287492347381823","url":"https://example.org/hook","secret":"x","events":["NEW_VOTE","BOT_APPROVED"]}"#,
        )
        .unwrap();

        assert_eq!(
            input.events,
            vec![WebhookEvent::NewVote, WebhookEvent::BotApproved]
        );
        assert!(input.payload_fields.is_empty());

        let unknown = serde_json::from_str::<CreateWebhookInput>(
            r#"{"botId":"1093287492347381823","url":"https://example.org/hook","secret":"x","events":["SOMETHING"]}"#,
        );
        assert!(unknown.is_err());
    }
}
