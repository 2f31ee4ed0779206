use anyhow::Context;

use botlist::config::Settings;
use sea_orm::{ConnectOptions, Database};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let db = Database::connect(
        ConnectOptions::new(settings.database_url.clone())
            .max_connections(settings.max_connections)
            .to_owned(),
    )
    .await
    .context("could not connect to database_url")?;

    botlist::migrate(&db).await?;
    botlist::api::serve(db, &settings).await?;

    Ok(())
}
