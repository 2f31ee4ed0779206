use std::env;

use anyhow::Context;
use tracing::debug;

use crate::pagination::CountMode;

const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db/postgres";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub exact_page_counts: bool,
}

impl Settings {
    /// Reads the settings from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("BOTLIST_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = lookup("BOTLIST_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "50".to_string())
            .parse::<u32>()
            .context("Cannot parse BOTLIST_DB_MAX_CONNECTIONS")?;
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("Cannot parse PORT")?;
        let exact_page_counts = lookup("BOTLIST_EXACT_PAGE_COUNTS")
            .unwrap_or_default()
            .trim()
            .eq_ignore_ascii_case("true");

        let settings = Self {
            database_url,
            max_connections,
            port,
            exact_page_counts,
        };
        debug!(
            "port={} max_connections={} exact_page_counts={}",
            settings.port, settings.max_connections, settings.exact_page_counts
        );
        Ok(settings)
    }

    pub fn count_mode(&self) -> CountMode {
        if self.exact_page_counts {
            CountMode::Exact
        } else {
            CountMode::Window
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();

        assert_eq!(
            s,
            Settings {
                database_url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 50,
                port: 3000,
                exact_page_counts: false,
            }
        );
        assert_eq!(s.count_mode(), CountMode::Window);
    }

    #[test]
    fn overrides() {
        let s = settings(&[
            ("BOTLIST_DATABASE_URL", "postgresql://u:p@localhost/botlist"),
            ("BOTLIST_DB_MAX_CONNECTIONS", "8"),
            ("PORT", "8080"),
            ("BOTLIST_EXACT_PAGE_COUNTS", "TRUE"),
        ])
        .unwrap();

        assert_eq!(s.database_url, "postgresql://u:p@localhost/botlist");
        assert_eq!(s.max_connections, 8);
        assert_eq!(s.port, 8080);
        assert_eq!(s.count_mode(), CountMode::Exact);
    }

    #[test]
    fn invalid_port() {
        let err = settings(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot parse PORT");
    }
}
