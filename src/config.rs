use std::path::PathBuf;

use crate::error::{MealBotError, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://mealbot.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration loaded from environment variables.
///
/// - `MEALBOT_DATABASE_URL`: favorites database (default `sqlite://mealbot.db`)
/// - `MEALBOT_MAX_CONNECTIONS`: pool size (default 5)
/// - `MEALBOT_EXPORT_DIR`: where exported shopping lists are written (default `.`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("MEALBOT_DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = match lookup("MEALBOT_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(MealBotError::Config(format!(
                        "MEALBOT_MAX_CONNECTIONS must be a positive integer, got '{}'",
                        raw
                    )));
                }
            },
            None => defaults.max_connections,
        };

        let export_dir = lookup("MEALBOT_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        Ok(Self {
            database_url,
            max_connections,
            export_dir,
        })
    }
}
