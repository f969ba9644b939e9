use std::str::FromStr;

use anyhow::{Context, Result};

use crate::store::DEFAULT_HISTORY_LIMIT;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of analyses kept in history.
    pub history_limit: usize,
    /// Minimum trimmed JD length (chars) accepted by the analyze endpoint.
    pub min_jd_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_jd_length: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            history_limit: at_least_one(
                "HISTORY_LIMIT",
                parse_env("HISTORY_LIMIT", defaults.history_limit)?,
            )?,
            min_jd_length: parse_env("MIN_JD_LENGTH", defaults.min_jd_length)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn at_least_one(key: &str, value: usize) -> Result<usize> {
    anyhow::ensure!(value >= 1, "{key} must be at least 1, got {value}");
    Ok(value)
}
