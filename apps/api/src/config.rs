use anyhow::{Context, Result};

use crate::recommendation::ranking::RankingPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    /// Below this many good matches the full ranked list is shown instead.
    pub min_good_matches: usize,
    pub good_match_score: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RankingPolicy::default();

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            database_acquire_timeout_secs: parse_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            min_good_matches: parse_env(
                "RECOMMENDATION_MIN_GOOD_MATCHES",
                defaults.min_good_matches,
            )?,
            good_match_score: parse_env(
                "RECOMMENDATION_GOOD_MATCH_SCORE",
                defaults.good_match_score,
            )?,
        })
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy {
            good_match_score: self.good_match_score,
            min_good_matches: self.min_good_matches,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
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
