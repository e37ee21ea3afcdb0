use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::layout::PageSize;
use crate::separators::FlipEdge;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Flip edge used when a layout request doesn't name one.
    pub default_flip_edge: FlipEdge,
    /// Paper size used when a layout request doesn't name one.
    pub default_page_size: PageSize,
    /// Upper bound on cards accepted by a single layout request.
    pub max_cards_per_layout: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_flip_edge: FlipEdge::Long,
            default_page_size: PageSize::A4,
            max_cards_per_layout: 2000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_flip_edge: parse_env("DEFAULT_FLIP_EDGE", defaults.default_flip_edge)?,
            default_page_size: parse_env("DEFAULT_PAGE_SIZE", defaults.default_page_size)?,
            max_cards_per_layout: std::env::var("MAX_CARDS_PER_LAYOUT")
                .ok()
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_CARDS_PER_LAYOUT must be a non-negative integer")?
                .unwrap_or(defaults.max_cards_per_layout),
        })
    }
}

/// Parses `key` with the type's `FromStr`, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr<Err = String>,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("Environment variable '{key}' is invalid: {e}")),
        Err(_) => Ok(default),
    }
}
