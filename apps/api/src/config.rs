//! Service configuration loaded from environment variables.
//!
//! Every variable is optional. With an empty environment the service reads
//! `locode_1.csv`, `locode_2.csv` and `locode_3.csv` from the working directory
//! and listens on `0.0.0.0:5555`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging filter (default: "info,locode_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5555)
//! - `LOCODE_FILES`: Comma-separated source files, loaded in order
//!   (default: "locode_1.csv,locode_2.csv,locode_3.csv")
//! - `RANDOM_DEFAULT_COUNT`: Sample size for `/random` without a usable `count` (default: 3000)
//! - `ISOLATE_SOURCE_CONTEXT`: Reset the country context between source files (default: false)

use crate::domain::shared::sampling::DEFAULT_SAMPLE_SIZE;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_LOCODE_FILES: [&str; 3] = ["locode_1.csv", "locode_2.csv", "locode_3.csv"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Source files, in load order. Later files win on duplicate locodes.
    pub locode_files: Vec<PathBuf>,

    /// Sample size used by `/random` when `count` is missing or unusable
    pub random_default_count: usize,

    /// Reset the parser's country context before each source file
    pub isolate_source_context: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            locode_files: DEFAULT_LOCODE_FILES.into_iter().map(PathBuf::from).collect(),
            random_default_count: DEFAULT_SAMPLE_SIZE,
            isolate_source_context: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            locode_files: env_list("LOCODE_FILES", defaults.locode_files),
            random_default_count: env_or("RANDOM_DEFAULT_COUNT", defaults.random_default_count)?,
            isolate_source_context: env_or(
                "ISOLATE_SOURCE_CONTEXT",
                defaults.isolate_source_context,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, val: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.parse::<T>()
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e))
}

/// Comma-separated paths. Blank entries are ignored; an all-blank value keeps the default.
fn env_list(key: &str, default: Vec<PathBuf>) -> Vec<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|val| split_list(&val))
        .filter(|list| !list.is_empty())
        .unwrap_or(default)
}

fn split_list(val: &str) -> Vec<PathBuf> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
