use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};

use crate::models::Item;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Seconds before a request is answered with 408
    pub request_timeout: u64,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Items loaded into the in-memory store at startup
    pub seed_items: Vec<Item>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout: 30,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            seed_items: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
                None => defaults.port,
            },
            request_timeout: match lookup("REQUEST_TIMEOUT") {
                Some(secs) => secs.parse().map_err(|e| {
                    anyhow::anyhow!("REQUEST_TIMEOUT must be a number of seconds: {}", e)
                })?,
                None => defaults.request_timeout,
            },
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: match lookup("LOG_FORMAT") {
                Some(format) => format.parse()?,
                None => defaults.log_format,
            },
            seed_items: match lookup("SEED_ITEMS") {
                Some(raw) => parse_seed_items(&raw)?,
                None => defaults.seed_items,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse `id:name` pairs separated by commas, e.g. `1:Widget,2:Gadget`.
fn parse_seed_items(raw: &str) -> Result<Vec<Item>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, name) = entry
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("SEED_ITEMS entry '{}' is not id:name", entry))?;
            let id = id
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("SEED_ITEMS id '{}' is invalid: {}", id, e))?;
            Ok(Item::new(id, name.trim()))
        })
        .collect()
}
