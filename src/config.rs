use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_DB_URL: &str = "fixmap.sqlite";
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Optional TOML configuration file. Command line arguments and
/// environment variables take precedence over its entries.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db_url: Option<String>,
    pub db_pool_size: Option<u32>,
    pub enable_cors: Option<bool>,
}

impl Config {
    pub fn try_load_from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        Ok(Some(config))
    }
}
