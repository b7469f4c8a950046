use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration, every key can be omitted.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Session user, skips the username prompt when set.
    pub username: Option<String>,
    /// Kind used by `create` when none is given: "user", "alert" or "system".
    pub default_kind: Option<String>,
    pub history_file: Option<String>,
    pub show_banner: Option<bool>,
    pub color: Option<bool>,
    /// Default log directive, e.g. "warn" or "debug". LOG_LEVEL still wins.
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
