mod file_config;

pub use file_config::FileConfig;

use crate::notifications::NotificationKind;
use crate::session::validate_username;
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// CLI arguments that take part in config resolution.
/// Mirrors the keys that can be overridden by the TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub username: Option<String>,
    pub history_file: Option<PathBuf>,
    pub show_banner: bool,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            username: None,
            history_file: None,
            show_banner: true,
            color: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Already validated, `None` means the shell has to prompt for it.
    pub username: Option<String>,
    /// Kind used by `create` without `--kind`. `None` means prompt.
    pub default_kind: Option<NotificationKind>,
    pub history_file: Option<PathBuf>,
    pub show_banner: bool,
    pub color: bool,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let username = file
            .username
            .or_else(|| cli.username.clone())
            .map(|name| validate_username(&name))
            .transpose()
            .map_err(|err| anyhow!("Invalid username in configuration: {}", err))?;

        let default_kind = file
            .default_kind
            .map(|tag| NotificationKind::from_str(&tag))
            .transpose()?;

        let history_file = file
            .history_file
            .map(PathBuf::from)
            .or_else(|| cli.history_file.clone());

        let show_banner = file.show_banner.unwrap_or(cli.show_banner);
        let color = file.color.unwrap_or(cli.color);

        let log_level = match file.log_level {
            Some(level) => parse_log_level(&level)
                .ok_or_else(|| anyhow!("Invalid log_level in configuration: {}", level))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            username,
            default_kind,
            history_file,
            show_banner,
            color,
            log_level,
        })
    }
}

fn parse_log_level(s: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(s.trim()).ok()
}
