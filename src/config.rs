use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Application configuration, loaded from config.toml.
///
/// Every field has a default, so the file is optional and may be partial.
/// Countdown durations are fixed presets and are not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Upper bound on the redraw interval. The countdown is polled once per
/// frame, so frames must come well within one tick period.
pub const MAX_FRAME_MS: u64 = 250;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval of the terminal screen in milliseconds, capped at `MAX_FRAME_MS`.
    pub frame_rate_ms: u64,
    /// Show the key legend under the controls.
    pub show_key_hints: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
    /// Log file override. Defaults to <data_dir>/studyflow.log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate_ms: 33,
            show_key_hints: true,
        }
    }
}

impl UiConfig {
    /// Effective redraw interval, clamped to 1..=MAX_FRAME_MS milliseconds.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.clamp(1, MAX_FRAME_MS))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(paths::log_file)
    }
}

/// Load the config from `path`, or from $XDG_CONFIG_HOME/studyflow/config.toml
/// when no path is given. A missing default file yields defaults; a missing
/// explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_from(path),
        None => {
            let path = paths::config_file();
            if !path.exists() {
                return Ok(AppConfig::default());
            }
            load_from(&path)
        }
    }
}

fn load_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
