//! # Configuration
//!
//! Defaults → config file → `SOFTPHONE_CONFIG` path override.
//!
//! The file lives at `~/.softphone/config.toml` unless `SOFTPHONE_CONFIG`
//! points elsewhere. Every field is optional. A missing file means defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::call_timers::CallTiming;
use crate::history::{mock_call_history, CallRecord};

pub const CONFIG_PATH_ENV: &str = "SOFTPHONE_CONFIG";

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;
pub const DEFAULT_TOAST_MS: u64 = 4000;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SoftphoneConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Replaces the built-in sample history when non-empty.
    #[serde(default)]
    pub history: Vec<CallRecord>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub ringing_after_ms: Option<u64>,
    /// Measured from dialing, not from ringing.
    pub connected_after_ms: Option<u64>,
    pub tick_ms: Option<u64>,
    pub login_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub toast_ms: Option<u64>,
}

/// Concrete values the app runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub call_timing: CallTiming,
    pub login_delay: Duration,
    pub toast_duration: Duration,
    pub history: Vec<CallRecord>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(SoftphoneConfig::default())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|h| h.join(".softphone").join("config.toml"))
}

pub fn load_config() -> Result<SoftphoneConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(SoftphoneConfig::default());
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(SoftphoneConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SoftphoneConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn resolve(config: SoftphoneConfig) -> ResolvedConfig {
    let defaults = CallTiming::default();
    let ms = Duration::from_millis;

    let ringing_after = config.timing.ringing_after_ms.map(ms).unwrap_or(defaults.ringing_after);
    let mut connected_after = config
        .timing
        .connected_after_ms
        .map(ms)
        .unwrap_or(defaults.connected_after);
    if connected_after < ringing_after {
        warn!(
            "connected_after ({:?}) is shorter than ringing_after ({:?}), clamping",
            connected_after, ringing_after
        );
        connected_after = ringing_after;
    }

    let tick = config
        .timing
        .tick_ms
        .map(|value| ms(value.max(1)))
        .unwrap_or(defaults.tick);

    let history = if config.history.is_empty() {
        mock_call_history(Utc::now())
    } else {
        config.history
    };

    ResolvedConfig {
        call_timing: CallTiming { ringing_after, connected_after, tick },
        login_delay: ms(config.timing.login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS)),
        toast_duration: ms(config.ui.toast_ms.unwrap_or(DEFAULT_TOAST_MS)),
        history,
    }
}
