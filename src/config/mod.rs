//! Configuration for the wizard
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables
//! 3. Config file (~/.config/zero-wizard/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The config file is only ever read. The wizard never creates it.

use crate::theme::Appearance;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SPLASH_MS: u64 = 3000;
pub const DEFAULT_TICK_MS: u64 = 100;
/// Faster ticks than this only burn CPU
pub const MIN_TICK_MS: u64 = 10;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "./logs";
pub const DEFAULT_LOG_PREFIX: &str = "zero-wizard";

pub const ENV_APPEARANCE: &str = "ZERO_APPEARANCE";
pub const ENV_SPLASH_MS: &str = "ZERO_SPLASH_MS";
pub const ENV_TICK_MS: &str = "ZERO_TICK_MS";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Palette variant: auto, dark, light
    pub appearance: Appearance,

    /// How long the splash animation runs; None skips it
    pub splash: Option<Duration>,

    /// Animation frame period
    pub tick_rate: Duration,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appearance: Appearance::Auto,
            splash: Some(Duration::from_millis(DEFAULT_SPLASH_MS)),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

/// How often the JSON log file starts over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    /// None for names this build doesn't know
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    /// The appender schedule this maps to
    pub fn schedule(self) -> tracing_appender::rolling::Rotation {
        use tracing_appender::rolling::Rotation;
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

/// Where log events go besides the in-memory buffer
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter level for the crate's own events
    pub level: String,
    /// Opt-in JSON log file
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        FileLogging::default().resolve()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub appearance: Option<String>,
    pub splash_ms: Option<u64>,
    pub tick_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// `[logging]` as written in the file; every key optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl FileLogging {
    /// Fill gaps with defaults; an unknown rotation name means daily
    fn resolve(self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            file_enabled: self.file_enabled.unwrap_or(false),
            file_dir: PathBuf::from(self.file_dir.as_deref().unwrap_or(DEFAULT_LOG_DIR)),
            file_rotation: self
                .file_rotation
                .as_deref()
                .and_then(LogRotation::parse)
                .unwrap_or_default(),
            file_prefix: self
                .file_prefix
                .unwrap_or_else(|| DEFAULT_LOG_PREFIX.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/zero-wizard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("zero-wizard").join("config.toml"))
    }

    /// Load configuration: env vars -> file -> defaults
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    /// A broken config should fail loudly, not silently fall back to defaults.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Read a config file; a missing file yields defaults
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Merge the file layer with environment lookups
    pub(crate) fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Appearance: env > file > default (unknown strings mean auto)
        let appearance = env(ENV_APPEARANCE)
            .or(file.appearance)
            .map(|s| Appearance::from_str(&s))
            .unwrap_or_default();

        // Splash: env > file > default, 0 disables
        let splash_ms = env(ENV_SPLASH_MS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.splash_ms)
            .unwrap_or(DEFAULT_SPLASH_MS);
        let splash = (splash_ms > 0).then(|| Duration::from_millis(splash_ms));

        // Tick rate: env > file > default, clamped
        let tick_ms = env(ENV_TICK_MS)
            .and_then(|v| v.trim().parse().ok())
            .or(file.tick_ms)
            .unwrap_or(DEFAULT_TICK_MS)
            .max(MIN_TICK_MS);

        Self {
            appearance,
            splash,
            tick_rate: Duration::from_millis(tick_ms),
            logging: file.logging.unwrap_or_default().resolve(),
        }
    }

    /// Apply command-line flags on top of the loaded values
    pub fn with_overrides(mut self, appearance: Option<Appearance>, no_splash: bool) -> Self {
        if let Some(appearance) = appearance {
            self.appearance = appearance;
        }
        if no_splash {
            self.splash = None;
        }
        self
    }

    /// Splash duration in milliseconds, 0 when disabled
    pub fn splash_ms(&self) -> u64 {
        self.splash.map(|d| d.as_millis() as u64).unwrap_or(0)
    }
}
