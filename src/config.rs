//! Environment-driven configuration.
//!
//! Values are trimmed; anything that does not parse falls back to its default.

use std::path::PathBuf;

pub const ARTIFACT_DIR_ENV: &str = "WELLBEING_ARTIFACT_DIR";
pub const DATASET_ENV: &str = "WELLBEING_DATASET";
pub const LOG_MODE_ENV: &str = "WELLBEING_LOG_MODE";
pub const LOG_FILE_ENV: &str = "WELLBEING_LOG_FILE";
pub const TIP_SEED_ENV: &str = "WELLBEING_TIP_SEED";

const DEFAULT_ARTIFACT_DIR: &str = "models";
const DEFAULT_DATASET: &str = "datasets_wellbeing.csv";
const DEFAULT_LOG_FILE: &str = "wellbeing.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal (the TUI owns the screen), stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "file" => Some(Self::File),
            "stdout" => Some(Self::Stdout),
            _ => None,
        }
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::Auto => interactive,
            Self::File => true,
            Self::Stdout => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub artifact_dir: PathBuf,
    pub dataset_path: PathBuf,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    /// `None` seeds the tip RNG from entropy
    pub tip_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            log_mode: LogMode::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tip_seed: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get(ARTIFACT_DIR_ENV) {
            cfg.artifact_dir = PathBuf::from(v);
        }
        if let Some(v) = get(DATASET_ENV) {
            cfg.dataset_path = PathBuf::from(v);
        }
        if let Some(mode) = get(LOG_MODE_ENV).as_deref().and_then(LogMode::parse) {
            cfg.log_mode = mode;
        }
        if let Some(v) = get(LOG_FILE_ENV) {
            cfg.log_file = PathBuf::from(v);
        }
        if let Some(seed) = get(TIP_SEED_ENV).and_then(|v| v.parse::<u64>().ok()) {
            cfg.tip_seed = Some(seed);
        }

        cfg
    }
}
