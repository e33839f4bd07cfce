// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

const ENV_CONFIG_PATH: &str = "MONARCHS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config/settings.toml";

fn default_data_url() -> String {
    "https://mysafeinfo.com/api/data?list=englishmonarchs&format=json".to_string()
}
fn default_http_timeout_secs() -> u64 {
    30
}
fn default_cache_duration_mins() -> u64 {
    5
}
fn default_parallel_threshold() -> usize {
    10_000
}

/// Runtime settings. Every field has a default, so a missing config file is
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Source endpoint for the monarch dataset.
    #[serde(default = "default_data_url")]
    pub data_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    /// Snapshot cache validity window in minutes.
    #[serde(default = "default_cache_duration_mins")]
    pub cache_duration_mins: u64,
    /// List size above which duration computation may use worker threads.
    /// Execution strategy only; results are identical either way.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            http_timeout_secs: default_http_timeout_secs(),
            cache_duration_mins: default_cache_duration_mins(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Settings {
    /// Load from an explicit TOML path, then apply env overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        settings.apply_env_overrides();
        settings.sanitize();
        Ok(settings)
    }

    /// Load using env var + fallbacks:
    /// 1) $MONARCHS_CONFIG_PATH
    /// 2) config/settings.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("MONARCHS_CONFIG_PATH points to non-existent path"));
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from(&default_p);
        }
        let mut settings = Settings::default();
        settings.apply_env_overrides();
        settings.sanitize();
        Ok(settings)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_mins * 60)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("MONARCHS_DATA_URL") {
            if !url.trim().is_empty() {
                self.data_url = url;
            }
        }
        if let Some(v) = env_parse::<u64>("MONARCHS_HTTP_TIMEOUT_SECS") {
            self.http_timeout_secs = v;
        }
        if let Some(v) = env_parse::<u64>("MONARCHS_CACHE_DURATION_MINS") {
            self.cache_duration_mins = v;
        }
        if let Some(v) = env_parse::<usize>("MONARCHS_PARALLEL_THRESHOLD") {
            self.parallel_threshold = v;
        }
    }

    fn sanitize(&mut self) {
        // A zero timeout would hang forever in reqwest terms; fall back.
        if self.http_timeout_secs == 0 {
            self.http_timeout_secs = default_http_timeout_secs();
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
