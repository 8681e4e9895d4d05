use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::shared::datetime::TimeConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    pub time: Option<TimeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub http_addr: String,
    #[serde(default = "default_keep_alive")]
    pub keep_alive: bool,
    /// Concurrent HTTP connection cap; unset or 0 means unlimited
    #[serde(default)]
    pub max_connections: Option<usize>,
}

fn default_keep_alive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string for the classifier results database
    pub processor_url: String,
    /// Connection string for the email alerts database
    pub alerts_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub processor_ttl_secs: u64,
    pub alerts_ttl_secs: u64,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            processor_ttl_secs: 6 * 60 * 60,
            alerts_ttl_secs: 60 * 60,
            max_entries: 4096,
        }
    }
}

impl CacheConfig {
    pub fn processor_ttl(&self) -> Duration {
        Duration::from_secs(self.processor_ttl_secs)
    }

    pub fn alerts_ttl(&self) -> Duration {
        Duration::from_secs(self.alerts_ttl_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source platforms, in legend order
    pub platforms: Vec<String>,
    pub processor_window_days: u32,
    pub alerts_window_days: u32,
    pub recent_stories_days: u32,
    pub recent_stories_limit: i64,
    pub recent_articles_limit: i64,
    pub top_sources_limit: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            platforms: vec![
                "onlinenews-mediacloud".to_string(),
                "onlinenews-wayback-machine".to_string(),
                "reddit-pushshift".to_string(),
                "youtube-youtube".to_string(),
            ],
            processor_window_days: 85,
            alerts_window_days: 45,
            recent_stories_days: 80,
            recent_stories_limit: 5,
            recent_articles_limit: 100,
            top_sources_limit: 10,
        }
    }
}

impl Settings {
    pub fn time_config(&self) -> TimeConfig {
        self.time.clone().unwrap_or_default()
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("STORY_DASH_CONFIG").unwrap_or_else(|_| "config/dev".to_string());
    load_settings_from(&config_path)
}

/// Reads the given file and overlays `STORY_DASH__SECTION__KEY` variables on top.
/// Loads and validates settings. An unknown timezone name is rejected here.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path))
        .add_source(
            config::Environment::with_prefix("STORY_DASH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    if let Some(time) = &settings.time {
        time.validate().map_err(config::ConfigError::Message)?;
    }
    Ok(settings)
}
