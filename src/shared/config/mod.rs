pub mod model;

pub use model::{
    CacheConfig, DashboardConfig, DatabaseConfig, LoggingConfig, ServerConfig, Settings,
    load_settings, load_settings_from,
};
