//! Layered application configuration

mod app_config;

pub use app_config::{AppConfig, AppInfoConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig};
