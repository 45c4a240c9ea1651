use serde::Deserialize;

use crate::infrastructure::auth::DEFAULT_TOKEN_TTL_MINUTES;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub app: AppInfoConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Values reported by the status endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Session token settings
///
/// The signing secret is not configurable; it is generated at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub token_ttl_minutes: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: "Session Token API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "A simple HTTP service with JWT authentication".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.app.name, "Session Token API");
        assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.auth.token_ttl_minutes, 60);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 9000)
            .unwrap()
            .set_override("auth.token_ttl_minutes", 15)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.token_ttl_minutes, 15);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.app.description, "A simple HTTP service with JWT authentication");
    }
}
