use std::env;

use auth::HashParams;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, STORAGE__BACKEND, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// Lifetime of issued access tokens.
    pub fn token_ttl(&self) -> Duration {
        Duration::minutes(self.jwt.expiration_minutes)
    }
}

impl From<&PasswordConfig> for HashParams {
    fn from(config: &PasswordConfig) -> Self {
        HashParams {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    const SAMPLE: &str = r#"
        [server]
        http_port = 8080

        [storage]
        backend = "postgres"
        database_url = "postgresql://localhost/auth"
        max_connections = 10

        [jwt]
        secret = "test-secret"
        expiration_minutes = 90

        [password]
        memory_kib = 4096
        iterations = 3
        parallelism = 2
    "#;

    fn parse(source: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(SAMPLE).expect("Failed to parse config");

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("postgresql://localhost/auth")
        );
        assert_eq!(config.token_ttl(), Duration::minutes(90));

        let params = HashParams::from(&config.password);
        assert_eq!(params.memory_kib, 4096);
        assert_eq!(params.iterations, 3);
        assert_eq!(params.parallelism, 2);
    }

    #[test]
    fn test_memory_backend_without_database_url() {
        let source = SAMPLE
            .replace("backend = \"postgres\"", "backend = \"memory\"")
            .replace("database_url = \"postgresql://localhost/auth\"", "");
        let config = parse(&source).expect("Failed to parse config");

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.database_url.is_none());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let source = SAMPLE.replace("backend = \"postgres\"", "backend = \"redis\"");
        assert!(parse(&source).is_err());
    }
}
