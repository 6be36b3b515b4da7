use std::env;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
    pub reviews: ReviewSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Unset keeps everything in process memory.
    pub url: Option<String>,
    pub pool_size: u32,
    pub timeout_seconds: u64,
    pub seed_catalog: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: String,
}

impl CorsSettings {
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSettings {
    pub base_url: String,
    pub state_token: Option<String>,
    pub company_id: String,
    pub timeout_millis: u64,
    pub token_ttl_seconds: u64,
    /// 0 disables the response cache.
    pub cache_ttl_seconds: u64,
}

impl Settings {
    /// Defaults, then `appsettings.*`, then `STOREFRONT__*` variables, then
    /// the bare variable names older deployments set.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let settings: Settings = Self::builder()?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(Environment::with_prefix("STOREFRONT").separator("__"))
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("cors.allowed_origins", env::var("CORS_ORIGINS").ok())?
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("reviews.base_url", env::var("TRUSTIFY_API_URL").ok())?
            .set_override_option("reviews.state_token", env::var("TRUSTIFY_STATE_TOKEN").ok())?
            .set_override_option("reviews.company_id", env::var("COMPANY_ID").ok())?
            .build()?
            .try_deserialize()?;

        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            persisted = settings.database.url.is_some(),
            review_auth = settings.reviews.state_token.is_some(),
            "Configuration loaded"
        );
        Ok(settings)
    }

    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3001_i64)?
            .set_default("database.pool_size", 10_i64)?
            .set_default("database.timeout_seconds", 30_i64)?
            .set_default("database.seed_catalog", true)?
            .set_default("cors.allowed_origins", "http://localhost:3000")?
            .set_default("reviews.base_url", "https://trustify.io.vn")?
            .set_default("reviews.company_id", "1")?
            .set_default("reviews.timeout_millis", 10_000_i64)?
            .set_default("reviews.token_ttl_seconds", 3_600_i64)?
            .set_default("reviews.cache_ttl_seconds", 300_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_local_memory_backed_server() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 3001);
        assert!(settings.database.url.is_none());
        assert!(settings.database.seed_catalog);
        assert!(settings.reviews.state_token.is_none());
        assert_eq!(settings.reviews.timeout_millis, 10_000);
        assert_eq!(settings.reviews.token_ttl_seconds, 3_600);
        assert_eq!(settings.reviews.cache_ttl_seconds, 300);
        assert_eq!(settings.cors.origins(), vec!["http://localhost:3000"]);
    }

    #[test]
    fn overrides_replace_defaults() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .set_override("database.url", ":memory:")
            .unwrap()
            .set_override("cors.allowed_origins", "https://shop.example, http://localhost:3000,")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.database.url.as_deref(), Some(":memory:"));
        assert_eq!(
            settings.cors.origins(),
            vec!["https://shop.example", "http://localhost:3000"]
        );
    }
}
