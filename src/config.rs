use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Business policy for the slot endpoints. The generator itself enforces no
/// policy; these bounds are what the API passes it by default.
#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default = "default_business_start_hour")]
    pub business_start_hour: u32,
    #[serde(default = "default_business_end_hour")]
    pub business_end_hour: u32,
    /// Populate the store with the demo dataset at startup.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            business_start_hour: default_business_start_hour(),
            business_end_hour: default_business_end_hour(),
            seed_demo: default_seed_demo(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_business_start_hour() -> u32 {
    10
}

fn default_business_end_hour() -> u32 {
    17
}

fn default_seed_demo() -> bool {
    true
}

impl Config {
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults plus env vars are enough to run.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (PARCELDESK__SERVER__PORT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("PARCELDESK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        if self.delivery.business_end_hour > 24 {
            return Err("delivery.business_end_hour must be at most 24".to_string());
        }
        if self.delivery.business_start_hour >= self.delivery.business_end_hour {
            return Err(format!(
                "delivery.business_start_hour ({}) must be before business_end_hour ({})",
                self.delivery.business_start_hour, self.delivery.business_end_hour
            ));
        }
        Ok(())
    }
}
