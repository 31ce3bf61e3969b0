use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::invoice::ClientConfig;

// Default value functions
fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_log_filter() -> String {
  "facturapid=debug,actix_web=info".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub server: ServerConfig,
  pub api: ClientConfig,
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// Web front end listener
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
    }
  }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// `EnvFilter` directive used when `RUST_LOG` is not set
  #[serde(default = "default_log_filter")]
  pub filter: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      filter: default_log_filter(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with FACTURAPID_ prefix
  ///
  /// # Example
  ///
  /// ```no_run
  /// use facturapid::infrastructure::config::Config;
  ///
  /// let config = Config::load().expect("Failed to load configuration");
  /// println!("Calling invoicing API at {}", config.api.base_url);
  /// ```
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the FACTURAPID_ prefix and are separated by double underscores:
  /// - `FACTURAPID_SERVER__HOST=0.0.0.0`
  /// - `FACTURAPID_SERVER__PORT=3000`
  /// - `FACTURAPID_API__BASE_URL=http://localhost:8080/api/v1`
  /// - `FACTURAPID_API__API_KEY=...`
  /// - `FACTURAPID_LOGGING__FILTER=facturapid=info`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if:
  /// - config/default.toml is missing or contains invalid TOML
  /// - The API base URL or key is missing
  /// - Configuration values have invalid types
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // FACTURAPID_API__API_KEY=...
      // Values stay strings until deserialized so keys like "00123" survive
      .add_source(
        Environment::with_prefix("FACTURAPID")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?;

    config.try_deserialize()
  }

  pub fn bind_address(&self) -> (String, u16) {
    (self.server.host.clone(), self.server.port)
  }
}
