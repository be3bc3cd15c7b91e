//! Layered configuration: defaults, then an optional YAML file, then
//! `CRUD_APPS__SECTION__KEY` environment variables, then command line flags.

use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "CRUD_APPS__";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Mailbox size of every entity actor.
    pub channel_capacity: usize,
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_sample_data: true,
        }
    }
}

/// Command line overrides, already parsed by the binary.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<bool>,
    pub verbose: u8,
    pub print_config: bool,
}

impl AppConfig {
    /// Defaults, then `config_path` when given, then the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = config_path {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        // CRUD_APPS__SERVER__PORT=8087 maps to server.port
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("Failed to extract config from figment")
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(seed) = args.seed {
            self.store.seed_sample_data = seed;
        }
        match args.verbose {
            0 => {}
            1 => self.logging.level = "debug".to_string(),
            _ => self.logging.level = "trace".to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.store.channel_capacity == 0 {
            bail!("store.channel_capacity must be greater than zero");
        }
        if self.server.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        Ok(())
    }
}
