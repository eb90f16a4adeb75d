use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dnsock.toml";

/// Environment variable naming the default socket.
pub const ENV_DEFAULT_SOCKET: &str = "DNS_SOCKET";

/// Environment variable overriding the endpoint of the `doh` socket.
pub const ENV_DOH_ENDPOINT: &str = "DOH_ENDPOINT";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub socket: Option<String>,
    /// Endpoint for the selected default socket.
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration with precedence defaults < file < environment < CLI.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env_with(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `DNS_SOCKET` and `DOH_ENDPOINT` through the given lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(socket) = lookup(ENV_DEFAULT_SOCKET).filter(|s| !s.is_empty()) {
            self.dns.default = socket;
        }

        if let Some(endpoint) = lookup(ENV_DOH_ENDPOINT).filter(|s| !s.is_empty()) {
            if let Some(doh) = self.dns.sockets.get_mut("doh") {
                doh.endpoint = Some(endpoint);
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket) = overrides.socket {
            self.dns.default = socket;
        }

        if let Some(endpoint) = overrides.endpoint {
            if let Some(socket) = self.dns.sockets.get_mut(&self.dns.default) {
                socket.endpoint = Some(endpoint);
            }
        }

        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.default.is_empty() {
            return Err(ConfigError::Validation(
                "default socket name cannot be empty".to_string(),
            ));
        }

        if !self.dns.sockets.contains_key(&self.dns.default) {
            return Err(ConfigError::Validation(format!(
                "default socket [{}] is not defined",
                self.dns.default
            )));
        }

        for (name, socket) in &self.dns.sockets {
            if socket.driver.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "socket [{name}] has no driver"
                )));
            }
            if let Some(endpoint) = &socket.endpoint {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    return Err(ConfigError::Validation(format!(
                        "socket [{name}] endpoint must start with http:// or https://"
                    )));
                }
            }
        }

        Ok(())
    }
}
