//! Configuration management for acton-styleguide
//!
//! Configuration is loaded with figment from multiple sources with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `STYLEGUIDE_` prefix, `__`
//!    separates sections, e.g. `STYLEGUIDE_SERVICE__PORT=8080`)
//! 2. `./config.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [service]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [database]
//! url = "sqlite://./styleguide.db"
//!
//! [logging]
//! level = "info"
//! json = false
//!
//! [backend_user]
//! uid = 1
//! username = "admin"
//! real_name = "Styleguide Admin"
//! email = "admin@example.com"
//! admin = true
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::context::BackendUser;
use crate::error::StyleguideError;

/// Prefix of environment variables read by [`StyleguideConfig::load`]
pub const ENV_PREFIX: &str = "STYLEGUIDE_";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite connection URL; `sqlite::memory:` keeps everything in memory
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://styleguide.db".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,

    /// Emit JSON lines instead of pretty output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) {
                "debug,acton_styleguide=trace,sqlx=warn".to_string()
            } else {
                "info".to_string()
            },
            json: !cfg!(debug_assertions),
        }
    }
}

/// Complete acton-styleguide configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StyleguideConfig {
    /// HTTP listener
    #[serde(default)]
    pub service: ServiceSettings,

    /// Database
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Logging
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Backend user used when the request carries none
    #[serde(default)]
    pub backend_user: BackendUser,
}

impl StyleguideConfig {
    /// Figment with defaults, the given TOML file and the environment merged
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from `./config.toml` and the environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_styleguide::config::StyleguideConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = StyleguideConfig::load()?;
    /// let port = config.service.port;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self, StyleguideError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file and the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, StyleguideError> {
        Self::figment(path.as_ref())
            .extract()
            .map_err(|err| StyleguideError::Config(err.to_string()))
    }

    /// Load from `path` if given, from the default file otherwise
    pub fn load_optional(path: Option<&PathBuf>) -> Result<Self, StyleguideError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, StyleguideError> {
        format!("{}:{}", self.service.host, self.service.port)
            .parse()
            .map_err(|err| {
                StyleguideError::Config(format!(
                    "invalid listen address {}:{}: {err}",
                    self.service.host, self.service.port
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = StyleguideConfig::default();
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.database.url, "sqlite://styleguide.db");
        assert_eq!(config.backend_user.username, "admin");
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [service]
                port = 4000

                [database]
                url = "sqlite::memory:"

                [backend_user]
                username = "editor"
                "#,
            )?;
            jail.set_env("STYLEGUIDE_SERVICE__PORT", "8080");

            let config = StyleguideConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.service.port, 8080);
            assert_eq!(config.service.host, "127.0.0.1");
            assert_eq!(config.database.url, "sqlite::memory:");
            assert_eq!(config.backend_user.username, "editor");
            assert_eq!(config.backend_user.uid, 1);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config =
                StyleguideConfig::load_from("does-not-exist.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.port, 3000);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[service]\nport = \"not a port\"\n")?;
            let err = StyleguideConfig::load().unwrap_err();
            assert!(matches!(err, StyleguideError::Config(_)));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_host() {
        let mut config = StyleguideConfig::default();
        config.service.host = "not a host".to_string();
        assert!(config.socket_addr().is_err());
    }
}
