//! Configuration for the gox backend.

use std::env;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listen address. A leading `:` binds every interface (e.g. `:1981`).
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub response: ResponseConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset (default: info)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// How successful responses are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Pretty-printed `application/json`.
    #[default]
    Json,
    /// The same JSON embedded in a browsable HTML page.
    Html,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseConfig {
    #[serde(default)]
    pub format: ResponseFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersConfig {
    /// Insert the demo users at startup.
    #[serde(default = "default_true")]
    pub seed: bool,
    /// Mount `POST /users`. Off unless explicitly enabled.
    #[serde(default)]
    pub allow_create: bool,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            seed: true,
            allow_create: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            logging: LoggingConfig::default(),
            response: ResponseConfig::default(),
            users: UsersConfig::default(),
        }
    }
}

// Default values
fn default_addr() -> String {
    ":1981".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file path and the environment.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. `ADDR` environment variable (listen address only, ignored when empty)
    /// 2. Environment variables (GOX__SECTION__KEY format)
    /// 3. The config file, if it exists
    /// 4. Built-in defaults
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("addr", default_addr())?
            .set_default("logging.level", default_log_level())?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("GOX")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("addr", env::var("ADDR").ok().filter(|a| !a.is_empty()))?
            .build()?;

        config.try_deserialize()
    }

    /// Address in a form `TcpListener::bind` accepts.
    pub fn listen_addr(&self) -> String {
        if self.addr.starts_with(':') {
            format!("0.0.0.0{}", self.addr)
        } else {
            self.addr.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    use super::*;

    // Serializes tests that read the process environment through `load_from`.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.addr, ":1981");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.response.format, ResponseFormat::Json);
        assert!(config.users.seed);
        assert!(!config.users.allow_create);
    }

    #[test]
    fn test_listen_addr_expands_bare_port() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:1981");

        let config = Config {
            addr: "127.0.0.1:3000".to_string(),
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "debug"

[response]
format = "html"

[users]
seed = false
allow_create = true
"#
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.response.format, ResponseFormat::Html);
        assert!(!config.users.seed);
        assert!(config.users.allow_create);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = Config::load_from("/nonexistent/gox-config").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.response.format, ResponseFormat::Json);
        assert!(config.users.seed);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[response]\nformat = \"xml\"").unwrap();

        assert!(Config::load_from(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_addr_env_overrides_file_and_prefixed_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "addr = \"127.0.0.1:2000\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        env::set_var("GOX__ADDR", "127.0.0.1:3000");
        env::set_var("GOX__USERS__ALLOW_CREATE", "true");
        env::set_var("ADDR", "127.0.0.1:4000");
        let with_addr = Config::load_from(&path);

        env::remove_var("ADDR");
        let without_addr = Config::load_from(&path);

        env::remove_var("GOX__ADDR");
        env::remove_var("GOX__USERS__ALLOW_CREATE");
        let file_only = Config::load_from(&path);

        let with_addr = with_addr.unwrap();
        assert_eq!(with_addr.addr, "127.0.0.1:4000");
        assert!(with_addr.users.allow_create);

        let without_addr = without_addr.unwrap();
        assert_eq!(without_addr.addr, "127.0.0.1:3000");
        assert!(without_addr.users.allow_create);

        let file_only = file_only.unwrap();
        assert_eq!(file_only.addr, "127.0.0.1:2000");
        assert!(!file_only.users.allow_create);
    }

    #[test]
    fn test_empty_addr_env_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var("ADDR", "");
        let config = Config::load_from("/nonexistent/gox-config");
        env::remove_var("ADDR");

        let config = config.unwrap();
        assert_eq!(config.addr, ":1981");
        assert_eq!(config.listen_addr(), "0.0.0.0:1981");
    }
}
