//! Server configuration.
//!
//! The configuration is a JSON file whose path is given by `CONFIG_PATH`
//! (or `--config`). Values are layered with figment:
//!
//! 1. Built-in defaults
//! 2. The JSON file
//! 3. `FLIGHTPATH_`-prefixed environment variables, nested keys separated by
//!    `__` (e.g. `FLIGHTPATH_SERVER_OPTS__READ_TIMEOUT=10`)
//!
//! ```json
//! {
//!   "server_opts": {
//!     "read_timeout": 10,
//!     "write_timeout": 15,
//!     "idle_timeout": 20,
//!     "max_request_body_size_mb": 25
//!   },
//!   "main_port": ":8080"
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "FLIGHTPATH_";

/// Body limit applied when `max_request_body_size_mb` is zero.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 4 * 1024 * 1024;

const DEFAULT_MAIN_PORT: &str = ":8080";

/// HTTP server tuning.
///
/// Timeouts are in seconds; zero disables the timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerOpts {
    /// Maximum time to receive a request body.
    pub read_timeout: u64,
    /// Maximum time to produce a response.
    pub write_timeout: u64,
    /// Keep-alive idle timeout.
    pub idle_timeout: u64,
    /// Request body limit in MiB (zero falls back to 4 MiB).
    pub max_request_body_size_mb: usize,
}

impl ServerOpts {
    /// Read timeout, `None` when disabled.
    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.read_timeout)
    }

    /// Write timeout, `None` when disabled.
    #[must_use]
    pub fn write_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.write_timeout)
    }

    /// Idle timeout, `None` when disabled.
    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.idle_timeout)
    }

    /// Request body limit in bytes.
    #[must_use]
    pub fn body_limit_bytes(&self) -> usize {
        if self.max_request_body_size_mb == 0 {
            return DEFAULT_BODY_LIMIT_BYTES;
        }
        self.max_request_body_size_mb.saturating_mul(1024 * 1024)
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server tuning.
    pub server_opts: ServerOpts,
    /// Listen address: `":8080"`, `"8080"` or `"host:port"`.
    ///
    /// A bare number is accepted too, since environment overrides such as
    /// `FLIGHTPATH_MAIN_PORT=9090` arrive as integers.
    #[serde(deserialize_with = "deserialize_main_port")]
    pub main_port: String,
    /// Comma-separated list of allowed CORS origins. Unset allows any origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_origin: Option<String>,
}

fn deserialize_main_port<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MainPort {
        Text(String),
        Number(u64),
    }

    Ok(match MainPort::deserialize(deserializer)? {
        MainPort::Text(port) => port,
        MainPort::Number(port) => port.to_string(),
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_opts: ServerOpts::default(),
            main_port: DEFAULT_MAIN_PORT.to_string(),
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Loads the configuration file at `path`.
    ///
    /// An absent or empty path is reported as [`ConfigError::PathNotSet`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::PathNotSet(CONFIG_PATH_ENV))?;
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Builds the configuration from JSON text plus environment overrides.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Json::string(content))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Replaces the port of `main_port`, keeping any configured host.
    pub fn set_port(&mut self, port: u16) {
        self.main_port = match self.main_port.trim().rsplit_once(':') {
            Some((host, _)) => format!("{host}:{port}"),
            None => format!(":{port}"),
        };
    }

    /// Socket address to bind, in `host:port` form.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        let port = self.main_port.trim();
        if port.starts_with(':') {
            format!("0.0.0.0{port}")
        } else if port.contains(':') {
            port.to_string()
        } else {
            format!("0.0.0.0:{port}")
        }
    }
}
