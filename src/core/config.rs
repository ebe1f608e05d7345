//! Configuration management for the MCP server.
//!
//! Values start from defaults, then a `.env` file, then the process
//! environment. Nothing here is read again after startup.
//!
//! Loading runs before the subscriber exists, so ignored values are
//! collected in [`Config::warnings`] and reported by [`Config::log_warnings`].

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default endpoint for classification lookups.
pub const DEFAULT_CLASSIFICATION_URL: &str =
    "http://keytermauditassistpython.onrender.com/keyterms";

/// Default endpoint for keyterm definition lookups.
pub const DEFAULT_DETAILS_URL: &str = "https://keytermauditassistpython.onrender.com/keyterm";

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote keyterm API configuration.
    pub keyterm_api: KeytermApiConfig,

    /// Settings ignored while loading, with the default used instead.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Endpoints and client settings for the remote keyterm API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeytermApiConfig {
    /// Base URL queried by `check_keyterm_classification`.
    pub classification_url: String,

    /// Base URL queried by `get_keyterm_definition_and_regex`.
    pub details_url: String,

    /// Timeout applied to every outbound request, in seconds.
    pub timeout_secs: u64,
}

impl Default for KeytermApiConfig {
    fn default() -> Self {
        Self {
            classification_url: DEFAULT_CLASSIFICATION_URL.to_string(),
            details_url: DEFAULT_DETAILS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "audit-assist-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            keyterm_api: KeytermApiConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); remote API settings use the `KEYTERM_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env(&mut config.warnings);
        config.keyterm_api = KeytermApiConfig::from_env(&mut config.warnings);

        config
    }

    /// Emit the warnings collected by [`Config::from_env`].
    ///
    /// Call once logging is initialized.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

impl KeytermApiConfig {
    /// Load remote API settings, falling back to the defaults.
    ///
    /// Ignored values are appended to `warnings`.
    pub fn from_env(warnings: &mut Vec<String>) -> Self {
        let mut api = Self::default();

        if let Ok(url) = std::env::var("KEYTERM_CLASSIFICATION_URL") {
            api.classification_url = url;
        }

        if let Ok(url) = std::env::var("KEYTERM_DETAILS_URL") {
            api.details_url = url;
        }

        if let Ok(raw) = std::env::var("KEYTERM_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => api.timeout_secs = secs,
                _ => warnings.push(format!(
                    "Ignoring invalid KEYTERM_TIMEOUT_SECS={:?}, using {}s",
                    raw, DEFAULT_TIMEOUT_SECS
                )),
            }
        }

        api
    }
}
