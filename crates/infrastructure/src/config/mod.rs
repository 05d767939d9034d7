//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `security`: API keys and unauthenticated paths
//!
//! The SMHI section reuses [`SmhiConfig`] from the integration crate.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `config.toml` (or `.yaml`, `.json`) in the working directory, optional
//! 3. environment variables prefixed with `SMHI_WEATHER`, using `__` between
//!    sections, e.g. `SMHI_WEATHER__SERVER__PORT=8080`

mod security;
mod server;

use std::path::Path;

use integration_smhi::SmhiConfig;
use serde::{Deserialize, Serialize};

pub use security::SecurityConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SMHI_WEATHER";

/// Separator between prefix, sections and keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Keys read from the environment as comma-separated lists
const LIST_KEYS: [&str; 3] = [
    "security.api_keys",
    "security.excluded_paths",
    "server.allowed_origins",
];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,

    /// SMHI metobs API configuration
    #[serde(default)]
    pub smhi: SmhiConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config` file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false), None)
    }

    /// Load configuration from a specific file, still honouring environment
    /// overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), None)
    }

    /// Build from `file` plus environment variables
    ///
    /// `vars` replaces the process environment when given.
    fn build<S>(
        file: S,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.log_format", "text")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., SMHI_WEATHER__SERVER__PORT)
            .add_source(Self::environment_source(vars));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Environment source; values stay strings so numeric API keys survive
    fn environment_source(vars: Option<config::Map<String, String>>) -> config::Environment {
        LIST_KEYS.iter().fold(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .list_separator(",")
                .source(vars),
            |env, key| env.with_list_parse_key(key),
        )
    }
}
