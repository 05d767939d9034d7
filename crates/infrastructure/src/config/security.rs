//! Security configuration: API key allow-list and unauthenticated paths.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Accepted values for the `X-API-Key` header
    ///
    /// Example in config.toml:
    /// ```toml
    /// [security]
    /// api_keys = ["first-key", "second-key"]
    /// ```
    ///
    /// Or as a comma-separated environment variable:
    /// `SMHI_WEATHER__SECURITY__API_KEYS=first-key,second-key`
    #[serde(default, skip_serializing)]
    pub api_keys: Vec<SecretString>,

    /// Path prefixes served without an API key
    #[serde(default = "default_excluded_paths")]
    pub excluded_paths: Vec<String>,
}

fn default_excluded_paths() -> Vec<String> {
    vec!["/swagger-ui".to_string(), "/api-docs".to_string()]
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            excluded_paths: default_excluded_paths(),
        }
    }
}

impl SecurityConfig {
    /// Check if at least one API key is configured
    pub fn has_api_keys(&self) -> bool {
        !self.api_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn security_config_default() {
        let config = SecurityConfig::default();
        assert!(!config.has_api_keys());
        assert_eq!(config.excluded_paths, vec!["/swagger-ui", "/api-docs"]);
    }

    #[test]
    fn security_config_deserialize_keys() {
        let json = r#"{"api_keys":["alpha","beta"]}"#;
        let config: SecurityConfig = serde_json::from_str(json).unwrap();
        assert!(config.has_api_keys());
        assert_eq!(config.api_keys.len(), 2);
        assert_eq!(config.api_keys[1].expose_secret(), "beta");
        assert_eq!(config.excluded_paths.len(), 2);
    }

    #[test]
    fn security_config_never_serializes_keys() {
        let config = SecurityConfig {
            api_keys: vec![SecretString::from("super-secret".to_string())],
            excluded_paths: Vec::new(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_keys"));
    }

    #[test]
    fn security_config_debug_redacts_keys() {
        let config = SecurityConfig {
            api_keys: vec![SecretString::from("super-secret".to_string())],
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
