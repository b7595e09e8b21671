use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the recommendation backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User whose pantry is used when none is given on the command line
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    /// Number of recipes to request
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Ranking boost the backend gives recipes using pantry ingredients
    #[serde(default = "default_boost")]
    pub boost: f64,
    /// Sample-data fallback for recommendations
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Configuration for retrying the backend before serving sample recommendations
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Whether sample recommendations are served when the backend fails
    #[serde(default)]
    pub enabled: bool,
    /// Number of attempts against the backend before falling back
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay between attempts in milliseconds, multiplied by the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout: default_timeout(),
            user_id: default_user_id(),
            top_k: default_top_k(),
            boost: default_boost(),
            fallback: FallbackConfig::default(),
        }
    }
}

// Default value functions
fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_id() -> i64 {
    1
}

fn default_top_k() -> u32 {
    10
}

fn default_boost() -> f64 {
    0.2
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY__ prefix
    /// 2. pantry.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY__BACKEND_URL, PANTRY__FALLBACK__ENABLED
    pub fn load() -> Result<Self, ConfigError> {
        load_config("pantry")
    }
}

/// Load configuration from `<name>.toml` (optional) and `PANTRY__` environment variables
pub fn load_config(name: &str) -> Result<ClientConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: PANTRY__FALLBACK__RETRY_ATTEMPTS
        .add_source(
            Environment::with_prefix("PANTRY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.user_id, 1);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.boost, 0.2);
    }

    #[test]
    fn test_fallback_config_default() {
        let fallback = FallbackConfig::default();
        assert!(!fallback.enabled);
        assert_eq!(fallback.retry_attempts, 2);
        assert_eq!(fallback.retry_delay_ms, 500);
    }

    #[test]
    fn test_load_config_without_file() {
        let config = load_config("does-not-exist-pantry-config").unwrap();
        assert!(!config.backend_url.is_empty());
        assert!(config.top_k > 0);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = std::env::temp_dir().join(format!("pantry-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "backend_url = \"http://backend.test:9000\"\ntop_k = 3\n\n[fallback]\nenabled = true"
        )
        .unwrap();

        let config = load_config(path.with_extension("").to_str().unwrap()).unwrap();
        assert_eq!(config.backend_url, "http://backend.test:9000");
        assert_eq!(config.top_k, 3);
        assert!(config.fallback.enabled);
        assert_eq!(config.fallback.retry_attempts, 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
