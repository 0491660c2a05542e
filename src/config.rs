//! Runtime configuration.
//!
//! Defaults are overridden by environment variables, which are overridden
//! by command-line flags:
//!
//! | Setting | Env var | Default |
//! |---------|---------|---------|
//! | Backend URL | `CHAT_PANEL_URL` | `http://localhost:8000` |
//! | Log file | `CHAT_PANEL_LOG` | `<cache dir>/chat-panel/chat-panel.log` |
//! | Connect timeout | `CHAT_PANEL_TIMEOUT_SECS` | 30 |

use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;
use crate::error::{ChatError, ChatResult};

pub const ENV_URL: &str = "CHAT_PANEL_URL";
pub const ENV_LOG: &str = "CHAT_PANEL_LOG";
pub const ENV_TIMEOUT: &str = "CHAT_PANEL_TIMEOUT_SECS";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the chat panel.
///
/// # Example
///
/// ```ignore
/// use chat_panel::config::PanelConfig;
///
/// let config = PanelConfig::default()
///     .with_base_url("http://chat.internal:8000")
///     .with_connect_timeout(std::time::Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Backend base URL, without the API prefix
    pub base_url: String,
    /// Where logs go; `None` means the default under the cache dir
    pub log_file: Option<PathBuf>,
    /// Upper bound for establishing a connection
    pub connect_timeout: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> ChatResult<Self> {
        Self::resolve(None)
    }

    /// Build a config from the environment, then apply the `--url` flag.
    ///
    /// Validation runs once on the result, so a valid flag wins over a bad
    /// `CHAT_PANEL_URL`.
    pub fn resolve(cli_url: Option<String>) -> ChatResult<Self> {
        let mut config = Self::read_env()?;
        if let Some(url) = cli_url {
            config = config.with_base_url(url);
        }
        config.validate()?;
        Ok(config)
    }

    fn read_env() -> ChatResult<Self> {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_URL) {
            config = config.with_base_url(url);
        }
        if let Some(path) = env_value(ENV_LOG) {
            config = config.with_log_file(path);
        }
        if let Some(secs) = env_value(ENV_TIMEOUT) {
            let secs: u64 = secs.parse().map_err(|_| {
                ChatError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT, secs
                ))
            })?;
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Check the settings can be used.
    pub fn validate(&self) -> ChatResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "backend URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.connect_timeout.is_zero() {
            return Err(ChatError::Config("connect timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Log file to write to: the configured one, else the default under the
    /// user cache dir.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `<cache dir>/chat-panel/chat-panel.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("chat-panel").join("chat-panel.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_LOG);
        std::env::remove_var(ENV_TIMEOUT);
    }

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PanelConfig::new()
            .with_base_url("https://chat.example.com")
            .with_log_file("/tmp/panel.log")
            .with_connect_timeout(Duration::from_secs(3));
        assert_eq!(config.base_url, "https://chat.example.com");
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/panel.log")));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = PanelConfig::new().with_base_url("localhost:8000");
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = PanelConfig::new().with_connect_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = PanelConfig::from_env().unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_URL, "http://10.0.0.5:9000");
        std::env::set_var(ENV_LOG, "/tmp/chat.log");
        std::env::set_var(ENV_TIMEOUT, "7");

        let config = PanelConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/chat.log")));
        assert_eq!(config.connect_timeout, Duration::from_secs(7));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_values_ignored() {
        clear_env();
        std::env::set_var(ENV_URL, "   ");
        let config = PanelConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_url_overrides_invalid_env_url() {
        clear_env();
        std::env::set_var(ENV_URL, "not a url");
        assert!(PanelConfig::from_env().is_err());

        let config = PanelConfig::resolve(Some("https://chat.example.com".to_string())).unwrap();
        assert_eq!(config.base_url, "https://chat.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_cli_url_rejected() {
        clear_env();
        std::env::set_var(ENV_URL, "http://10.0.0.5:9000");
        let err = PanelConfig::resolve(Some("ftp://files".to_string())).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_bad_timeout() {
        clear_env();
        std::env::set_var(ENV_TIMEOUT, "soon");
        let err = PanelConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT));
        clear_env();
    }
}
