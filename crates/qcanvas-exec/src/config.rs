//! Execution client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ExecError, ExecResult};

/// Default execution endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/run";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "QCANVAS_ENDPOINT";

/// Where and how to send execution requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Full URL the payload is POSTed to.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl ExecConfig {
    /// Defaults, with the endpoint taken from `QCANVAS_ENDPOINT` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Reject configurations the client cannot use.
    pub fn validate(&self) -> ExecResult<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ExecError::Configuration("endpoint is empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ExecError::Configuration(format!(
                "endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ExecError::Configuration("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_override() {
        // SAFETY: the only test in this crate touching this variable.
        unsafe {
            std::env::set_var(ENDPOINT_ENV, "http://10.0.0.2:8000/run");
        }
        assert_eq!(ExecConfig::from_env().endpoint, "http://10.0.0.2:8000/run");

        unsafe {
            std::env::set_var(ENDPOINT_ENV, "  ");
        }
        assert_eq!(ExecConfig::from_env().endpoint, DEFAULT_ENDPOINT);

        unsafe {
            std::env::remove_var(ENDPOINT_ENV);
        }
    }

    #[test]
    fn test_defaults() {
        let config = ExecConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = ExecConfig::default().with_endpoint("ftp://example.org");
        assert!(matches!(config.validate(), Err(ExecError::Configuration(_))));

        let config = ExecConfig::default().with_endpoint("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ExecConfig::default().with_timeout(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ExecConfig =
            serde_json::from_str(r#"{"endpoint": "https://sim.example.org/run"}"#).unwrap();
        assert_eq!(config.endpoint, "https://sim.example.org/run");
        assert_eq!(config.timeout_secs, 60);
    }
}
