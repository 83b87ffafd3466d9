use std::time::Duration;

use onpage_engine::{ClientSettings, DEFAULT_ENDPOINT};
use url::Url;

/// Environment variable holding the analysis endpoint.
pub const ENDPOINT_ENV: &str = "ONPAGE_API_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint {value:?} is not a valid URL: {reason}")]
    InvalidEndpoint { value: String, reason: String },
    #[error("endpoint {value:?} must use http or https")]
    UnsupportedScheme { value: String },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// `endpoint` is the flag or environment value, already merged by clap.
    pub fn resolve(endpoint: Option<&str>, timeout_secs: u64) -> Result<Self, ConfigError> {
        let raw = endpoint
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(raw).map_err(|err| ConfigError::InvalidEndpoint {
            value: raw.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: raw.to_string(),
            });
        }
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            endpoint,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.request_timeout,
            ..ClientSettings::new(self.endpoint.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_default() {
        let config = AppConfig::resolve(None, 60).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);

        let config = AppConfig::resolve(Some("   "), 60).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = AppConfig::resolve(Some("https://seo.example.com/api/analyze"), 5).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("seo.example.com"));
        assert_eq!(config.client_settings().request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(matches!(
            AppConfig::resolve(Some("not a url"), 60),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert_eq!(
            AppConfig::resolve(Some("file:///tmp/report.json"), 60),
            Err(ConfigError::UnsupportedScheme {
                value: "file:///tmp/report.json".to_string()
            })
        );
        assert_eq!(
            AppConfig::resolve(None, 0),
            Err(ConfigError::ZeroTimeout)
        );
    }
}
