//! Bridge configuration.

use std::time::Duration;

/// Name of the default app.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP bridge configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_host: String,
    pub(crate) app_name: String,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Get the bridge host.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Get the app name calls are addressed to.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for the HTTP bridge.
#[derive(Debug)]
pub struct HttpBridgeBuilder {
    api_host: String,
    app_name: Option<String>,
    timeout: Option<Duration>,
}

impl HttpBridgeBuilder {
    /// Create a new builder for the bridge at `api_host`.
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            app_name: None,
            timeout: None,
        }
    }

    /// Set the app name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, crate::Error> {
        if self.api_host.is_empty() {
            return Err(crate::Error::Config("api_host cannot be empty".into()));
        }

        let app_name = self.app_name.unwrap_or_else(|| DEFAULT_APP_NAME.into());
        if app_name.is_empty() {
            return Err(crate::Error::Config("app_name cannot be empty".into()));
        }

        Ok(Config {
            api_host: self.api_host.trim_end_matches('/').to_string(),
            app_name,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
