//! HTTP bridge to a host process embedding the native SDK.

use crate::config::{Config, HttpBridgeBuilder};
use crate::native::NativeModule;
use crate::types::{NativeCall, NativeReply};
use crate::Error;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Forwards each call as JSON to a bridge endpoint.
#[derive(Debug)]
pub struct HttpBridge {
    client: reqwest::Client,
    endpoint: String,
    config: Config,
}

impl HttpBridge {
    /// Create a new builder for the bridge at `api_host`.
    pub fn builder(api_host: impl Into<String>) -> HttpBridgeBuilder {
        HttpBridgeBuilder::new(api_host)
    }

    /// Create a new HTTP bridge.
    pub(crate) fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let endpoint = format!(
            "{}/v1/apps/{}/analytics:invoke",
            config.api_host(),
            config.app_name()
        );

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Get the bridge configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl HttpBridgeBuilder {
    /// Build the HTTP bridge.
    pub fn build(self) -> Result<HttpBridge, Error> {
        HttpBridge::new(self.build_config()?)
    }
}

#[async_trait]
impl NativeModule for HttpBridge {
    fn app_name(&self) -> Option<&str> {
        Some(self.config.app_name())
    }

    async fn invoke(&self, call: NativeCall) -> Result<(), Error> {
        debug!(endpoint = %self.endpoint, method = call.method(), "invoking native call");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&call)
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => "Unknown error".into(),
        };

        // No content is a plain completion
        if status.is_success() && body.trim().is_empty() {
            debug!(method = call.method(), "native call completed");
            return Ok(());
        }

        let reply = match serde_json::from_str::<NativeReply>(&body) {
            Ok(reply) => reply,
            Err(_) => {
                warn!(status = %status, body = %body, "unrecognized bridge reply");
                return Err(Error::native(format!("http-{}", status.as_u16()), body));
            }
        };

        if status.is_success() && reply.success {
            debug!(method = call.method(), "native call completed");
            return Ok(());
        }

        let (code, message) = match reply.error {
            Some(err) => (err.code, err.message),
            None => (format!("http-{}", status.as_u16()), "unknown error".to_string()),
        };
        warn!(method = call.method(), code = %code, message = %message, "native call failed");

        Err(Error::Native { code, message })
    }
}
