//! Error types for the analytics adapter.

/// Errors that can occur when forwarding analytics calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native layer rejected the call.
    #[error("native analytics error [{code}]: {message}")]
    Native { code: String, message: String },

    /// HTTP request to the bridge failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Analytics is only available for the default app.
    #[error("analytics is not available for app '{0}'")]
    UnsupportedApp(String),
}

impl Error {
    /// Build a native-layer error.
    pub fn native(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Native {
            code: code.into(),
            message: message.into(),
        }
    }
}
