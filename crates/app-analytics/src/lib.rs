//! Typed analytics adapter for a native analytics SDK.
//!
//! Each [`Analytics`] method forwards one call to a [`NativeModule`] and
//! resolves with the native outcome. The crate ships [`HttpBridge`], which
//! reaches the native SDK through a host-side bridge endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_analytics::{analytics, App, HttpBridge};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), app_analytics::Error> {
//!     let bridge = HttpBridge::builder("http://127.0.0.1:9099").build()?;
//!     let app = App::builder(bridge).build()?;
//!
//!     analytics(&app)?
//!         .log_event("signup", HashMap::from([("plan".into(), "pro".into())]))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod analytics;
mod app;
mod config;
mod error;
mod native;
mod transport;
pub mod types;

pub use analytics::Analytics;
pub use app::{App, AppBuilder};
pub use config::{Config, HttpBridgeBuilder, DEFAULT_APP_NAME, DEFAULT_TIMEOUT};
pub use error::Error;
pub use native::NativeModule;
pub use transport::HttpBridge;
pub use types::{
    EventParams, NativeCall, UserProperties, DEFAULT_MINIMUM_SESSION_DURATION_MS,
    DEFAULT_SESSION_TIMEOUT_DURATION_MS,
};

/// Get the analytics service for `app`.
///
/// Equivalent to [`App::analytics`].
pub fn analytics(app: &App) -> Result<Analytics, Error> {
    app.analytics()
}
