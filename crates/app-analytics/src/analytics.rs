//! Analytics service.

use crate::native::NativeModule;
use crate::types::{EventParams, NativeCall, UserProperties};
use crate::Error;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, Span};

/// The analytics service for the default app.
///
/// Every method forwards one call to the native module and resolves with
/// its outcome. Nothing is validated, cached or retried here.
///
/// # Example
///
/// ```rust,no_run
/// use app_analytics::{App, HttpBridge};
/// use std::collections::HashMap;
///
/// #[tokio::main]
/// async fn main() -> Result<(), app_analytics::Error> {
///     let app = App::builder(HttpBridge::builder("http://127.0.0.1:9099").build()?).build()?;
///     let analytics = app.analytics()?;
///
///     analytics
///         .log_event("add_to_cart", HashMap::from([("item".into(), "sku_1".into())]))
///         .await?;
///     analytics.set_user_id(Some("usr_123")).await?;
///     analytics.set_current_screen("Product", Some("ProductScreen")).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Analytics {
    native: Arc<dyn NativeModule>,
}

impl Analytics {
    pub(crate) fn new(native: Arc<dyn NativeModule>) -> Self {
        Self { native }
    }

    /// Log a custom event with params.
    ///
    /// The native SDK rejects reserved event names and param keys longer
    /// than 100 characters.
    #[instrument(skip(self, name, params), fields(name = tracing::field::Empty, param_count = params.len()))]
    pub async fn log_event(
        &self,
        name: impl Into<String>,
        params: EventParams,
    ) -> Result<(), Error> {
        let name = name.into();
        Span::current().record("name", name.as_str());

        self.forward(NativeCall::LogEvent { name, params }).await
    }

    /// Enable or disable analytics collection on the device.
    ///
    /// Collection is enabled by default.
    #[instrument(skip(self))]
    pub async fn set_analytics_collection_enabled(&self, enabled: bool) -> Result<(), Error> {
        self.forward(NativeCall::SetAnalyticsCollectionEnabled { enabled })
            .await
    }

    /// Set the current screen name, optionally overriding the screen class.
    ///
    /// Without an override the native SDK reports its host activity or view
    /// controller class.
    #[instrument(skip(self, screen_name, screen_class_override))]
    pub async fn set_current_screen(
        &self,
        screen_name: impl Into<String>,
        screen_class_override: Option<&str>,
    ) -> Result<(), Error> {
        self.forward(NativeCall::SetCurrentScreen {
            screen_name: screen_name.into(),
            screen_class_override: screen_class_override.map(str::to_string),
        })
        .await
    }

    /// Set the minimum engagement time before a session starts.
    ///
    /// The native default is [`DEFAULT_MINIMUM_SESSION_DURATION_MS`](crate::DEFAULT_MINIMUM_SESSION_DURATION_MS).
    #[instrument(skip(self))]
    pub async fn set_minimum_session_duration(&self, milliseconds: u64) -> Result<(), Error> {
        self.forward(NativeCall::SetMinimumSessionDuration { milliseconds })
            .await
    }

    /// Set the inactivity duration that ends the current session.
    ///
    /// The native default is [`DEFAULT_SESSION_TIMEOUT_DURATION_MS`](crate::DEFAULT_SESSION_TIMEOUT_DURATION_MS).
    #[instrument(skip(self))]
    pub async fn set_session_timeout_duration(&self, milliseconds: u64) -> Result<(), Error> {
        self.forward(NativeCall::SetSessionTimeoutDuration { milliseconds })
            .await
    }

    /// Set the user id. `None` removes a previously assigned id.
    #[instrument(skip(self, id), fields(clear = id.is_none()))]
    pub async fn set_user_id(&self, id: Option<&str>) -> Result<(), Error> {
        self.forward(NativeCall::SetUserId {
            id: id.map(str::to_string),
        })
        .await
    }

    /// Set a user property. `None` removes it.
    #[instrument(skip(self, name, value), fields(clear = value.is_none()))]
    pub async fn set_user_property(
        &self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<(), Error> {
        self.forward(NativeCall::SetUserProperty {
            name: name.into(),
            value: value.map(str::to_string),
        })
        .await
    }

    /// Set several user properties at once. `None` values remove them.
    #[instrument(skip(self, properties), fields(count = properties.len()))]
    pub async fn set_user_properties(&self, properties: UserProperties) -> Result<(), Error> {
        self.forward(NativeCall::SetUserProperties { properties })
            .await
    }

    /// Clear all analytics data on the device and reset the app instance id.
    #[instrument(skip(self))]
    pub async fn reset_analytics_data(&self) -> Result<(), Error> {
        self.forward(NativeCall::ResetAnalyticsData).await
    }

    async fn forward(&self, call: NativeCall) -> Result<(), Error> {
        debug!(method = call.method(), "forwarding to native module");
        self.native.invoke(call).await
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics").finish_non_exhaustive()
    }
}
