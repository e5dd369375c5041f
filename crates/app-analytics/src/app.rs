//! App handle that owns the native module.

use crate::analytics::Analytics;
use crate::config::DEFAULT_APP_NAME;
use crate::native::NativeModule;
use crate::Error;
use std::fmt;
use std::sync::Arc;

/// A registered app whose services are backed by a native module.
#[derive(Clone)]
pub struct App {
    name: String,
    native: Arc<dyn NativeModule>,
}

impl App {
    /// Create a new builder around the given native module.
    pub fn builder(native: impl NativeModule + 'static) -> AppBuilder {
        AppBuilder::new(Arc::new(native))
    }

    /// Create a builder from an already shared native module.
    pub fn builder_shared(native: Arc<dyn NativeModule>) -> AppBuilder {
        AppBuilder::new(native)
    }

    /// Get the app name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the default app.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_APP_NAME
    }

    /// Get the analytics service for this app.
    ///
    /// Analytics is only available for the default app.
    pub fn analytics(&self) -> Result<Analytics, Error> {
        if !self.is_default() {
            return Err(Error::UnsupportedApp(self.name.clone()));
        }
        Ok(Analytics::new(self.native.clone()))
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App").field("name", &self.name).finish()
    }
}

/// Builder for [`App`].
pub struct AppBuilder {
    name: Option<String>,
    native: Arc<dyn NativeModule>,
}

impl AppBuilder {
    fn new(native: Arc<dyn NativeModule>) -> Self {
        Self { name: None, native }
    }

    /// Set the app name. Defaults to [`DEFAULT_APP_NAME`].
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the app.
    pub fn build(self) -> Result<App, Error> {
        let name = self.name.unwrap_or_else(|| DEFAULT_APP_NAME.into());
        if name.is_empty() {
            return Err(Error::Config("app name cannot be empty".into()));
        }

        if let Some(bound) = self.native.app_name() {
            if bound != name {
                return Err(Error::Config(format!(
                    "native module is bound to app '{}', not '{}'",
                    bound, name
                )));
            }
        }

        Ok(App {
            name,
            native: self.native,
        })
    }
}
