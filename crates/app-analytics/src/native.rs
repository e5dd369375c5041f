//! The native analytics layer seam.

use crate::types::NativeCall;
use crate::Error;
use async_trait::async_trait;

/// An opaque native analytics module.
///
/// Implementations forward a call to the vendor SDK and resolve once it
/// reports success or failure. Batching, persistence and retries are the
/// implementation's business; the adapter only awaits the outcome.
#[async_trait]
pub trait NativeModule: Send + Sync {
    /// The app this module is bound to, if it addresses one.
    fn app_name(&self) -> Option<&str> {
        None
    }

    /// Forward a single call and wait for its completion.
    async fn invoke(&self, call: NativeCall) -> Result<(), Error>;
}
