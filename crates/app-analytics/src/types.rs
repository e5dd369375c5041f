//! Call shapes forwarded to the native layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default minimum session duration applied by the native SDK (10 seconds).
///
/// Informational only: the adapter never applies it.
pub const DEFAULT_MINIMUM_SESSION_DURATION_MS: u64 = 10_000;

/// Default session timeout applied by the native SDK (30 minutes).
///
/// Informational only: the adapter never applies it.
pub const DEFAULT_SESSION_TIMEOUT_DURATION_MS: u64 = 1_800_000;

/// Event parameters, keyed by parameter name.
pub type EventParams = HashMap<String, String>;

/// User properties; a `None` value removes the property.
pub type UserProperties = HashMap<String, Option<String>>;

/// A single call to the native analytics module.
///
/// Serialized as `{"method": "<name>", ...args}` with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum NativeCall {
    #[serde(rename_all = "camelCase")]
    LogEvent { name: String, params: EventParams },

    #[serde(rename_all = "camelCase")]
    SetAnalyticsCollectionEnabled { enabled: bool },

    #[serde(rename_all = "camelCase")]
    SetCurrentScreen {
        screen_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        screen_class_override: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    SetMinimumSessionDuration { milliseconds: u64 },

    #[serde(rename_all = "camelCase")]
    SetSessionTimeoutDuration { milliseconds: u64 },

    /// `id: None` is sent as `null` and clears the user id.
    #[serde(rename_all = "camelCase")]
    SetUserId { id: Option<String> },

    /// `value: None` is sent as `null` and clears the property.
    #[serde(rename_all = "camelCase")]
    SetUserProperty { name: String, value: Option<String> },

    #[serde(rename_all = "camelCase")]
    SetUserProperties { properties: UserProperties },

    ResetAnalyticsData,
}

impl NativeCall {
    /// Method name as the native module knows it.
    pub fn method(&self) -> &'static str {
        match self {
            NativeCall::LogEvent { .. } => "logEvent",
            NativeCall::SetAnalyticsCollectionEnabled { .. } => "setAnalyticsCollectionEnabled",
            NativeCall::SetCurrentScreen { .. } => "setCurrentScreen",
            NativeCall::SetMinimumSessionDuration { .. } => "setMinimumSessionDuration",
            NativeCall::SetSessionTimeoutDuration { .. } => "setSessionTimeoutDuration",
            NativeCall::SetUserId { .. } => "setUserId",
            NativeCall::SetUserProperty { .. } => "setUserProperty",
            NativeCall::SetUserProperties { .. } => "setUserProperties",
            NativeCall::ResetAnalyticsData => "resetAnalyticsData",
        }
    }
}

/// Reply from the native bridge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeReply {
    pub success: bool,
    #[serde(default)]
    pub error: Option<NativeErrorBody>,
}

/// Error reported by the native layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeErrorBody {
    pub code: String,
    pub message: String,
}
