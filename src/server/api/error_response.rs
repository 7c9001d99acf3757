use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub details: Option<serde_json::Value>,
    /// Error message
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ErrorResponseType,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum ErrorResponseType {
    #[serde(rename = "debug-mode-disabled")]
    DebugModeDisabled,
    #[serde(rename = "bridge-not-found")]
    BridgeNotFound,
    #[serde(rename = "bridge-not-whitelisted")]
    BridgeNotWhitelisted,
    #[serde(rename = "uncaught-error")]
    UncaughtError,
}
