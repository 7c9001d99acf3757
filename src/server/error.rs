use axum::{
    extract::rejection::QueryRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::api::error_response::{ErrorResponse, ErrorResponseType};

pub enum ServerError {
    DebugModeDisabled,
    BridgeNotFound(String),
    BridgeNotWhitelisted(String),
    NotFound(Uri),
    UncaughtError {
        details: Option<serde_json::Value>,
        message: String,
        error_type: ErrorResponseType,
    },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::DebugModeDisabled => (
                StatusCode::FORBIDDEN,
                axum::Json(ErrorResponse {
                    details: None,
                    message: "Connectivity reports are only available in debug mode".to_owned(),
                    error_type: ErrorResponseType::DebugModeDisabled,
                }),
            )
                .into_response(),
            Self::BridgeNotFound(bridge) => (
                StatusCode::NOT_FOUND,
                axum::Json(ErrorResponse {
                    details: None,
                    message: format!("Bridge not found: {}", bridge),
                    error_type: ErrorResponseType::BridgeNotFound,
                }),
            )
                .into_response(),
            Self::BridgeNotWhitelisted(bridge) => (
                StatusCode::FORBIDDEN,
                axum::Json(ErrorResponse {
                    details: None,
                    message: format!("Bridge is not whitelisted: {}", bridge),
                    error_type: ErrorResponseType::BridgeNotWhitelisted,
                }),
            )
                .into_response(),
            Self::NotFound(uri) => (
                StatusCode::NOT_FOUND,
                format!("Path not found: {}", uri.path()),
            )
                .into_response(),
            Self::UncaughtError {
                details,
                message,
                error_type,
            } => (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse {
                    details,
                    message,
                    error_type,
                }),
            )
                .into_response(),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        Self::UncaughtError {
            details: None,
            message: err.to_string(),
            error_type: ErrorResponseType::UncaughtError,
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(err: QueryRejection) -> Self {
        Self::UncaughtError {
            details: None,
            message: err.to_string(),
            error_type: ErrorResponseType::UncaughtError,
        }
    }
}
