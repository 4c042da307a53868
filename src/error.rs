//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. Handlers never write error bodies themselves; every
//! error crosses this single bridge.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant carries the structure needed to pick a status code without
/// inspecting message strings.
///
/// # Error Categories
///
/// - **Request validation**: bad path identifiers, unsupported methods,
///   malformed request bodies
/// - **Storage**: backend failures and missing accounts
/// - **Authorization**: every auth guard rejection, collapsed into one
///   variant so no caller learns which check failed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Storage errors are propagated to the client unchanged.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The `{id}` path segment was not an integer.
    ///
    /// Returns HTTP 400 Bad Request, naming the offending value.
    #[error("invalid id {0}")]
    InvalidId(String),

    /// A matched path does not support the request method.
    ///
    /// Returns HTTP 400 Bad Request, naming the method.
    #[error("unsupported method {0}")]
    UnsupportedMethod(Method),

    /// No account exists with the requested identifier.
    #[error("account {0} not found")]
    AccountNotFound(i64),

    /// Request body could not be decoded.
    ///
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Token signing failed while minting an account token.
    #[error("{0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// The auth guard rejected the request.
    ///
    /// Always rendered as 403 with the fixed message `permission denied`;
    /// the specific failed check (missing token, bad signature, expiry,
    /// claim mismatch, lookup failure) is never revealed.
    #[error("permission denied")]
    PermissionDenied,
}

/// Convert AppError into an HTTP response.
///
/// Allows handlers to return `Result<T, AppError>` and have errors
/// automatically rendered as the JSON envelope:
///
/// ```json
/// {"error": "account 7 not found"}
/// ```
///
/// # Status Code Mapping
///
/// - `PermissionDenied` → 403 Forbidden
/// - everything else → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::PermissionDenied => StatusCode::FORBIDDEN,
            AppError::Database(_)
            | AppError::InvalidId(_)
            | AppError::UnsupportedMethod(_)
            | AppError::AccountNotFound(_)
            | AppError::InvalidRequest(_)
            | AppError::Token(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
