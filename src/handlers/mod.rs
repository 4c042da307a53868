//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Runs against the storage contract
//! 3. Returns a JSON response, or an error for the shared error bridge

use crate::error::AppError;

/// Account management endpoints
pub mod accounts;
/// Health check endpoint
pub mod health;
/// Transfer endpoint
pub mod transfers;

/// Parse the `{id}` path segment.
///
/// Anything that is not an integer yields [`AppError::InvalidId`] naming the
/// offending value, before any storage or auth work.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}
