//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request
//! before any handler work happens.

/// Bearer-token auth guard and token issuance
pub mod auth;
