//! Data models for stored entities and API request/response types.

/// Bank account model and account request/response types
pub mod account;
/// Transfer request payload
pub mod transfer;
