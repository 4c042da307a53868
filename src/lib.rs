//! # Bank Account Server
//!
//! A small REST API for managing bank accounts. It creates, lists, retrieves,
//! and deletes accounts, and accepts (but does not execute) transfer requests.
//!
//! ## Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: abstract [`storage::Storage`] contract with a PostgreSQL
//!   implementation on sqlx
//! - **Authentication**: HS256-signed bearer token in the `x-jwt-token`
//!   header, cross-checked against the stored account's number
//! - **Format**: JSON requests/responses
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See the
//! [`config`] module for the available variables.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod storage;

pub use error::AppError;
pub use state::AppState;
