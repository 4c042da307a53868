//! Bank Account Server - Main Application Entry Point
//!
//! REST API server for managing bank accounts: create, list, retrieve, and
//! delete accounts, plus a transfer endpoint that parses and echoes transfer
//! requests without moving money.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Create database connection pool and run migrations
//! 4. Build HTTP router with routes and the auth guard
//! 5. Serve until an interrupt or termination signal arrives, then drain
//!    in-flight requests within the shutdown grace period

use bank_account_server::{config::Config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Bind failures and shutdown overruns surface here and terminate the
    // process with a nonzero exit code.
    server::run(config).await
}
