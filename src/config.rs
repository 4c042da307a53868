//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables and
//! passed by reference into the components that need it (server, auth guard,
//! token issuance). There is no global configuration state.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `JWT_SECRET` (required): symmetric secret used to sign and verify
///   account tokens
/// - `LISTEN_ADDR` (optional): socket address to listen on, defaults to
///   `0.0.0.0:3000`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,

    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Default listen address if LISTEN_ADDR is not set.
fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists, then the environment is
    /// deserialized into a `Config` struct. Field names map to upper-case
    /// variable names: `jwt_secret` -> `JWT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed into the expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}
