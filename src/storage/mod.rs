//! Abstract storage contract and its implementations.
//!
//! Handlers only ever see the [`Storage`] trait; the backing engine is an
//! external collaborator expected to provide its own concurrency safety.

use crate::error::AppError;
use crate::models::account::Account;
use async_trait::async_trait;

pub mod postgres;

pub use postgres::PgStorage;

/// Storage contract for bank accounts.
///
/// # Implementations
///
/// - [`PgStorage`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persists a new account and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    async fn create_account(&self, account: Account) -> Result<Account, AppError>;

    /// Returns all accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on backend errors.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Looks up a single account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AccountNotFound`] if no account has the given
    /// identifier, [`AppError::Database`] on backend errors.
    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError>;

    /// Deletes an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AccountNotFound`] if no account has the given
    /// identifier; deleting a missing account is never a silent success.
    async fn delete_account(&self, id: i64) -> Result<(), AppError>;
}
