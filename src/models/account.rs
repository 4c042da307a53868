//! Account data model and API request/response types.
//!
//! This module defines:
//! - `Account`: the stored bank account entity
//! - `CreateAccountRequest`: request body for creating accounts
//! - `DeleteAccountResponse`: response body for successful deletes

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound for generated account numbers.
pub const ACCOUNT_NUMBER_MAX: i64 = 10_000_000;

/// A bank account as persisted by the storage backend.
///
/// The account number is generated exactly once, when the account is
/// constructed, and never changes afterwards. The identifier is assigned by
/// storage on insert.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "number": 4637218,
///   "balance": 0,
///   "createdAt": "2025-08-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, assigned by storage
    pub id: i64,

    /// Holder's first name
    pub first_name: String,

    /// Holder's last name
    pub last_name: String,

    /// Randomly generated account number
    ///
    /// Intended to be unique, though uniqueness is not enforced.
    pub number: i64,

    /// Current balance, zero at creation
    pub balance: i64,

    /// Timestamp when the account was created (UTC)
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Construct a new account for the given holder.
    ///
    /// The account number is drawn from `0..ACCOUNT_NUMBER_MAX` and the
    /// balance starts at zero. The id is left at zero until storage assigns
    /// the real one.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: 0,
            first_name,
            last_name,
            number: rand::rng().random_range(0..ACCOUNT_NUMBER_MAX),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
///
/// The create handler echoes this body back on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Response body for a successful account deletion.
///
/// Serializes as `{"deleted": 7}`.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    /// Identifier of the deleted account
    pub deleted: i64,
}
