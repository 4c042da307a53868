//! Transfer request payload.

use serde::{Deserialize, Serialize};

/// Request body for the transfer endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "toAccount": 42,
///   "amount": 1500
/// }
/// ```
///
/// The transfer handler parses and echoes this payload; no balance is
/// mutated and the destination account is not checked for existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Identifier of the destination account
    pub to_account: i64,

    /// Amount to transfer
    pub amount: i64,
}
