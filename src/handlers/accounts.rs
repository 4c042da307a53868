//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create a new account
//! - GET /account/{id} - Get account by id (behind the auth guard)
//! - DELETE /account/{id} - Delete account by id

use crate::{
    error::AppError,
    handlers::parse_id,
    middleware::auth,
    models::account::{Account, CreateAccountRequest, DeleteAccountResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// List all accounts.
///
/// # Endpoint
///
/// `GET /account`
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "firstName": "Ada",
///     "lastName": "Lovelace",
///     "number": 4637218,
///     "balance": 0,
///     "createdAt": "2025-08-01T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.storage.get_accounts().await?;

    Ok(Json(accounts))
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
///
/// # Response
///
/// On success the request body is echoed back with 200 OK. The account
/// number is generated during construction and the identifier is assigned
/// by storage.
///
/// A signed token for the new account's number is minted here and written
/// to the log; it is not part of the response.
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<CreateAccountRequest>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let account = Account::new(request.first_name.clone(), request.last_name.clone());
    let created = state.storage.create_account(account).await?;

    let token = auth::mint_token(created.number, &state.config.jwt_secret)?;
    tracing::info!(account_id = created.id, %token, "minted token for new account");

    Ok(Json(request))
}

/// Get a specific account by id.
///
/// # Endpoint
///
/// `GET /account/{id}`
///
/// The auth guard runs before this handler; by the time it executes, the
/// caller has presented a valid token naming this account's number.
///
/// # Response
///
/// - **Success (200 OK)**: the account
/// - **Error (400)**: non-integer id, or no account with that id
pub async fn get_account(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Account>, AppError> {
    let id = parse_id(&raw_id)?;

    let account = state.storage.get_account_by_id(id).await?;

    Ok(Json(account))
}

/// Delete an account by id.
///
/// # Endpoint
///
/// `DELETE /account/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `{"deleted": 7}`
/// - **Error (400)**: non-integer id, or no account with that id
pub async fn delete_account(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let id = parse_id(&raw_id)?;

    state.storage.delete_account(id).await?;

    Ok(Json(DeleteAccountResponse { deleted: id }))
}
