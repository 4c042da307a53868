//! Bearer-token authentication guard and token issuance.
//!
//! The guard protects the single-account lookup route. Per request it:
//! 1. Parses the `{id}` path segment, rejecting non-integer ids up front
//! 2. Reads the token from the `x-jwt-token` header
//! 3. Verifies the HS256 signature and the expiry claim
//! 4. Loads the referenced account from storage
//! 5. Compares the account's number against the token's claim
//!
//! Every auth failure collapses into the same 403 `permission denied`
//! response so callers cannot distinguish a forged signature from a claim
//! mismatch or a missing account.

use crate::{error::AppError, handlers::parse_id, state::AppState};
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Request header carrying the signed token.
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// How long a minted token stays valid.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims embedded in an account token.
///
/// Reconstructed from the signed string on every request; never stored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Number of the account this token authorizes
    pub account_number: i64,

    /// Expiry (unix timestamp, seconds)
    pub expires_at: i64,
}

/// Mint a signed token binding the given account number.
///
/// Called at account-creation time. Signing uses the symmetric secret from
/// configuration with HS256.
pub fn mint_token(account_number: i64, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims {
        account_number,
        expires_at: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry, returning its claims.
///
/// Only HS256 is accepted; a token whose header names any other algorithm
/// fails signature verification regardless of its payload.
fn verify_token(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry lives in the custom expiresAt claim, checked below
    validation.validate_exp = false;
    validation.required_spec_claims = HashSet::new();

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::PermissionDenied)?;

    if data.claims.expires_at < Utc::now().timestamp() {
        return Err(AppError::PermissionDenied);
    }

    Ok(data.claims)
}

/// Auth guard for the single-account lookup route.
///
/// Registered with `from_fn_with_state` in front of exactly one handler.
/// On success the wrapped handler runs; on any failure the guard
/// short-circuits with 403 and the inner handler is never called.
///
/// Malformed ids are rejected with 400 naming the id before any token or
/// storage work happens.
pub async fn jwt_guard(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id)?;

    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::PermissionDenied)?;

    let claims = verify_token(token, &state.config.jwt_secret)?;

    // Re-authorize against storage: the token must name the very account
    // the caller is asking for. A lookup failure is indistinguishable from
    // a mismatch.
    let account = state
        .storage
        .get_account_by_id(id)
        .await
        .map_err(|_| AppError::PermissionDenied)?;

    if account.number != claims.account_number {
        return Err(AppError::PermissionDenied);
    }

    Ok(next.run(request).await)
}
