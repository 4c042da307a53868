//! Transfer HTTP handler.

use crate::{error::AppError, models::transfer::TransferRequest};
use axum::{Json, extract::rejection::JsonRejection};

/// Accept a transfer request.
///
/// # Endpoint
///
/// `POST /transfer`
///
/// # Request Body
///
/// ```json
/// {
///   "toAccount": 42,
///   "amount": 1500
/// }
/// ```
///
/// The request is parsed and echoed back. No balance is mutated and the
/// destination account is not checked for existence.
pub async fn create_transfer(
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferRequest>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    Ok(Json(request))
}
