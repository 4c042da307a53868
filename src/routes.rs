//! Route table wiring.
//!
//! Routing is an explicit table of (method, path) pairs. Methods a matched
//! path does not support fall through to [`unsupported_method`], which turns
//! them into a structural error instead of a bare 405.

use crate::error::AppError;
use crate::handlers::{accounts, health, transfers};
use crate::middleware::auth;
use crate::state::AppState;
use axum::{
    Router,
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// `GET /account/{id}` is the only guarded route; the auth guard is layered
/// onto it before the unguarded `DELETE` is registered, so deletes bypass
/// the guard.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/account",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                .fallback(unsupported_method),
        )
        .route(
            "/account/{id}",
            get(accounts::get_account)
                .route_layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    auth::jwt_guard,
                ))
                .delete(accounts::delete_account)
                .fallback(unsupported_method),
        )
        .route(
            "/transfer",
            post(transfers::create_transfer).fallback(unsupported_method),
        )
        .route("/health", get(health::health_check))
        // Request/response tracing for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for methods a matched path does not support.
///
/// Produces 400 `unsupported method <METHOD>` with no handler side effects.
async fn unsupported_method(method: Method) -> AppError {
    AppError::UnsupportedMethod(method)
}
