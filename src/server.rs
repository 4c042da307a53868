//! Server startup and shutdown lifecycle.
//!
//! The accept loop runs as a background task while the caller waits for an
//! operating-system signal. Once the signal arrives, the listener stops
//! accepting and in-flight requests get a bounded grace period to finish;
//! overrunning it is a fatal error.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::storage::postgres::{self, PgStorage};

use anyhow::Context;
use axum::Router;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How long in-flight requests may keep running once shutdown starts.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Connect storage, bind the listener, and serve until shutdown.
///
/// # Errors
///
/// Returns an error if the database is unreachable, migrations fail, the
/// listen address cannot be bound, or shutdown exceeds the grace period.
/// All of these are fatal; `main` logs them and exits nonzero.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = postgres::create_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;
    postgres::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Database ready");

    let state = AppState::new(Arc::new(PgStorage::new(pool)), Arc::new(config.clone()));
    let app = app_router(state);

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("Server listening on {}", config.listen_addr);

    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` completes, then drain.
///
/// The accept loop is spawned as a background task. When `shutdown`
/// resolves, the loop stops accepting new connections and in-flight
/// requests may finish within [`SHUTDOWN_GRACE`]; a drain that overruns the
/// grace period is reported as an error.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .into_future(),
    );

    tokio::select! {
        // The accept loop dying on its own is fatal; don't wait for a signal.
        finished = &mut server => {
            finished.context("server task panicked")??;
            anyhow::bail!("server stopped unexpectedly");
        }
        _ = shutdown => {}
    }

    tracing::info!("Shutting down server...");
    let _ = drain_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(finished) => {
            finished.context("server task panicked")??;
            tracing::info!("Server gracefully stopped");
            Ok(())
        }
        Err(_) => anyhow::bail!(
            "requests still running {}s after shutdown began",
            SHUTDOWN_GRACE.as_secs()
        ),
    }
}

/// Completes when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
