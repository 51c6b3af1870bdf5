//! `shield serve`

use anyhow::Context;
use shield_config::ShieldConfig;
use tokio::net::TcpListener;

use crate::cli::ServeArgs;
use crate::routes::router;
use crate::state::AppState;

/// Build the application state and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the database cannot be
/// opened, or the listener fails.
pub async fn handle(args: &ServeArgs, config: ShieldConfig) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(bind) = &args.bind {
        server.bind.clone_from(bind);
    }
    let addr = server.socket_addr()?;

    let state = AppState::from_config(&config).await?;
    tracing::info!(providers = ?state.analyzer.provider_names(), "analysis chain ready");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, reports = %state.reports.dir().display(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
