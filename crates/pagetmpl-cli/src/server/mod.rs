//! HTTP server: the template form UI and the page-text proxy endpoint.
//!
//! Every request is self-contained. The template source travels in hidden
//! form fields between the form page and `/create`, so the server holds no
//! per-user state.

mod handlers;
mod page;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use pagetmpl_core::source::PageTextSource;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

/// Shared, read-only server state.
#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<dyn PageTextSource + Send + Sync>,
    pub remote_base_url: String,
    pub boolean_prefix: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/create", post(handlers::create))
        .route("/api/scrapbox", get(handlers::api_page_text))
        .route("/healthz", get(handlers::health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}

/// Binds `addr` and serves until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    tracing::info!(
        %addr,
        remote = %state.remote_base_url,
        boolean_prefix = %state.boolean_prefix,
        "binding HTTP listener"
    );
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    println!("Listening on http://{addr}/");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    tracing::info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
