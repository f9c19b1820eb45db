//! `pagetmpl serve` – run the form server.

use anyhow::{Context, Result};
use pagetmpl_core::config::PagetmplConfig;
use pagetmpl_core::source::RemotePageSource;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::server::{self, AppState};

pub async fn run_serve(cfg: &PagetmplConfig) -> Result<()> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;
    let state = AppState {
        pages: Arc::new(RemotePageSource::from_config(cfg)),
        remote_base_url: cfg.remote_base_url.clone(),
        boolean_prefix: cfg.boolean_prefix.clone(),
    };
    server::serve(addr, state).await
}
