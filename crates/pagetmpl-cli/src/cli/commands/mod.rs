//! CLI command handlers. Each command is in its own file.

mod fetch;
mod render;
mod serve;
mod vars;

pub use fetch::run_fetch;
pub use render::run_render;
pub use serve::run_serve;
pub use vars::run_vars;

use anyhow::{Context, Result};
use pagetmpl_core::config::PagetmplConfig;
use pagetmpl_core::source::{self, RemotePageSource, TemplateSource};

/// Loads a template page on the blocking pool.
pub(crate) async fn load_template(cfg: &PagetmplConfig, url: &str) -> Result<TemplateSource> {
    let remote = RemotePageSource::from_config(cfg);
    let target = url.to_string();
    let src = tokio::task::spawn_blocking(move || source::load_template(&remote, &target))
        .await
        .context("template load task failed")?
        .with_context(|| format!("load template {url}"))?;
    Ok(src)
}
