//! `pagetmpl fetch <url>` – print a template page as JSON.

use anyhow::Result;
use pagetmpl_core::config::PagetmplConfig;
use pagetmpl_core::source::PageText;

pub async fn run_fetch(cfg: &PagetmplConfig, url: &str) -> Result<()> {
    let src = super::load_template(cfg, url).await?;
    let text = PageText {
        title: src.title,
        contents: src.contents,
    };
    println!("{}", serde_json::to_string_pretty(&text)?);
    Ok(())
}
