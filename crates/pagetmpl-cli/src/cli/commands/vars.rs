//! `pagetmpl vars <url>` – list placeholders of a template page.

use anyhow::Result;
use pagetmpl_core::config::PagetmplConfig;
use pagetmpl_core::form::FieldKind;
use pagetmpl_core::submit;

pub async fn run_vars(cfg: &PagetmplConfig, url: &str) -> Result<()> {
    let src = super::load_template(cfg, url).await?;
    let schema = submit::schema_for(&src, &cfg.boolean_prefix)?;
    if schema.is_empty() {
        println!("No placeholders in template.");
    } else {
        println!("{:<8} {}", "KIND", "NAME");
        for field in &schema.fields {
            let kind = match field.kind {
                FieldKind::Text => "text",
                FieldKind::Toggle => "toggle",
            };
            println!("{:<8} {}", kind, field.name);
        }
    }
    Ok(())
}
