//! `pagetmpl render <url> --set NAME=VALUE...` – print the page-creation URL.

use anyhow::{bail, Context, Result};
use pagetmpl_core::config::PagetmplConfig;
use pagetmpl_core::form::FieldKind;
use pagetmpl_core::submit::{self, SubmitOutcome};
use pagetmpl_core::template::{Value, Values};
use std::io::{self, BufRead, Write};

pub async fn run_render(
    cfg: &PagetmplConfig,
    url: &str,
    set: Vec<(String, String)>,
    yes: bool,
) -> Result<()> {
    let src = super::load_template(cfg, url).await?;
    let mut values = assignments_to_values(set, &cfg.boolean_prefix)?;

    let mut outcome = submit::submit(
        &src,
        &mut values,
        &cfg.boolean_prefix,
        &cfg.remote_base_url,
        yes,
    )?;
    if let SubmitOutcome::NeedsConfirmation { empty_fields } = &outcome {
        if !confirm(empty_fields)? {
            bail!("aborted: empty fields {}", empty_fields.join(", "));
        }
        outcome = submit::submit(
            &src,
            &mut values,
            &cfg.boolean_prefix,
            &cfg.remote_base_url,
            true,
        )?;
    }

    match outcome {
        SubmitOutcome::Ready(page) => {
            println!("{}", page.url);
            Ok(())
        }
        SubmitOutcome::NeedsConfirmation { .. } => bail!("submission was not confirmed"),
    }
}

/// Converts `--set` pairs into typed values; flag names need a boolean.
pub(crate) fn assignments_to_values(
    set: Vec<(String, String)>,
    boolean_prefix: &str,
) -> Result<Values> {
    let mut values = Values::new();
    for (name, raw) in set {
        let value = match FieldKind::classify(&name, boolean_prefix) {
            FieldKind::Toggle => Value::Flag(parse_flag(&raw).with_context(|| {
                format!("{name} is a flag; expected true/false, got \"{raw}\"")
            })?),
            FieldKind::Text => Value::Text(raw),
        };
        values.insert(name, value);
    }
    Ok(values)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn confirm(empty_fields: &[String]) -> Result<bool> {
    print!(
        "Fields left empty: {}. Create the page anyway? [y/N] ",
        empty_fields.join(", ")
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
