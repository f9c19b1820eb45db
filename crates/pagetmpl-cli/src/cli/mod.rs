//! CLI for pagetmpl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagetmpl_core::config;

use commands::{run_fetch, run_render, run_serve, run_vars};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pagetmpl")]
#[command(about = "Fill in mustache placeholders of a remote page and open it as a new page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the template form and the page-text proxy over HTTP.
    Serve {
        /// Address to listen on (overrides `listen_addr` in config).
        #[arg(long, value_name = "ADDR")]
        listen: Option<String>,
        /// Remote site base URL (overrides `remote_base_url` in config).
        #[arg(long, value_name = "URL")]
        remote_base: Option<String>,
    },

    /// Fetch a template page and print its title and contents as JSON.
    Fetch {
        /// Template page URL, e.g. https://scrapbox.io/<project>/<page>.
        url: String,
    },

    /// List the placeholders of a template page and their field kind.
    Vars {
        /// Template page URL.
        url: String,
    },

    /// Fill in a template page and print the page-creation URL.
    Render {
        /// Template page URL.
        url: String,
        /// Placeholder value as NAME=VALUE (repeatable). Flags take true/false.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// Proceed without asking when text placeholders are left empty.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Parses `NAME=VALUE`; the value may be empty or contain `=`.
fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got \"{s}\"")),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve {
                listen,
                remote_base,
            } => {
                if let Some(addr) = listen {
                    cfg.listen_addr = addr;
                }
                if let Some(base) = remote_base {
                    cfg.remote_base_url = base;
                }
                run_serve(&cfg).await?
            }
            CliCommand::Fetch { url } => run_fetch(&cfg, &url).await?,
            CliCommand::Vars { url } => run_vars(&cfg, &url).await?,
            CliCommand::Render { url, set, yes } => run_render(&cfg, &url, set, yes).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
