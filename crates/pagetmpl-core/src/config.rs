use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::form::DEFAULT_BOOLEAN_PREFIX;

/// Global configuration loaded from `~/.config/pagetmpl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagetmplConfig {
    /// Remote site that serves page text and receives new pages.
    pub remote_base_url: String,
    /// Address the form server binds to.
    pub listen_addr: String,
    /// Placeholder names starting with this prefix render as checkboxes.
    pub boolean_prefix: String,
    /// Connect timeout for the outbound page fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for the outbound page fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for PagetmplConfig {
    fn default() -> Self {
        Self {
            remote_base_url: "https://scrapbox.io".to_string(),
            listen_addr: "127.0.0.1:3000".to_string(),
            boolean_prefix: DEFAULT_BOOLEAN_PREFIX.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagetmpl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagetmplConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PagetmplConfig> {
    if !path.exists() {
        let default_cfg = PagetmplConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PagetmplConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = PagetmplConfig::default();
        assert_eq!(cfg.remote_base_url, "https://scrapbox.io");
        assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
        assert_eq!(cfg.boolean_prefix, "is_");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PagetmplConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PagetmplConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            remote_base_url = "http://127.0.0.1:9000"
            boolean_prefix = "has_"
        "#;
        let cfg: PagetmplConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.remote_base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.boolean_prefix, "has_");
        assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, PagetmplConfig::default());

        fs::write(&path, "listen_addr = \"0.0.0.0:8080\"\n").unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(second.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn load_or_init_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
