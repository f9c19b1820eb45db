//! libcurl-backed page text source.

use std::time::Duration;

use super::error::FetchError;
use super::{PageRef, PageTextSource};
use crate::config::PagetmplConfig;
use crate::url_model;

/// Fetches page text from `<base>/api/pages/<project>/<title>/text`.
///
/// Blocking; call from `spawn_blocking` when used from async code.
#[derive(Debug, Clone)]
pub struct RemotePageSource {
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl RemotePageSource {
    /// Source for `base_url` with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&PagetmplConfig {
            remote_base_url: base_url.into(),
            ..PagetmplConfig::default()
        })
    }

    pub fn from_config(cfg: &PagetmplConfig) -> Self {
        Self {
            base_url: cfg.remote_base_url.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl PageTextSource for RemotePageSource {
    fn fetch_text(&self, page: &PageRef) -> Result<String, FetchError> {
        let url = url_model::page_text_url(&self.base_url, &page.project_name, &page.page_title);
        tracing::debug!(%url, "fetching page text");

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Status { url, status });
        }

        String::from_utf8(body).map_err(|_| FetchError::NotUtf8 { url })
    }
}
