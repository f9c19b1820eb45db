//! Errors from loading a template page.

use thiserror::Error;

use crate::url_model::TemplateUrlError;

/// Outbound fetch failure. Every variant is reported to HTTP clients as
/// "not found".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u32 },

    #[error("response from {url} is not valid UTF-8")]
    NotUtf8 { url: String },
}

/// Failure to turn a template URL into a [`super::TemplateSource`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Url(#[from] TemplateUrlError),

    #[error("fetching {project}/{page}: {source}")]
    Fetch {
        project: String,
        page: String,
        #[source]
        source: FetchError,
    },
}
