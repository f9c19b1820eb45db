//! Template source loading: the fetch proxy.
//!
//! A template URL names a remote page by its last two path segments
//! (project and page title). The page's plain text is fetched through a
//! [`PageTextSource`] and split into a title line and body.

mod error;
mod remote;
mod split;

pub use error::{FetchError, LoadError};
pub use remote::RemotePageSource;
pub use split::split_page_text;

use serde::{Deserialize, Serialize};

use crate::url_model::{self, TemplateUrlError};

/// Identifies a remote page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    pub project_name: String,
    pub page_title: String,
}

impl PageRef {
    pub fn new(project_name: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            page_title: page_title.into(),
        }
    }

    pub fn from_template_url(url: &str) -> Result<Self, TemplateUrlError> {
        let (project_name, page_title) = url_model::project_and_page(url)?;
        Ok(Self {
            project_name,
            page_title,
        })
    }
}

/// Title and body of a fetched page, as returned by the proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub title: String,
    pub contents: String,
}

impl PageText {
    pub fn from_raw(text: &str) -> Self {
        let (title, contents) = split_page_text(text);
        Self { title, contents }
    }
}

/// Everything the form needs about one template page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSource {
    pub url: String,
    pub title: String,
    pub contents: String,
    pub project_name: String,
}

/// Retrieves the raw text of a remote page.
pub trait PageTextSource {
    fn fetch_text(&self, page: &PageRef) -> Result<String, FetchError>;
}

/// Fetches `page` and splits it into title and body. No retries.
pub fn fetch_page<S: PageTextSource + ?Sized>(
    source: &S,
    page: &PageRef,
) -> Result<PageText, FetchError> {
    let text = source.fetch_text(page)?;
    Ok(PageText::from_raw(&text))
}

/// Resolves a template URL into a [`TemplateSource`].
pub fn load_template<S: PageTextSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<TemplateSource, LoadError> {
    let page = PageRef::from_template_url(url)?;
    let text = fetch_page(source, &page).map_err(|source| LoadError::Fetch {
        project: page.project_name.clone(),
        page: page.page_title.clone(),
        source,
    })?;
    tracing::info!(
        project = %page.project_name,
        page = %page.page_title,
        "loaded template"
    );
    Ok(TemplateSource {
        url: url.to_string(),
        title: text.title,
        contents: text.contents,
        project_name: page.project_name,
    })
}
