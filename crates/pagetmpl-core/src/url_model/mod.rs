//! URL modeling: template URL parsing and outbound URL construction.
//!
//! Two outbound URLs exist: the plain-text endpoint of a remote page and the
//! page-creation URL that carries the rendered body as a query parameter.

mod encode;
mod path;

pub use encode::{encode_path_segment, encode_uri_component};
pub use path::{project_and_page, TemplateUrlError};

/// `<base>/api/pages/<project>/<title>/text`
pub fn page_text_url(base: &str, project: &str, title: &str) -> String {
    format!(
        "{}/api/pages/{}/{}/text",
        base.trim_end_matches('/'),
        encode_path_segment(project),
        encode_path_segment(title)
    )
}

/// `<base>/<project>/<title>?body=<body>`
///
/// The title is encoded as a path segment and the body like
/// `encodeURIComponent`.
pub fn new_page_url(base: &str, project: &str, title: &str, body: &str) -> String {
    format!(
        "{}/{}/{}?body={}",
        base.trim_end_matches('/'),
        encode_path_segment(project),
        encode_path_segment(title),
        encode_uri_component(body)
    )
}
