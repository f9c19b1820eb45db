//! Project/page extraction from a template page URL.

use percent_encoding::percent_decode_str;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateUrlError {
    #[error("invalid template URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("unsupported URL scheme \"{0}\" (expected http or https)")]
    UnsupportedScheme(String),

    #[error("template URL must end in /<project>/<page>")]
    MissingSegments,

    #[error("template URL path is not valid UTF-8 once decoded")]
    NotUtf8,
}

/// Returns the last two non-empty path segments of `raw`, percent-decoded.
///
/// Query string and fragment are ignored. A URL without a scheme, such as
/// `scrapbox.io/team/page`, is read as https.
pub fn project_and_page(raw: &str) -> Result<(String, String), TemplateUrlError> {
    let raw = raw.trim();
    let parsed = match url::Url::parse(raw) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            url::Url::parse(&format!("https://{raw}"))?
        }
        other => other?,
    };
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(TemplateUrlError::UnsupportedScheme(other.to_string())),
    }
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();
    let [.., project, page] = segments.as_slice() else {
        return Err(TemplateUrlError::MissingSegments);
    };
    Ok((decode(project)?, decode(page)?))
}

fn decode(segment: &str) -> Result<String, TemplateUrlError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| TemplateUrlError::NotUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        let (project, page) = project_and_page("https://scrapbox.io/team/daily-report").unwrap();
        assert_eq!(project, "team");
        assert_eq!(page, "daily-report");
    }

    #[test]
    fn decodes_segments_and_ignores_query() {
        let (project, page) =
            project_and_page("https://scrapbox.io/team/%E6%97%A5%E5%A0%B1?x=1#frag").unwrap();
        assert_eq!(project, "team");
        assert_eq!(page, "日報");
    }

    #[test]
    fn trailing_slash_and_deep_paths() {
        let (project, page) = project_and_page("https://example.com/a/b/c/").unwrap();
        assert_eq!((project.as_str(), page.as_str()), ("b", "c"));
    }

    #[test]
    fn too_few_segments() {
        assert!(matches!(
            project_and_page("https://scrapbox.io/team"),
            Err(TemplateUrlError::MissingSegments)
        ));
        assert!(matches!(
            project_and_page("https://scrapbox.io/"),
            Err(TemplateUrlError::MissingSegments)
        ));
    }

    #[test]
    fn rejects_non_http() {
        assert!(matches!(
            project_and_page("ftp://host/a/b"),
            Err(TemplateUrlError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            project_and_page("https://"),
            Err(TemplateUrlError::Invalid(_))
        ));
    }

    #[test]
    fn missing_scheme_reads_as_https() {
        let (project, page) = project_and_page("scrapbox.io/team/daily-report").unwrap();
        assert_eq!((project.as_str(), page.as_str()), ("team", "daily-report"));
        // The first segment is taken as the host.
        assert!(matches!(
            project_and_page("team/page"),
            Err(TemplateUrlError::MissingSegments)
        ));
    }
}
