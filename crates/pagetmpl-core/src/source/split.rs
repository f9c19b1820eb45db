//! Split fetched page text into title line and body.

/// Splits on the first `\n`: the first line is the title, the rest the body.
/// Text without a newline is all title.
pub fn split_page_text(text: &str) -> (String, String) {
    match text.split_once('\n') {
        Some((title, contents)) => (title.to_string(), contents.to_string()),
        None => (text.to_string(), String::new()),
    }
}
