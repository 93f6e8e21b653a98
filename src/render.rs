//! Markdown-to-HTML rendering with a fixed option set.

use comrak::{markdown_to_html, Options};

/// Renders a Markdown document to an HTML fragment.
///
/// The option set is fixed: bare URLs and email addresses are autolinked,
/// and single newlines render as `<br />`. Dialect options are not exposed
/// to callers.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.autolink = true;
    options.render.hardbreaks = true;

    markdown_to_html(markdown, &options)
}

#[cfg(test)]
mod tests {
    use super::to_html;

    #[test]
    fn renders_emphasis() {
        assert_eq!(to_html("*hi*"), "<p><em>hi</em></p>\n");
    }

    #[test]
    fn renders_newlines_as_line_breaks() {
        let html = to_html("one\ntwo\n");
        assert!(html.contains("<br />"), "got: {html}");
    }

    #[test]
    fn autolinks_bare_urls() {
        let html = to_html("visit https://example.com today\n");
        assert!(html.contains("<a href=\"https://example.com\">"), "got: {html}");
    }

    #[test]
    fn autolinks_email_addresses() {
        let html = to_html("mail me@example.com now\n");
        assert!(html.contains("href=\"mailto:me@example.com\""), "got: {html}");
    }

    #[test]
    fn empty_input_renders_to_empty_string() {
        assert_eq!(to_html(""), "");
    }
}
