//! Note content conversion.
//!
//! The service stores note bodies as HTML. Editing screens work on plain text
//! and wrap it in a single paragraph when sending it back.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Removes every HTML tag, keeping the text between them.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Wraps plain text as a single HTML paragraph.
pub fn wrap_paragraph(text: &str) -> String {
    format!("<p>{}</p>", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html("no tags"), "no tags");
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn test_wrap_then_strip_restores_text() {
        assert_eq!(strip_html(&wrap_paragraph("buy milk")), "buy milk");
    }
}
