use std::borrow::Cow;

use markdown::Options;
use spdlog::warn;

/// Markdown to HTML conversion. Never fails: bad input degrades to a best effort rendering.
#[derive(Clone, Debug, Default)]
pub struct MarkdownConverter {
    allow_raw_html: bool,
}

impl MarkdownConverter {
    pub fn new(allow_raw_html: bool) -> Self {
        MarkdownConverter { allow_raw_html }
    }

    pub fn convert(&self, md_bytes: &[u8]) -> String {
        let md_text = match String::from_utf8_lossy(md_bytes) {
            Cow::Borrowed(s) => Cow::Borrowed(s),
            Cow::Owned(s) => {
                warn!("Markdown is not valid UTF-8, invalid sequences were replaced");
                Cow::Owned(s)
            }
        };

        match markdown::to_html_with_options(&md_text, &self.options()) {
            Ok(html) => html,
            Err(e) => {
                warn!("Markdown conversion degraded to CommonMark. Desc={}", e.reason);
                markdown::to_html(&md_text)
            }
        }
    }

    fn options(&self) -> Options {
        let mut options = Options::gfm();
        options.compile.allow_dangerous_html = self.allow_raw_html;
        options
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::POST_DATA_MD;

    use super::*;

    #[test]
    fn test_common_subset() {
        let converter = MarkdownConverter::default();
        let html = converter.convert(POST_DATA_MD.as_bytes());
        assert!(html.contains("<h1>Learning Rust the slow way</h1>"));
        assert!(html.contains("<h2>Why</h2>"));
        assert!(html.contains("<em>slow</em>"));
        assert!(html.contains(r#"<a href="https://www.rust-lang.org">Rust</a>"#));
        assert!(html.contains(r#"<img src="crab.png" alt="crab" />"#));
        assert!(html.contains("<li>ownership</li>"));
        assert!(html.contains(r#"<pre><code class="language-rust">fn main() {}"#));
    }

    #[test]
    fn test_empty_input() {
        let converter = MarkdownConverter::default();
        assert_eq!(converter.convert(b""), "");
    }

    #[test]
    fn test_malformed_markdown_renders_literally() {
        let converter = MarkdownConverter::default();
        let html = converter.convert(b"**not closed [link](");
        assert_eq!(html, "<p>**not closed [link](</p>");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let converter = MarkdownConverter::default();
        let html = converter.convert(b"caf\xff");
        assert_eq!(html, "<p>caf\u{FFFD}</p>");
    }

    #[test]
    fn test_raw_html() {
        let escaped = MarkdownConverter::new(false).convert(b"<div>hi</div>");
        assert_eq!(escaped, "&lt;div&gt;hi&lt;/div&gt;");

        let passed = MarkdownConverter::new(true).convert(b"<div>hi</div>");
        assert_eq!(passed, "<div>hi</div>");
    }
}
