use spdlog::warn;

use crate::content::html_tree::{is_element, text_content, HtmlFragment};

pub const ELLIPSIS: char = '…';

/// Builds plain-text teasers from rendered post HTML.
#[derive(Clone, Debug)]
pub struct Summarizer {
    max_chars: usize,
}

impl Summarizer {
    pub fn new(max_chars: usize) -> Self {
        Summarizer { max_chars }
    }

    pub fn summarize(&self, html: &[u8]) -> String {
        summarize(html, self.max_chars)
    }
}

/// Paragraph text, in document order, cut at `max_chars` characters.
/// Returns an empty string when the HTML cannot be parsed.
pub fn summarize(html: &[u8], max_chars: usize) -> String {
    let fragment = match HtmlFragment::parse(html) {
        Ok(fragment) => fragment,
        Err(e) => {
            warn!("Unable to parse HTML for summary. Desc={}", e);
            return String::new();
        }
    };

    let mut buf = String::new();
    let mut count = 0;
    for node in fragment.descendants().iter().filter(|n| is_element(n, "p")) {
        if count >= max_chars && !buf.is_empty() {
            break;
        }

        let text = collapse_whitespace(&text_content(node));
        if text.is_empty() {
            continue;
        }

        if !buf.is_empty() {
            buf.push(' ');
            count += 1;
        }
        count += text.chars().count();
        buf.push_str(&text);
    }

    truncate(buf, max_chars)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(mut buf: String, max_chars: usize) -> String {
    match buf.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            buf.truncate(cut);
            buf.push(ELLIPSIS);
            buf
        }
        None => buf,
    }
}
