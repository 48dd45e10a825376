use html5ever::tendril::StrTendril;
use html5ever::{local_name, namespace_url, ns, Attribute, QualName};
use markup5ever_rcdom::{Handle, NodeData};
use spdlog::debug;

use crate::content::html_tree::{is_element, HtmlFragment};
use crate::error::PostProcessError;

pub const DEFAULT_IMAGE_CLASS: &str = "img-fluid";

/// Adds a CSS class to every `<img>` so images scale with the page.
#[derive(Clone, Debug)]
pub struct ImageClassRule {
    class: String,
}

impl Default for ImageClassRule {
    fn default() -> Self {
        ImageClassRule::new(DEFAULT_IMAGE_CLASS)
    }
}

impl ImageClassRule {
    pub fn new(class: impl Into<String>) -> Self {
        ImageClassRule { class: class.into() }
    }

    /// Returns the number of `img` elements visited.
    pub fn apply(&self, fragment: &HtmlFragment) -> usize {
        let mut visited = 0;
        for node in fragment.descendants().iter().filter(|n| is_element(n, "img")) {
            self.add_class(node);
            visited += 1;
        }
        visited
    }

    pub fn process(&self, html: &[u8]) -> Result<String, PostProcessError> {
        let fragment = HtmlFragment::parse(html)?;
        let visited = self.apply(&fragment);
        debug!("Applied class {} to {} images", self.class, visited);
        fragment.to_html()
    }

    fn add_class(&self, node: &Handle) {
        let NodeData::Element { ref attrs, .. } = node.data else {
            return;
        };
        let mut attrs = attrs.borrow_mut();

        match attrs.iter_mut().find(|a| a.name.local == local_name!("class")) {
            Some(attr) => {
                if attr.value.split_whitespace().any(|token| token == self.class) {
                    return;
                }
                let value = if attr.value.trim().is_empty() {
                    self.class.clone()
                } else {
                    format!("{} {}", attr.value.trim_end(), self.class)
                };
                attr.value = StrTendril::from(value);
            }
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), local_name!("class")),
                value: StrTendril::from(self.class.as_str()),
            }),
        }
    }
}

pub fn apply_presentation_rules(html: &[u8], class: &str) -> Result<String, PostProcessError> {
    ImageClassRule::new(class).process(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_class_keeps_src() {
        let html = apply_presentation_rules(br#"<p><img src="a.png"></p>"#, "img-fluid").unwrap();
        assert_eq!(html, r#"<p><img src="a.png" class="img-fluid"></p>"#);
        assert_eq!(html.matches("<img").count(), 1);
    }

    #[test]
    fn test_merges_existing_class() {
        let rule = ImageClassRule::default();
        let html = rule.process(br#"<img class="rounded" alt="x" src="b.png">"#).unwrap();
        assert_eq!(html, r#"<img class="rounded img-fluid" alt="x" src="b.png">"#);
    }

    #[test]
    fn test_empty_class_replaced() {
        let rule = ImageClassRule::default();
        let html = rule.process(br#"<img class="" src="b.png">"#).unwrap();
        assert_eq!(html, r#"<img class="img-fluid" src="b.png">"#);
    }

    #[test]
    fn test_idempotent() {
        let rule = ImageClassRule::default();
        let once = rule.process(br#"<p><img src="a.png"><img class="img-fluid x" src="b.png"></p>"#).unwrap();
        let twice = rule.process(once.as_bytes()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice, r#"<p><img src="a.png" class="img-fluid"><img class="img-fluid x" src="b.png"></p>"#);
    }

    #[test]
    fn test_other_nodes_untouched() {
        let src = r#"<h2 id="t">Title</h2><p>Text <a href="/x" class="link">link</a></p><pre><code>let x = 1;</code></pre>"#;
        let html = ImageClassRule::default().process(src.as_bytes()).unwrap();
        assert_eq!(html, src);
    }

    #[test]
    fn test_visits_every_image_once() {
        let depth = 12;
        let breadth = 5;

        // Each level holds `breadth` images and one nested div
        let mut html = String::new();
        for _ in 0..depth {
            html.push_str("<div>");
            for i in 0..breadth {
                html.push_str(&format!(r#"<span><img src="{}.png"></span>"#, i));
            }
        }
        for _ in 0..depth {
            html.push_str("</div>");
        }

        let fragment = HtmlFragment::parse(html.as_bytes()).unwrap();
        let rule = ImageClassRule::default();
        assert_eq!(rule.apply(&fragment), depth * breadth);

        let out = fragment.to_html().unwrap();
        assert_eq!(out.matches(r#"class="img-fluid""#).count(), depth * breadth);
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let depth = 2_000;
        let html = format!("{}<img src=\"deep.png\">{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let fragment = HtmlFragment::parse(html.as_bytes()).unwrap();
        assert_eq!(ImageClassRule::default().apply(&fragment), 1);
    }

    #[test]
    fn test_images_inside_template() {
        let src = r#"<template><p>hidden <img src="t.png"></p></template><img src="v.png">"#;
        let fragment = HtmlFragment::parse(src.as_bytes()).unwrap();
        assert_eq!(ImageClassRule::default().apply(&fragment), 2);
        assert_eq!(fragment.to_html().unwrap(),
                   r#"<template><p>hidden <img src="t.png" class="img-fluid"></p></template><img src="v.png" class="img-fluid">"#);
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let res = apply_presentation_rules(b"<p>\xc3\x28</p>", "img-fluid");
        assert!(matches!(res, Err(PostProcessError::InvalidUtf8(_))));
    }
}
