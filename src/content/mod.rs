use serde::Serialize;

pub mod html_tree;
pub mod markdown_converter;
pub mod summarizer;

/// Raw Markdown and metadata for one post, as handed over by the storage layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostSource {
    pub title: String,
    pub markdown: Vec<u8>,
    /// RFC 3339 timestamp with numeric offset, e.g. `2024-06-01T10:00:00+01:00`
    pub uploaded: String,
    pub image_ref: Option<String>,
}

impl PostSource {
    pub fn new(title: impl Into<String>, markdown: impl Into<Vec<u8>>, uploaded: impl Into<String>) -> Self {
        PostSource {
            title: title.into(),
            markdown: markdown.into(),
            uploaded: uploaded.into(),
            image_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

/// One row of the listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub title: String,
    /// Plain text, escaped by the template
    pub summary: String,
    pub image_path: String,
    pub last_updated: String,
}

/// A fully rendered post page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPost {
    pub title: String,
    /// Processed HTML, injected unescaped by the template
    pub content: String,
    pub summary: Option<String>,
    pub image_path: String,
    pub last_updated: String,
}
