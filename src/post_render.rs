use std::sync::Arc;

use chrono::{DateTime, Utc};
use spdlog::{debug, info};

use crate::config::RenderConfig;
use crate::content::markdown_converter::MarkdownConverter;
use crate::content::summarizer::Summarizer;
use crate::content::{ListingEntry, PostSource, RenderedPost};
use crate::error::RenderError;
use crate::post_order::order_by_recency;
use crate::post_processor::ImageClassRule;
use crate::text_utils::{format_last_updated, slug};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Turns post sources into listing rows and post pages.
pub struct PostRenderer {
    converter: MarkdownConverter,
    summarizer: Summarizer,
    image_rule: ImageClassRule,
    image_dir: String,
    clock: Arc<dyn Clock>,
}

impl PostRenderer {
    pub fn new(config: RenderConfig) -> PostRenderer {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: RenderConfig, clock: Arc<dyn Clock>) -> PostRenderer {
        PostRenderer {
            converter: MarkdownConverter::new(config.allow_raw_html),
            summarizer: Summarizer::new(config.summary_max_chars),
            image_rule: ImageClassRule::new(config.image_class),
            image_dir: config.image_dir,
            clock,
        }
    }

    /// One entry per source, newest first. Never fails: a bad post gets an empty summary.
    pub fn render_listing(&self, sources: &[PostSource]) -> Vec<ListingEntry> {
        let now = self.clock.now();
        let mut ordered: Vec<&PostSource> = sources.iter().collect();
        order_by_recency(&mut ordered);

        let entries: Vec<ListingEntry> = ordered.into_iter()
            .map(|source| {
                let html = self.converter.convert(&source.markdown);
                ListingEntry {
                    title: source.title.clone(),
                    summary: self.summarizer.summarize(html.as_bytes()),
                    image_path: self.image_path(source),
                    last_updated: format_last_updated(&source.uploaded, now),
                }
            })
            .collect();

        info!("Rendered listing with {} posts", entries.len());
        entries
    }

    pub fn render_single_post(&self, source: &PostSource) -> Result<RenderedPost, RenderError> {
        if source.title.trim().is_empty() {
            return Err(RenderError::MissingTitle);
        }

        debug!("Rendering post {}", source.title);
        let html = self.converter.convert(&source.markdown);
        let content = self.image_rule.process(html.as_bytes())
            .map_err(|e| RenderError::post_processing(&source.title, e))?;

        let summary = self.summarizer.summarize(html.as_bytes());

        Ok(RenderedPost {
            title: source.title.clone(),
            content,
            summary: if summary.is_empty() { None } else { Some(summary) },
            image_path: self.image_path(source),
            last_updated: format_last_updated(&source.uploaded, self.clock.now()),
        })
    }

    fn image_path(&self, source: &PostSource) -> String {
        match source.image_ref {
            Some(ref image_ref) if !image_ref.trim().is_empty() => image_ref.clone(),
            _ => format!("{}/{}.png", self.image_dir.trim_end_matches('/'), slug(&source.title)),
        }
    }
}
