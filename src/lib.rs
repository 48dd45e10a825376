pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod post_list;
pub mod post_order;
pub mod post_processor;
pub mod post_render;
pub mod text_utils;
mod test_data;

pub use content::{ListingEntry, PostSource, RenderedPost};
pub use error::{ConfigError, PostProcessError, RenderError};
pub use post_render::{Clock, PostRenderer, SystemClock};
