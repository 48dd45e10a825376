use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

/// Failure while applying presentation rules to rendered HTML.
#[derive(Debug, thiserror::Error)]
pub enum PostProcessError {
    #[error("HTML is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("could not serialize processed HTML")]
    Serialize(#[from] io::Error),
}

/// Request level failure of a single post render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("post title is empty")]
    MissingTitle,

    #[error("post-processing failed for '{title}'")]
    PostProcessing {
        title: String,
        #[source]
        source: PostProcessError,
    },
}

impl RenderError {
    pub fn post_processing(title: &str, source: PostProcessError) -> Self {
        RenderError::PostProcessing {
            title: title.to_string(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error opening configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing configuration file")]
    Parse(#[from] toml::de::Error),
}
