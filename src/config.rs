use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::post_processor::DEFAULT_IMAGE_CLASS;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Characters kept in listing summaries, not counting the ellipsis
    pub summary_max_chars: usize,
    /// CSS class added to every image of a post page
    pub image_class: String,
    /// Where default post images live, `{image_dir}/{slug}.png`
    pub image_dir: String,
    /// Pass raw HTML in the Markdown through instead of escaping it
    pub allow_raw_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            summary_max_chars: 400,
            image_class: DEFAULT_IMAGE_CLASS.to_string(),
            image_dir: "/images".to_string(),
            allow_raw_html: false,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Paths {
    pub posts_dir: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    pub paths: Paths,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    if !str_path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(exe_dir) => PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> Result<Config, ConfigError> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content)?;

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> Result<Config, ConfigError> {
    let cfg_content = fs::read_to_string(cfg_path).map_err(|source| ConfigError::Read {
        path: cfg_path.to_path_buf(),
        source,
    })?;

    parse_config(&cfg_content)
}
