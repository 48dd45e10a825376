use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use chrono::{DateTime, SecondsFormat, Utc};
use spdlog::warn;

use crate::content::PostSource;

/// Posts stored as `<title>.md` files in a single directory.
pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        PostList { root_dir: root_dir.into() }
    }

    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                posts.push(path);
            }
        }
        posts.sort();
        Ok(posts)
    }

    /// Every post of the directory. Unreadable files are skipped with a warning.
    pub fn load_all(&self) -> io::Result<Vec<PostSource>> {
        let mut sources = vec![];
        for path in self.retrieve_files()? {
            match Self::load_file(&path) {
                Ok(source) => sources.push(source),
                Err(e) => warn!("Skipping post {}. Desc={}", path.display(), e),
            }
        }
        Ok(sources)
    }

    pub fn load(&self, title: &str) -> io::Result<PostSource> {
        if title.is_empty() || title.contains('/') || title.contains('\\') || title.contains("..") {
            return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post title '{}'", title)));
        }

        Self::load_file(&self.root_dir.join(format!("{}.md", title)))
    }

    fn load_file(path: &Path) -> io::Result<PostSource> {
        let title = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post path {}", path.display()))),
        };

        let markdown = fs::read(path)?;
        let modified: DateTime<Utc> = fs::metadata(path)?.modified()?.into();

        Ok(PostSource {
            title,
            markdown,
            uploaded: modified.to_rfc3339_opts(SecondsFormat::Secs, false),
            image_ref: None,
        })
    }
}
