use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

/// Line-per-entry text files the bot draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Prompts,
    Affirmations,
    Genders,
}

impl Resource {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Prompts => "prompts.txt",
            Self::Affirmations => "affirmations.txt",
            Self::Genders => "gender.txt",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),
    #[error("{} has no entries", .0.display())]
    Empty(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Directory holding the resource files. Files are read on every pick, so
/// edits take effect without a restart.
#[derive(Clone, Debug)]
pub struct ContentLibrary {
    dir: PathBuf,
}

impl ContentLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, resource: Resource) -> PathBuf {
        self.dir.join(resource.file_name())
    }

    pub async fn pick_random(&self, resource: Resource) -> Result<String, ContentError> {
        pick_random(&self.path_of(resource)).await
    }
}

/// Trimmed, non-blank lines in file order.
pub fn parse_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn load_entries(path: &Path) -> Result<Vec<String>, ContentError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ContentError::Missing(path.to_path_buf()))
        }
        Err(source) => {
            return Err(ContentError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(parse_entries(&text))
}

/// Uniformly random entry of the file at `path`.
pub async fn pick_random(path: &Path) -> Result<String, ContentError> {
    let entries = load_entries(path).await?;
    entries
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ContentError::Empty(path.to_path_buf()))
}
