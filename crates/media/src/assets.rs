//! Startup asset loading.
//!
//! Layout under the asset root:
//!
//! ```text
//! assets/
//!   cats/           one text-art file per image; key = file name up to the first '.'
//!   sounds/audio.wav
//!   video/video.txt
//! ```
//!
//! Any missing piece is fatal; nothing here retries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::{key_from_file_name, ImagePool};

pub const CATS_DIR: &str = "cats";
pub const TRACK_FILE: &str = "sounds/audio.wav";
pub const VIDEO_FILE: &str = "video/video.txt";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("no cat images in {}", path.display())]
    NoImages { path: PathBuf },

    #[error("unsupported image format (expected UTF-8 text art): {}", path.display())]
    Unsupported { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolved asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub cats: PathBuf,
    pub track: PathBuf,
    pub video: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            cats: root.join(CATS_DIR),
            track: root.join(TRACK_FILE),
            video: root.join(VIDEO_FILE),
            root,
        }
    }
}

/// One cat image: its key and text-art rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatArt {
    pub key: String,
    pub lines: Vec<String>,
}

/// Everything read from disk at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    pub paths: AssetPaths,
    pub cats: Vec<CatArt>,
}

impl Assets {
    /// Check the track and video exist and read every cat image.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, AssetError> {
        let paths = AssetPaths::new(root);
        for path in [&paths.track, &paths.video] {
            if !path.is_file() {
                return Err(AssetError::Missing { path: path.clone() });
            }
        }
        let cats = load_cats(&paths.cats)?;
        Ok(Self { paths, cats })
    }

    /// Distinct keys of the loaded images.
    pub fn pool(&self) -> ImagePool {
        ImagePool::new(self.cats.iter().map(|c| c.key.clone()))
    }
}

fn load_cats(dir: &Path) -> Result<Vec<CatArt>, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::Missing {
            path: dir.to_path_buf(),
        });
    }
    let io_err = |source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut cats = Vec::with_capacity(files.len());
    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let key = key_from_file_name(name);
        if key.is_empty() {
            // Dotfiles such as .gitkeep.
            continue;
        }
        let bytes = fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| AssetError::Unsupported {
            path: path.clone(),
        })?;
        cats.push(CatArt {
            key: key.to_string(),
            lines: text.lines().map(|l| l.trim_end().to_string()).collect(),
        });
    }

    if cats.is_empty() {
        return Err(AssetError::NoImages {
            path: dir.to_path_buf(),
        });
    }
    debug!(count = cats.len(), dir = %dir.display(), "loaded cat images");
    Ok(cats)
}
