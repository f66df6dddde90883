use std::path::{Path, PathBuf};

use art_event_types::PostInput;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// How a saved post is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFormat {
    /// Whole file is the post text; the file path is the origin.
    Text,
    /// A serialized [`PostInput`].
    Json,
}

/// A saved post discovered under the scan root.
#[derive(Debug, Clone)]
pub struct PostFile {
    pub path: PathBuf,
    pub format: PostFormat,
}

/// Find saved posts (`*.txt`, `*.json`) anywhere under `root`, sorted by path.
///
/// Unreadable directory entries are logged and skipped.
pub fn scan_posts(root: &Path) -> Vec<PostFile> {
    let mut results: Vec<PostFile> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let format = match e.path().extension().and_then(|x| x.to_str()) {
                Some("txt") => PostFormat::Text,
                Some("json") => PostFormat::Json,
                _ => return None,
            };
            Some(PostFile {
                path: e.into_path(),
                format,
            })
        })
        .collect();

    results.sort_by(|a, b| a.path.cmp(&b.path));
    results
}

/// Read one saved post.
pub fn load_post(file: &PostFile) -> Result<PostInput> {
    let content = std::fs::read_to_string(&file.path).map_err(|source| Error::ReadPost {
        path: file.path.clone(),
        source,
    })?;

    match file.format {
        PostFormat::Text => Ok(PostInput {
            text: content,
            origin_ref: file.path.display().to_string(),
            images: Vec::new(),
        }),
        PostFormat::Json => {
            let mut post: PostInput = serde_json::from_str(&content)?;
            if post.origin_ref.is_empty() {
                post.origin_ref = file.path.display().to_string();
            }
            Ok(post)
        }
    }
}
