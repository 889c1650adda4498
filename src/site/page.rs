use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::front_matter::{self, FrontMatter};
use crate::types::BoxResult;

/// A page in the site
#[derive(Debug, Clone)]
pub struct Page {
    /// Full source path of the page
    pub path: PathBuf,
    /// Path relative to the site source root
    pub relative_path: PathBuf,
    /// Date parsed from front matter, if any
    pub date: Option<DateTime<Utc>>,
    /// Content body, without the front matter block
    pub content: String,
    pub front_matter: FrontMatter,
}

impl Page {
    /// Build a page from raw text, extracting its front matter block.
    pub fn from_raw(source: &Path, relative_path: impl Into<PathBuf>, raw: &str) -> BoxResult<Self> {
        let relative_path = relative_path.into();
        let (front_matter, content) = front_matter::extract_front_matter(raw)?;

        Ok(Page {
            path: source.join(&relative_path),
            relative_path,
            date: front_matter.get_date(),
            content,
            front_matter,
        })
    }

    /// Create a page with no backing file at the given directory and basename.
    ///
    /// Content and front matter start empty; callers fill them in.
    pub fn without_a_file(source: &Path, dir: &Path, name: &str) -> Self {
        let path = dir.join(name);
        let relative_path = path
            .strip_prefix(source)
            .unwrap_or(&path)
            .to_path_buf();

        Page {
            path,
            relative_path,
            date: None,
            content: String::new(),
            front_matter: FrontMatter::new(),
        }
    }

    /// Directory containing the page's source file
    pub fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Basename of the page's source file
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
