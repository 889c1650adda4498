use std::path::PathBuf;

use crate::site::page::Page;

/// A site under construction: the source root and the ordered page list.
///
/// The page list is mutable for the duration of one build; generators append
/// to it through the `&mut Site` they are handed.
#[derive(Debug, Default)]
pub struct Site {
    /// Site source root
    pub source: PathBuf,
    /// All pages, in collection order
    pub pages: Vec<Page>,
}

impl Site {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Site {
            source: source.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page to the collection
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }
}
