use log::{debug, info};

use crate::generator::{Generator, Priority};
use crate::site::{Page, Site};
use crate::types::BoxResult;

/// Clones pages that declare `alt_layout` and `alt_url` into alternate
/// renderings.
///
/// The clone lives at the same directory and basename as the original, takes
/// `alt_layout` as its layout and `alt_url` as its permalink, and is stripped
/// of navigation metadata so it never shows up next to the original in a nav
/// tree. Runs at the highest priority so generators that read the final page
/// list see the clones.
pub struct AltPageExpander;

impl Generator for AltPageExpander {
    fn name(&self) -> &str {
        "alt_page_expander"
    }

    fn priority(&self) -> Priority {
        Priority::Highest
    }

    fn generate(&self, site: &mut Site) -> BoxResult<()> {
        // Collect clones while iterating the snapshot, append after.
        let mut alt_pages = Vec::new();

        for page in &site.pages {
            let (alt_layout, alt_url) = match page.front_matter.alt_rendering() {
                Some(pair) => pair,
                None => continue,
            };

            // The original keeps its alt keys, so on a repeat run it would
            // be re-cloned. Its clone is recognizable: same path, permalink
            // equal to alt_url, no alt keys of its own.
            if already_expanded(&site.pages, page, alt_url) {
                debug!(
                    "Alternate rendering for {} already present, skipping",
                    page.relative_path.display()
                );
                continue;
            }

            debug!(
                "Expanding {} into alternate rendering at {}",
                page.relative_path.display(),
                alt_url
            );

            let mut data = page.front_matter.clone();
            data.layout = Some(alt_layout.to_string());
            data.permalink = Some(alt_url.to_string());
            data.alt_layout = None;
            data.alt_url = None;
            data.nav_exclude = Some(true);
            data.parent = None;
            data.grand_parent = None;

            let mut alt_page = Page::without_a_file(&site.source, &page.dir(), &page.name());
            alt_page.content = page.content.clone();
            alt_page.date = data.get_date();
            alt_page.front_matter = data;

            alt_pages.push(alt_page);
        }

        if !alt_pages.is_empty() {
            info!("Added {} alternate page(s)", alt_pages.len());
        }
        site.pages.extend(alt_pages);

        Ok(())
    }
}

/// Whether the alternate rendering of `original` is already in the collection
fn already_expanded(pages: &[Page], original: &Page, alt_url: &str) -> bool {
    pages.iter().any(|existing| {
        existing.path == original.path
            && existing.front_matter.alt_rendering().is_none()
            && existing.front_matter.permalink.as_deref() == Some(alt_url)
    })
}
