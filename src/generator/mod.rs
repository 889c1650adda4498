//! Generators run between reading a site's pages and rendering them, and may
//! grow the page list.

pub mod alt_page;

pub use alt_page::AltPageExpander;

use log::debug;

use crate::site::Site;
use crate::types::BoxResult;

/// Execution priority for a generator, highest runs first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
}

/// A generator that may inspect and mutate the site's page collection
pub trait Generator: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Where this generator sorts in the run order
    fn priority(&self) -> Priority {
        Priority::Normal
    }

    /// Run the generator against the site
    fn generate(&self, site: &mut Site) -> BoxResult<()>;
}

/// The generators every build runs
pub fn built_in_generators() -> Vec<Box<dyn Generator>> {
    vec![Box::new(AltPageExpander)]
}

/// Run generators in priority order, highest first.
///
/// Ties keep registration order, so repeated builds run identically.
pub fn run_generators(site: &mut Site, generators: &[Box<dyn Generator>]) -> BoxResult<()> {
    let mut ordered: Vec<&Box<dyn Generator>> = generators.iter().collect();
    ordered.sort_by(|a, b| b.priority().cmp(&a.priority()));

    for generator in ordered {
        debug!("Running generator: {}", generator.name());
        generator.generate(site)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Page;
    use std::path::Path;

    struct MarkerGenerator {
        marker: &'static str,
        priority: Priority,
    }

    impl Generator for MarkerGenerator {
        fn name(&self) -> &str {
            self.marker
        }

        fn priority(&self) -> Priority {
            self.priority
        }

        fn generate(&self, site: &mut Site) -> BoxResult<()> {
            let mut page = Page::without_a_file(&site.source, Path::new("/site"), self.marker);
            page.front_matter.title = Some(self.marker.to_string());
            site.add_page(page);
            Ok(())
        }
    }

    #[test]
    fn test_highest_priority_runs_first() {
        let mut site = Site::new("/site");
        let generators: Vec<Box<dyn Generator>> = vec![
            Box::new(MarkerGenerator {
                marker: "normal.md",
                priority: Priority::Normal,
            }),
            Box::new(MarkerGenerator {
                marker: "highest.md",
                priority: Priority::Highest,
            }),
        ];

        run_generators(&mut site, &generators).unwrap();

        assert_eq!(site.pages[0].name(), "highest.md");
        assert_eq!(site.pages[1].name(), "normal.md");
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let mut site = Site::new("/site");
        let generators: Vec<Box<dyn Generator>> = vec![
            Box::new(MarkerGenerator {
                marker: "first.md",
                priority: Priority::Normal,
            }),
            Box::new(MarkerGenerator {
                marker: "second.md",
                priority: Priority::Normal,
            }),
        ];

        run_generators(&mut site, &generators).unwrap();

        assert_eq!(site.pages[0].name(), "first.md");
        assert_eq!(site.pages[1].name(), "second.md");
    }
}
