//! Alternate page rendering for Jekyll-style sites.
//!
//! A page that declares `alt_layout` and `alt_url` in its front matter is
//! cloned into a second, fileless page with that layout and permalink. The
//! clone is excluded from navigation and appended to the site's page list
//! before other generators run, so navigation builders and the like see the
//! expanded set.

pub mod front_matter;
pub mod generator;
pub mod site;
pub mod types;

pub use front_matter::FrontMatter;
pub use generator::{built_in_generators, run_generators, AltPageExpander, Generator, Priority};
pub use site::{Page, Site};
pub use types::BoxResult;
