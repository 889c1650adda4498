pub mod parser;
pub mod types;
pub mod utils;

// Re-export the most common items for convenience
pub use parser::parse;
pub use types::FrontMatter;
pub use utils::{extract_content, extract_front_matter, has_front_matter};
