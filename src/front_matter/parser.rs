use std::error::Error;

use log::warn;

use crate::front_matter::types::FrontMatter;

type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Parse front matter from content
pub fn parse(content: &str) -> BoxResult<FrontMatter> {
    // Check if content has front matter (starts with ---)
    if content.starts_with("---\n") || content.starts_with("---\r\n") {
        // Find the closing delimiter
        if let Some(end_pos) = content[3..].find("\n---") {
            let front_matter_str = &content[3..end_pos + 3];

            // Parse YAML front matter
            match serde_yaml::from_str::<FrontMatter>(front_matter_str) {
                Ok(front_matter) => {
                    return Ok(front_matter);
                }
                Err(e) => {
                    warn!("Error parsing front matter: {}", e);
                    // Return default if parsing fails
                    return Ok(FrontMatter::default());
                }
            }
        }
    }

    // No front matter found
    Ok(FrontMatter::default())
}
