use std::collections::HashMap;
use std::error::Error;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Front matter for a page
///
/// Known keys are typed fields; anything else lands in `custom` so arbitrary
/// front matter survives a round trip. A key set to YAML null deserializes to
/// `None`, the same as an absent key.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Page title
    pub title: Option<String>,

    /// Layout to use
    pub layout: Option<String>,

    /// Custom permalink
    pub permalink: Option<String>,

    /// Page description
    pub description: Option<String>,

    /// Date as a string (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)
    pub date: Option<String>,

    /// Whether the content is published
    pub published: Option<bool>,

    /// Layout for the alternate rendering; presence (with `alt_url`)
    /// triggers cloning
    pub alt_layout: Option<String>,

    /// Permalink for the alternate rendering
    pub alt_url: Option<String>,

    /// Exclude the page from generated navigation
    pub nav_exclude: Option<bool>,

    /// Navigation parent page title
    pub parent: Option<String>,

    /// Navigation grandparent page title
    pub grand_parent: Option<String>,

    /// Custom front matter fields
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Create a new empty front matter
    pub fn new() -> Self {
        FrontMatter::default()
    }

    /// Parse front matter from content
    pub fn parse(content: &str) -> BoxResult<Self> {
        crate::front_matter::parse(content)
    }

    /// Convert front matter to YAML string
    pub fn to_yaml(&self) -> BoxResult<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Alternate layout and permalink, if this page declares one.
    ///
    /// Both values must be set; a key carrying YAML null does not count.
    /// Empty strings are not rejected here, rendering of an empty layout or
    /// permalink is the host's concern.
    pub fn alt_rendering(&self) -> Option<(&str, &str)> {
        match (self.alt_layout.as_deref(), self.alt_url.as_deref()) {
            (Some(layout), Some(url)) => Some((layout, url)),
            _ => None,
        }
    }

    /// Get parsed date if available
    pub fn get_date(&self) -> Option<DateTime<Utc>> {
        if let Some(date_str) = &self.date {
            // Try ISO 8601 format (YYYY-MM-DD)
            if let Ok(dt) = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
                let naive_dt = dt.and_hms_opt(0, 0, 0)?;
                return Some(Utc.from_utc_datetime(&naive_dt));
            }

            // Try Jekyll date format (YYYY-MM-DD HH:MM:SS)
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
                return Some(Utc.from_utc_datetime(&dt));
            }

            // Try RFC3339 format
            if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
                return Some(dt.with_timezone(&Utc));
            }
        }
        None
    }
}
