use std::error::Error;

/// Common boxed result type used across the crate
pub type BoxResult<T> = Result<T, Box<dyn Error>>;
