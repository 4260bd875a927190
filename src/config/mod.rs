//! Traversal settings.

mod error;
mod options;

pub use error::ConfigError;
pub use options::{SearchOptions, DEFAULT_MAX_DEPTH, PARENT_METADATA_KEY};
