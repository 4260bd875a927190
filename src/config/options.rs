use serde::Deserialize;

use super::ConfigError;

/// Key naming a back-reference to the enclosing context. Deep key search
/// never descends into a mapping stored under it.
pub const PARENT_METADATA_KEY: &str = "parent_metadata";

/// Nesting levels a deep key search descends before giving up on a branch.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for [`KeyFinder`](crate::KeyFinder).
///
/// Missing fields take their defaults, so an empty document is valid:
///
/// ```
/// use dragon_tree::SearchOptions;
///
/// let options = SearchOptions::from_toml_str("max_depth = 32")?;
/// assert_eq!(options.max_depth, 32);
/// assert_eq!(options.excluded_keys, ["parent_metadata"]);
/// # Ok::<(), dragon_tree::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Deepest nesting level visited. Branches below it yield no results.
    pub max_depth: usize,

    /// Keys whose mapping values are never descended into. A key in this
    /// list can still be matched itself.
    pub excluded_keys: Vec<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            excluded_keys: vec![PARENT_METADATA_KEY.to_string()],
        }
    }
}

impl SearchOptions {
    /// Parses options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(())
    }

    pub(crate) fn is_excluded(&self, key: &str) -> bool {
        self.excluded_keys.iter().any(|k| k == key)
    }
}
