use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to parse search options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,
}
