use thiserror::Error;

use crate::Section;

/// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("section `{0}` is configured more than once")]
    DuplicateSection(Section),

    #[error("scroll threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

/// Errors raised by a [`PreferenceStorage`](crate::storage::PreferenceStorage) backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is not available")]
    Unavailable,

    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}
