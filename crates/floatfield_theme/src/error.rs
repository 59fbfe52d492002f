//! Error types for floatfield_theme

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme file could not be read
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid TOML or has a bad value (including colors)
    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for floatfield_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
