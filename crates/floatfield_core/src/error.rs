//! Error types for floatfield_core

use thiserror::Error;

/// Errors raised by core primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color string was not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid color `{0}`: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Result type for floatfield_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
