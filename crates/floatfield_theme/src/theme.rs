//! The complete field theme

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::tokens::{ColorTokens, LabelTokens, MetricTokens, TypographyTokens};

/// All tokens the floating-label fields read
///
/// Every group and every key is optional in TOML; missing values keep their
/// defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldTheme {
    pub colors: ColorTokens,
    pub metrics: MetricTokens,
    pub label: LabelTokens,
    pub typography: TypographyTokens,
}

impl FieldTheme {
    /// Parse a theme from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded field theme");
        Ok(theme)
    }
}
