//! Process-wide active theme
//!
//! Widgets read the active theme at render time through [`ThemeState::get`].
//! The default theme is installed lazily on first access, so hosts that never
//! customize styling need no setup.

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::theme::FieldTheme;

static THEME: OnceLock<RwLock<Arc<FieldTheme>>> = OnceLock::new();

/// Accessor for the active [`FieldTheme`]
pub struct ThemeState;

impl ThemeState {
    fn cell() -> &'static RwLock<Arc<FieldTheme>> {
        THEME.get_or_init(|| RwLock::new(Arc::new(FieldTheme::default())))
    }

    /// The active theme
    pub fn get() -> Arc<FieldTheme> {
        Self::cell()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active theme; takes effect at the next render
    pub fn set(theme: FieldTheme) {
        *Self::cell().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(theme);
        tracing::debug!("field theme replaced");
    }

    /// Load `path` and make it active, keeping the current theme on failure
    pub fn load_or_keep(path: impl AsRef<Path>) -> Arc<FieldTheme> {
        match FieldTheme::load(path) {
            Ok(theme) => Self::set(theme),
            Err(err) => tracing::warn!("keeping current field theme: {err}"),
        }
        Self::get()
    }
}
