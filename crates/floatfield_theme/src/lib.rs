//! floatfield Theme
//!
//! Design tokens for the floating-label fields: colors, insets, label motion,
//! and typography metrics. Every fixed visual constant the widgets use lives
//! here so a host can restyle them from a TOML file.
//!
//! ```rust
//! use floatfield_theme::FieldTheme;
//!
//! let theme = FieldTheme::from_toml_str(r##"
//!     [colors]
//!     accent = "#FF9500"
//!
//!     [label]
//!     transition_ms = 200.0
//! "##).unwrap();
//!
//! assert_eq!(theme.label.transition_ms, 200.0);
//! assert_eq!(theme.label.active_scale, 0.5);
//! ```

pub mod error;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::FieldTheme;
pub use tokens::{ColorTokens, LabelTokens, MetricTokens, TypographyTokens};
