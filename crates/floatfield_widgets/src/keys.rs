//! Environment keys read by [`TextInputField`](crate::TextInputField)

use floatfield_core::{Color, EnvironmentKey};
use floatfield_theme::ThemeState;

use crate::floating_label::LabelAnimationPolicy;

/// Whether descendant fields show the inline clear button (default `true`)
pub struct ClearButtonOnTextField;

impl EnvironmentKey for ClearButtonOnTextField {
    type Value = bool;

    fn default_value() -> bool {
        true
    }
}

/// Outline color of a focused descendant field (default: theme accent)
pub struct TextFieldBorderColor;

impl EnvironmentKey for TextFieldBorderColor {
    type Value = Color;

    fn default_value() -> Color {
        ThemeState::get().colors.accent
    }
}

/// Which label placement changes animate in descendant fields
pub struct LabelAnimation;

impl EnvironmentKey for LabelAnimation {
    type Value = LabelAnimationPolicy;

    fn default_value() -> LabelAnimationPolicy {
        LabelAnimationPolicy::default()
    }
}
