//! Inline clear affordance

use floatfield_core::Color;

use crate::view::{button, empty, hstack, spacer, EdgeInsets, Icon, ViewNode, ViewRole};

/// The clear button shows only when enabled and there is text to clear
pub fn is_visible(text: &str, enabled: bool) -> bool {
    enabled && !text.is_empty()
}

/// Trailing-aligned clear button, or an empty view when hidden
pub fn clear_button(visible: bool, tint: Color, trailing_inset: f32) -> ViewNode {
    if !visible {
        return empty();
    }
    hstack().child(spacer()).child(
        button(Icon::ClearCircleFill)
            .role(ViewRole::ClearButton)
            .color(tint)
            .padding(EdgeInsets::ZERO.with_trailing(trailing_inset)),
    )
}
