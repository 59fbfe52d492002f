//! Theme token groups

use floatfield_core::Color;
use serde::Deserialize;

/// Color tokens
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    /// Unfocused outline of the environment-styled field
    #[serde(with = "hex_color")]
    pub border_neutral: Color,
    /// Default outline of the configurable field
    #[serde(with = "hex_color")]
    pub border_default: Color,
    /// Default focused outline when no ancestor overrides it
    #[serde(with = "hex_color")]
    pub accent: Color,
    /// Outline and caption color while a validation error is shown
    #[serde(with = "hex_color")]
    pub error: Color,
    #[serde(with = "hex_color")]
    pub placeholder: Color,
    /// Clear icon tint of the configurable field; the environment-styled
    /// field tints its icon with `border_neutral`
    #[serde(with = "hex_color")]
    pub clear_icon: Color,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            border_neutral: Color::from_hex(0xD1D1D6),
            border_default: Color::GRAY,
            accent: Color::from_hex(0x32ADE6),
            error: Color::from_hex(0xFF3B30),
            placeholder: Color::from_hex(0x8E8E93),
            clear_icon: Color::from_hex(0x8E8E93),
        }
    }
}

/// Insets, widths and radii
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricTokens {
    pub border_width: f32,
    /// Corner radius of the environment-styled field
    pub outlined_corner_radius: f32,
    /// Default corner radius of the configurable field
    pub custom_corner_radius: f32,
    pub label_leading_inset: f32,
    pub input_leading_inset: f32,
    pub input_vertical_inset: f32,
    /// Extra trailing room reserved for the clear button while focused
    pub focused_trailing_inset: f32,
    pub box_padding: f32,
    pub clear_trailing_inset: f32,
    pub custom_vertical_inset: f32,
    pub custom_horizontal_inset: f32,
    pub custom_stack_spacing: f32,
    pub custom_bottom_padding: f32,
    pub error_horizontal_inset: f32,
    pub custom_clear_trailing_inset: f32,
}

impl Default for MetricTokens {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            outlined_corner_radius: 4.0,
            custom_corner_radius: 8.0,
            label_leading_inset: 30.0,
            input_leading_inset: 10.0,
            input_vertical_inset: 5.0,
            focused_trailing_inset: 50.0,
            box_padding: 16.0,
            clear_trailing_inset: 22.0,
            custom_vertical_inset: 8.0,
            custom_horizontal_inset: 16.0,
            custom_stack_spacing: 4.0,
            custom_bottom_padding: 4.0,
            error_horizontal_inset: 8.0,
            custom_clear_trailing_inset: 4.0,
        }
    }
}

/// Floating label motion
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelTokens {
    pub resting_scale: f32,
    pub active_scale: f32,
    /// Vertical offset of the active label (negative is up)
    pub active_offset_y: f32,
    pub transition_ms: f32,
}

impl Default for LabelTokens {
    fn default() -> Self {
        Self {
            resting_scale: 1.0,
            active_scale: 0.5,
            active_offset_y: -45.0,
            transition_ms: 350.0,
        }
    }
}

/// Line heights used for intrinsic measurement
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub body_line_height: f32,
    pub caption_line_height: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            body_line_height: 22.0,
            caption_line_height: 16.0,
        }
    }
}

/// `#RRGGBB` / `#RRGGBBAA` strings as [`Color`]
mod hex_color {
    use floatfield_core::Color;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}
