//! # floatfield widgets
//!
//! Floating-placeholder text fields rendered to a headless view tree.
//!
//! The placeholder sits inside the box while the field is unfocused and
//! empty, and floats above it (half size, leading edge) once the field is
//! focused or holds text.
//!
//! - [`TextInputField`]: styled by its environment (clear button toggle,
//!   focused outline color)
//! - [`CustomTextInputField`]: styled through builder methods, with
//!   required-field and custom validation
//!
//! ## Example
//!
//! ```rust
//! use floatfield_core::{Binding, Color};
//! use floatfield_widgets::prelude::*;
//!
//! let email = Binding::new(String::new());
//! let name = Binding::new(String::new());
//!
//! let form = group()
//!     .spacing(12.0)
//!     .child(ff::text_input_field("Email", &email).text_field_border_color(Color::GREEN))
//!     .child(ff::custom_text_input_field("Name", &name).required(true));
//!
//! let tree = render_root(&form);
//! assert_eq!(tree.child_nodes().len(), 2);
//! ```

pub mod clear_button;
pub mod component;
pub mod custom_text_input_field;
mod field_state;
pub mod floating_label;
pub mod keys;
pub mod text_input_field;
pub mod validation;
pub mod view;

pub use component::{group, render_root, Component, ComponentExt, Group, Scoped};
pub use custom_text_input_field::{CustomFieldConfig, CustomTextInputField};
pub use floating_label::{
    FloatingLabel, LabelAnimationPolicy, LabelPlacement, LabelTransition, ListenerId,
    TransitionCause, TransitionListeners,
};
pub use keys::{ClearButtonOnTextField, LabelAnimation, TextFieldBorderColor};
pub use text_input_field::TextInputField;
pub use validation::{validate, Validator, REQUIRED_MESSAGE};
pub use view::{
    Alignment, Axis, BorderStyle, EdgeInsets, Font, Icon, LabelTransform, ViewKind, ViewNode,
    ViewRole,
};

/// Field constructors under a short prefix
pub mod ff {
    use floatfield_core::Binding;

    use crate::{CustomTextInputField, TextInputField};

    pub fn text_input_field(
        placeholder: impl Into<String>,
        text: &Binding<String>,
    ) -> TextInputField {
        TextInputField::new(placeholder, text)
    }

    pub fn custom_text_input_field(
        placeholder: impl Into<String>,
        text: &Binding<String>,
    ) -> CustomTextInputField {
        CustomTextInputField::new(placeholder, text)
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::ff;
    pub use crate::{
        group, render_root, Component, ComponentExt, CustomTextInputField, LabelAnimationPolicy,
        LabelPlacement, TextInputField, ViewNode, ViewRole,
    };
    pub use floatfield_theme::{FieldTheme, ThemeState};
}
