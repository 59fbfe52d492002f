//! Builder-configured floating-label field with validation
//!
//! [`CustomTextInputField`] carries its own styling instead of reading the
//! environment, and validates its text on appear and on every change. A
//! failing value turns the outline to the theme's error color and shows the
//! message in a caption under the box.
//!
//! ```rust
//! use floatfield_core::{Binding, Color};
//! use floatfield_widgets::prelude::*;
//!
//! let name = Binding::new(String::new());
//! let field = CustomTextInputField::new("Name", &name)
//!     .border_color(Color::BLUE)
//!     .corner_radius(12.0)
//!     .required(true)
//!     .validation(|text| (text.len() > 20).then(|| "Too long".to_string()));
//!
//! field.appear();
//! assert_eq!(field.error_message().as_deref(), Some("This field is required"));
//!
//! field.input("Ada");
//! assert!(field.is_valid());
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use floatfield_core::sync::lock;
use floatfield_core::{Binding, Color, Environment, FieldEvent, SubscriptionId};
use floatfield_theme::ThemeState;

use crate::clear_button::{self, clear_button};
use crate::component::Component;
use crate::field_state::FieldCore;
use crate::floating_label::{
    LabelAnimationPolicy, LabelPlacement, LabelTransition, ListenerId, TransitionListeners,
};
use crate::validation::{validate, Validator};
use crate::view::{
    empty, text, text_field, vstack, zstack, Alignment, BorderStyle, EdgeInsets, Font,
    LabelTransform, ViewNode, ViewRole,
};

/// Styling and validation options of a [`CustomTextInputField`]
#[derive(Clone)]
pub struct CustomFieldConfig {
    pub border_color: Color,
    pub corner_radius: f32,
    pub show_clear_button: bool,
    pub required: bool,
    pub validator: Option<Validator>,
    pub label_animation: LabelAnimationPolicy,
}

impl Default for CustomFieldConfig {
    fn default() -> Self {
        let theme = ThemeState::get();
        Self {
            border_color: theme.colors.border_default,
            corner_radius: theme.metrics.custom_corner_radius,
            show_clear_button: false,
            required: false,
            validator: None,
            label_animation: LabelAnimationPolicy::default(),
        }
    }
}

impl fmt::Debug for CustomFieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFieldConfig")
            .field("border_color", &self.border_color)
            .field("corner_radius", &self.corner_radius)
            .field("show_clear_button", &self.show_clear_button)
            .field("required", &self.required)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("label_animation", &self.label_animation)
            .finish()
    }
}

impl PartialEq for CustomFieldConfig {
    fn eq(&self, other: &Self) -> bool {
        let same_validator = match (&self.validator, &other.validator) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.border_color == other.border_color
            && self.corner_radius == other.corner_radius
            && self.show_clear_button == other.show_clear_button
            && self.required == other.required
            && self.label_animation == other.label_animation
            && same_validator
    }
}

struct FieldState {
    core: FieldCore,
    error: Option<String>,
}

struct Shared {
    text: Binding<String>,
    subscription: SubscriptionId,
    config: CustomFieldConfig,
    state: Mutex<FieldState>,
    listeners: TransitionListeners,
}

impl Shared {
    /// Validate `value` and record the result; returns the new message
    fn revalidate(&self, value: &str) -> Option<String> {
        let error = validate(value, self.config.required, self.config.validator.as_ref());
        let mut state = lock(&self.state);
        if state.error != error {
            tracing::debug!(error = ?error, "custom text field validation changed");
            state.error = error.clone();
        }
        error
    }

    fn text_changed(&self, value: &str) {
        self.revalidate(value);
        let theme = ThemeState::get();
        let transition = lock(&self.state).core.content_changed(value, &theme.label);
        self.emit(transition);
    }

    fn emit(&self, transition: Option<LabelTransition>) {
        if let Some(transition) = transition {
            tracing::debug!(
                from = ?transition.from,
                to = ?transition.to,
                cause = ?transition.cause,
                animated = transition.animated,
                "custom text field label moved"
            );
            self.listeners.notify(&transition);
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.text.unsubscribe(self.subscription);
    }
}

/// Floating-label field with builder styling and validation
///
/// Builder methods consume the field and return a fresh one; runtime state
/// (focus, label, error) starts over. Clones share runtime state.
#[derive(Clone)]
pub struct CustomTextInputField {
    placeholder: String,
    text: Binding<String>,
    shared: Arc<Shared>,
}

impl CustomTextInputField {
    /// A field with the default configuration
    pub fn new(placeholder: impl Into<String>, text: &Binding<String>) -> Self {
        Self::with_config(placeholder, text, CustomFieldConfig::default())
    }

    pub fn with_config(
        placeholder: impl Into<String>,
        text: &Binding<String>,
        config: CustomFieldConfig,
    ) -> Self {
        let theme = ThemeState::get();
        let initial = text.get();
        let shared = Arc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let subscription = text.subscribe(move |value: &String| {
                if let Some(shared) = weak.upgrade() {
                    shared.text_changed(value);
                }
            });
            Shared {
                text: text.clone(),
                subscription,
                state: Mutex::new(FieldState {
                    core: FieldCore::new(&initial, config.label_animation, &theme.label),
                    error: None,
                }),
                config,
                listeners: TransitionListeners::new(),
            }
        });

        Self {
            placeholder: placeholder.into(),
            text: text.clone(),
            shared,
        }
    }

    fn reconfigure(self, f: impl FnOnce(&mut CustomFieldConfig)) -> Self {
        let mut config = self.shared.config.clone();
        f(&mut config);
        Self::with_config(self.placeholder, &self.text, config)
    }

    /// Outline color when the value is valid
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn border_color(self, color: Color) -> Self {
        self.reconfigure(|config| config.border_color = color)
    }

    /// Outline corner radius
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn corner_radius(self, radius: f32) -> Self {
        self.reconfigure(|config| config.corner_radius = radius)
    }

    /// Show the clear button while there is text
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn show_clear_button(self, show: bool) -> Self {
        self.reconfigure(|config| config.show_clear_button = show)
    }

    /// Reject blank (whitespace-only) text before running the validator
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn required(self, required: bool) -> Self {
        self.reconfigure(|config| config.required = required)
    }

    /// Run `validator` on every change; `Some(message)` marks the text invalid
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn validation<F>(self, validator: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.reconfigure(|config| config.validator = Some(Arc::new(validator)))
    }

    /// Which label placement changes animate
    ///
    /// Returns a new field with fresh focus, label and error state, so configure
    /// before [`appear`](Self::appear).
    pub fn label_animation(self, policy: LabelAnimationPolicy) -> Self {
        self.reconfigure(|config| config.label_animation = policy)
    }

    pub fn config(&self) -> &CustomFieldConfig {
        &self.shared.config
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self) -> &Binding<String> {
        &self.text
    }

    /// Message from the most recent validation, if it failed
    pub fn error_message(&self) -> Option<String> {
        lock(&self.shared.state).error.clone()
    }

    pub fn is_valid(&self) -> bool {
        lock(&self.shared.state).error.is_none()
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.shared.state).core.is_focused()
    }

    pub fn label_placement(&self) -> LabelPlacement {
        lock(&self.shared.state).core.placement()
    }

    pub fn label_transform(&self) -> LabelTransform {
        lock(&self.shared.state).core.transform()
    }

    pub fn is_animating(&self) -> bool {
        lock(&self.shared.state).core.is_animating()
    }

    pub fn clear_button_visible(&self) -> bool {
        self.text
            .with(|value| clear_button::is_visible(value, self.shared.config.show_clear_button))
    }

    pub fn on_label_transition<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LabelTransition) + Send + Sync + 'static,
    {
        self.shared.listeners.add(listener)
    }

    pub fn remove_label_listener(&self, id: ListenerId) -> bool {
        self.shared.listeners.remove(id)
    }

    /// Validate the current text
    pub fn appear(&self) {
        tracing::debug!(placeholder = %self.placeholder, "custom text field appeared");
        let value = self.text.get();
        self.shared.text_changed(&value);
    }

    pub fn disappear(&self) {
        tracing::debug!(placeholder = %self.placeholder, "custom text field disappeared");
        let theme = ThemeState::get();
        let transition = lock(&self.shared.state).core.teardown(&theme.label);
        self.shared.emit(transition);
    }

    pub fn focus(&self) {
        let theme = ThemeState::get();
        let transition = lock(&self.shared.state).core.focus(&theme.label);
        self.shared.emit(transition);
    }

    pub fn blur(&self) {
        let theme = ThemeState::get();
        let transition = lock(&self.shared.state).core.blur(&theme.label);
        self.shared.emit(transition);
    }

    pub fn input(&self, value: impl Into<String>) {
        self.text.set(value.into());
    }

    pub fn clear(&self) {
        if self.text.set(String::new()) {
            tracing::debug!(placeholder = %self.placeholder, "custom text field cleared");
        }
    }

    pub fn tick(&self, dt_ms: f32) -> bool {
        lock(&self.shared.state).core.tick(dt_ms)
    }

    pub fn handle_event(&self, event: &FieldEvent) {
        tracing::trace!(event_type = event.event_type(), "custom text field event");
        match event {
            FieldEvent::Appear => self.appear(),
            FieldEvent::Disappear => self.disappear(),
            FieldEvent::Focus => self.focus(),
            FieldEvent::Blur => self.blur(),
            FieldEvent::Input(value) => self.input(value.as_str()),
            FieldEvent::ClearPressed => self.clear(),
            FieldEvent::Tick(dt_ms) => {
                self.tick(*dt_ms);
            }
        }
    }
}

impl Component for CustomTextInputField {
    fn render(&self, _env: &Environment) -> ViewNode {
        let theme = ThemeState::get();
        let metrics = &theme.metrics;
        let config = &self.shared.config;
        let value = self.text.get();

        let (focused, transform, error) = {
            let state = lock(&self.shared.state);
            (state.core.is_focused(), state.core.transform(), state.error.clone())
        };

        let outline = if error.is_some() {
            theme.colors.error
        } else {
            config.border_color
        };
        let show_clear = clear_button::is_visible(&value, config.show_clear_button);

        let field_box = zstack()
            .align(Alignment::Leading)
            .role(ViewRole::InputBox)
            .padding(EdgeInsets::horizontal(metrics.custom_horizontal_inset))
            .border(BorderStyle {
                color: outline,
                width: metrics.border_width,
                corner_radius: config.corner_radius,
            })
            .child(
                text(self.placeholder.clone())
                    .role(ViewRole::Placeholder)
                    .color(theme.colors.placeholder)
                    .transform(transform),
            )
            .child(
                text_field(value, focused)
                    .padding(EdgeInsets::vertical(metrics.custom_vertical_inset)),
            )
            .child(clear_button(
                show_clear,
                theme.colors.clear_icon,
                metrics.custom_clear_trailing_inset,
            ));

        let caption = match error {
            Some(message) => text(message)
                .role(ViewRole::ErrorCaption)
                .font(Font::Caption)
                .color(theme.colors.error)
                .padding(EdgeInsets::horizontal(metrics.error_horizontal_inset)),
            None => empty(),
        };

        vstack()
            .align(Alignment::Leading)
            .spacing(metrics.custom_stack_spacing)
            .padding(EdgeInsets::ZERO.with_bottom(metrics.custom_bottom_padding))
            .child(field_box)
            .child(caption)
    }
}
