//! Environment-styled floating-label field
//!
//! [`TextInputField`] binds to caller-owned text and takes its styling from
//! the [`Environment`]:
//!
//! - [`ClearButtonOnTextField`] toggles the inline clear button
//! - [`TextFieldBorderColor`] colors the outline while focused
//! - [`LabelAnimation`] picks which label changes animate
//!
//! ```rust
//! use floatfield_core::{Binding, Color};
//! use floatfield_widgets::prelude::*;
//!
//! let email = Binding::new(String::new());
//! let field = TextInputField::new("Email", &email);
//!
//! field.focus();
//! field.input("me@example.com");
//! assert_eq!(email.get(), "me@example.com");
//!
//! let tree = render_root(&field.clone().text_field_border_color(Color::GREEN));
//! assert!(tree.contains(ViewRole::ClearButton));
//! ```

use std::sync::{Arc, Mutex, Weak};

use floatfield_core::sync::lock;
use floatfield_core::{Binding, Environment, FieldEvent, SubscriptionId};
use floatfield_theme::ThemeState;

use crate::clear_button::{self, clear_button};
use crate::component::Component;
use crate::field_state::FieldCore;
use crate::floating_label::{
    LabelAnimationPolicy, LabelPlacement, LabelTransition, ListenerId, TransitionListeners,
};
use crate::keys::{ClearButtonOnTextField, LabelAnimation, TextFieldBorderColor};
use crate::view::{
    text, text_field, zstack, Alignment, BorderStyle, EdgeInsets, LabelTransform, ViewNode,
    ViewRole,
};

struct Shared {
    text: Binding<String>,
    subscription: SubscriptionId,
    core: Mutex<FieldCore>,
    listeners: TransitionListeners,
}

impl Shared {
    fn text_changed(&self, value: &str) {
        let theme = ThemeState::get();
        let transition = lock(&self.core).content_changed(value, &theme.label);
        self.emit(transition);
    }

    fn emit(&self, transition: Option<LabelTransition>) {
        if let Some(transition) = transition {
            tracing::debug!(
                from = ?transition.from,
                to = ?transition.to,
                cause = ?transition.cause,
                animated = transition.animated,
                "text field label moved"
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

/// Floating-label field styled by its environment
///
/// Clones share focus, label and listener state.
#[derive(Clone)]
pub struct TextInputField {
    placeholder: String,
    text: Binding<String>,
    shared: Arc<Shared>,
}

impl TextInputField {
    /// Create a field over `text`; the label starts settled for its content
    pub fn new(placeholder: impl Into<String>, text: &Binding<String>) -> Self {
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
                core: Mutex::new(FieldCore::new(
                    &initial,
                    LabelAnimationPolicy::default(),
                    &theme.label,
                )),
                listeners: TransitionListeners::new(),
            }
        });

        Self {
            placeholder: placeholder.into(),
            text: text.clone(),
            shared,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The bound text
    pub fn text(&self) -> &Binding<String> {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.shared.core).is_focused()
    }

    pub fn label_placement(&self) -> LabelPlacement {
        lock(&self.shared.core).placement()
    }

    /// Current label transform, including any in-flight animation
    pub fn label_transform(&self) -> LabelTransform {
        lock(&self.shared.core).transform()
    }

    pub fn is_animating(&self) -> bool {
        lock(&self.shared.core).is_animating()
    }

    /// Observe label placement changes
    pub fn on_label_transition<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LabelTransition) + Send + Sync + 'static,
    {
        self.shared.listeners.add(listener)
    }

    pub fn remove_label_listener(&self, id: ListenerId) -> bool {
        self.shared.listeners.remove(id)
    }

    /// Whether the clear button shows under `env`
    pub fn clear_button_visible(&self, env: &Environment) -> bool {
        self.text
            .with(|value| clear_button::is_visible(value, env.get::<ClearButtonOnTextField>()))
    }

    pub fn appear(&self) {
        tracing::debug!(placeholder = %self.placeholder, "text field appeared");
        let value = self.text.get();
        self.shared.text_changed(&value);
    }

    /// Drop focus; the label settles without animating
    pub fn disappear(&self) {
        tracing::debug!(placeholder = %self.placeholder, "text field disappeared");
        let theme = ThemeState::get();
        let transition = lock(&self.shared.core).teardown(&theme.label);
        self.shared.emit(transition);
    }

    pub fn focus(&self) {
        let theme = ThemeState::get();
        let transition = lock(&self.shared.core).focus(&theme.label);
        self.shared.emit(transition);
    }

    pub fn blur(&self) {
        let theme = ThemeState::get();
        let transition = lock(&self.shared.core).blur(&theme.label);
        self.shared.emit(transition);
    }

    /// Replace the text, as typing would
    pub fn input(&self, value: impl Into<String>) {
        self.text.set(value.into());
    }

    /// Empty the text; a no-op when already empty
    pub fn clear(&self) {
        if self.text.set(String::new()) {
            tracing::debug!(placeholder = %self.placeholder, "text field cleared");
        }
    }

    /// Advance the label animation; returns whether it is still running
    pub fn tick(&self, dt_ms: f32) -> bool {
        lock(&self.shared.core).tick(dt_ms)
    }

    pub fn handle_event(&self, event: &FieldEvent) {
        tracing::trace!(event_type = event.event_type(), "text field event");
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

impl Component for TextInputField {
    fn render(&self, env: &Environment) -> ViewNode {
        let theme = ThemeState::get();
        let metrics = &theme.metrics;
        let value = self.text.get();

        let (focused, transform) = {
            let mut core = lock(&self.shared.core);
            core.set_policy(env.get::<LabelAnimation>());
            (core.is_focused(), core.transform())
        };

        let outline = if focused {
            env.get::<TextFieldBorderColor>()
        } else {
            theme.colors.border_neutral
        };
        let trailing = if focused {
            metrics.focused_trailing_inset
        } else {
            0.0
        };
        let show_clear = clear_button::is_visible(&value, env.get::<ClearButtonOnTextField>());

        let label = text(self.placeholder.clone())
            .role(ViewRole::Placeholder)
            .color(theme.colors.placeholder)
            .padding(EdgeInsets::ZERO.with_leading(metrics.label_leading_inset))
            .transform(transform);

        let input = text_field(value, focused)
            .role(ViewRole::InputBox)
            .padding(EdgeInsets {
                top: metrics.input_vertical_inset,
                leading: metrics.input_leading_inset,
                bottom: metrics.input_vertical_inset,
                trailing,
            })
            .border(BorderStyle {
                color: outline,
                width: metrics.border_width,
                corner_radius: metrics.outlined_corner_radius,
            });

        // Clear inset is measured from the padded box, not the outline
        let field_box = zstack()
            .padding(EdgeInsets::all(metrics.box_padding))
            .child(input)
            .overlay(clear_button(
                show_clear,
                theme.colors.border_neutral,
                metrics.clear_trailing_inset,
            ));

        zstack()
            .align(Alignment::Leading)
            .child(label)
            .child(field_box)
    }
}
