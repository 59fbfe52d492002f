//! Components and environment scoping
//!
//! A [`Component`] renders itself against an [`Environment`]. Wrapping a
//! component with [`ComponentExt::environment`] (or one of the named
//! modifiers) overrides a key for that component and everything inside it:
//!
//! ```rust
//! use floatfield_core::{Binding, Color};
//! use floatfield_widgets::prelude::*;
//!
//! let email = Binding::new(String::new());
//! let phone = Binding::new(String::new());
//!
//! let form = group()
//!     .child(TextInputField::new("Email", &email))
//!     .child(TextInputField::new("Phone", &phone))
//!     .clear_button_on_text_field(false)
//!     .text_field_border_color(Color::RED);
//!
//! let _tree = render_root(&form);
//! ```

use std::sync::Arc;

use floatfield_core::{Color, Environment, EnvironmentKey};

use crate::floating_label::LabelAnimationPolicy;
use crate::keys::{ClearButtonOnTextField, LabelAnimation, TextFieldBorderColor};
use crate::view::{vstack, Alignment, ViewNode};

/// Something that renders to a [`ViewNode`]
pub trait Component {
    fn render(&self, env: &Environment) -> ViewNode;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self, env: &Environment) -> ViewNode {
        (**self).render(env)
    }
}

impl<C: Component + ?Sized> Component for &C {
    fn render(&self, env: &Environment) -> ViewNode {
        (**self).render(env)
    }
}

type ScopeFn = Arc<dyn Fn(&Environment) -> Environment + Send + Sync>;

/// A component rendered inside an overriding environment scope
pub struct Scoped<C> {
    child: C,
    scope: ScopeFn,
}

impl<C: Component> Component for Scoped<C> {
    fn render(&self, env: &Environment) -> ViewNode {
        self.child.render(&(self.scope)(env))
    }
}

/// Environment modifiers available on every component
pub trait ComponentExt: Component + Sized {
    /// Override `K` for this component and its descendants
    fn environment<K: EnvironmentKey>(self, value: K::Value) -> Scoped<Self> {
        Scoped {
            child: self,
            scope: Arc::new(move |env: &Environment| env.with::<K>(value.clone())),
        }
    }

    /// Show or hide the clear button in descendant text fields
    fn clear_button_on_text_field(self, enabled: bool) -> Scoped<Self> {
        self.environment::<ClearButtonOnTextField>(enabled)
    }

    /// Focused outline color for descendant text fields
    fn text_field_border_color(self, color: Color) -> Scoped<Self> {
        self.environment::<TextFieldBorderColor>(color)
    }

    /// Label animation policy for descendant text fields
    fn floating_label_animation(self, policy: LabelAnimationPolicy) -> Scoped<Self> {
        self.environment::<LabelAnimation>(policy)
    }
}

impl<C: Component> ComponentExt for C {}

/// A vertical container of heterogeneous components
#[derive(Default)]
pub struct Group {
    children: Vec<Box<dyn Component + Send + Sync>>,
    spacing: f32,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Component + Send + Sync + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Component for Group {
    fn render(&self, env: &Environment) -> ViewNode {
        vstack()
            .align(Alignment::Leading)
            .spacing(self.spacing)
            .children(self.children.iter().map(|child| child.render(env)))
    }
}

/// Create an empty [`Group`]
pub fn group() -> Group {
    Group::new()
}

/// Render `component` against the default (root) environment
pub fn render_root(component: &impl Component) -> ViewNode {
    component.render(&Environment::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::text;

    /// Renders the resolved clear-button flag as text
    struct Probe;

    impl Component for Probe {
        fn render(&self, env: &Environment) -> ViewNode {
            text(env.get::<ClearButtonOnTextField>().to_string())
        }
    }

    fn probe_values(node: &ViewNode) -> Vec<String> {
        node.child_nodes()
            .iter()
            .filter_map(|n| n.text_content().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_default_environment() {
        assert_eq!(render_root(&Probe).text_content(), Some("true"));
    }

    #[test]
    fn test_override_reaches_all_descendants() {
        let form = group().child(Probe).child(Probe).clear_button_on_text_field(false);
        assert_eq!(probe_values(&render_root(&form)), vec!["false", "false"]);
    }

    #[test]
    fn test_nearest_override_wins() {
        let form = group()
            .child(Probe)
            .child(Probe.clear_button_on_text_field(true))
            .clear_button_on_text_field(false);
        assert_eq!(probe_values(&render_root(&form)), vec!["false", "true"]);
    }
}
