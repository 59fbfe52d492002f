//! Declarative view nodes
//!
//! Components render to a [`ViewNode`] tree: stacks, text, input boxes and
//! buttons, each carrying the modifiers a renderer needs (padding, border,
//! label transform, color, font, overlay). Nodes may be tagged with a
//! [`ViewRole`] so hosts and tests can locate the parts of a field.
//!
//! ```rust
//! use floatfield_widgets::view::*;
//!
//! let node = vstack()
//!     .spacing(4.0)
//!     .child(text("Email").role(ViewRole::Placeholder))
//!     .child(text_field("a@b.c", false).role(ViewRole::InputBox));
//!
//! assert_eq!(node.find(ViewRole::Placeholder).and_then(|n| n.text_content()), Some("Email"));
//! assert!(!node.contains(ViewRole::ErrorCaption));
//! ```

use floatfield_core::Color;
use floatfield_theme::TypographyTokens;

/// Stacking direction of a container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Children drawn on top of each other
    Depth,
}

/// Cross-axis alignment of a container's children, or a transform anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Center,
    Leading,
    Trailing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    #[default]
    Body,
    Caption,
}

impl Font {
    pub fn line_height(&self, typography: &TypographyTokens) -> f32 {
        match self {
            Font::Body => typography.body_line_height,
            Font::Caption => typography.caption_line_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Filled circle with a cross
    ClearCircleFill,
}

/// Semantic tag for the parts of a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewRole {
    Placeholder,
    InputBox,
    ClearButton,
    ErrorCaption,
}

/// Padding on each edge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    pub fn horizontal(value: f32) -> Self {
        Self {
            leading: value,
            trailing: value,
            ..Self::ZERO
        }
    }

    pub fn vertical(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            ..Self::ZERO
        }
    }

    pub fn with_leading(mut self, value: f32) -> Self {
        self.leading = value;
        self
    }

    pub fn with_bottom(mut self, value: f32) -> Self {
        self.bottom = value;
        self
    }

    pub fn with_trailing(mut self, value: f32) -> Self {
        self.trailing = value;
        self
    }
}

/// Outline drawn around a node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub color: Color,
    pub width: f32,
    pub corner_radius: f32,
}

/// Scale and vertical offset applied to a floating label
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelTransform {
    pub scale: f32,
    /// Point the scale is anchored to
    pub anchor: Alignment,
    pub offset_y: f32,
}

/// What a node draws
#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Stack(Axis),
    Text(String),
    /// Editable text box
    Input { value: String, focused: bool },
    Button(Icon),
    /// Flexible space inside a stack
    Spacer,
    /// Draws nothing and takes no space
    Empty,
}

/// A node in the rendered view tree
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
    kind: ViewKind,
    role: Option<ViewRole>,
    alignment: Alignment,
    spacing: f32,
    padding: EdgeInsets,
    border: Option<BorderStyle>,
    transform: Option<LabelTransform>,
    color: Option<Color>,
    font: Font,
    children: Vec<ViewNode>,
    overlay: Option<Box<ViewNode>>,
}

impl ViewNode {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            role: None,
            alignment: Alignment::default(),
            spacing: 0.0,
            padding: EdgeInsets::ZERO,
            border: None,
            transform: None,
            color: None,
            font: Font::default(),
            children: Vec::new(),
            overlay: None,
        }
    }

    // ========== Builders ==========

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn role(mut self, role: ViewRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    pub fn transform(mut self, transform: LabelTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Draw `overlay` above this node, sized to it
    pub fn overlay(mut self, overlay: ViewNode) -> Self {
        self.overlay = Some(Box::new(overlay));
        self
    }

    // ========== Accessors ==========

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    pub fn view_role(&self) -> Option<ViewRole> {
        self.role
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn stack_spacing(&self) -> f32 {
        self.spacing
    }

    pub fn insets(&self) -> EdgeInsets {
        self.padding
    }

    pub fn border_style(&self) -> Option<&BorderStyle> {
        self.border.as_ref()
    }

    pub fn label_transform(&self) -> Option<&LabelTransform> {
        self.transform.as_ref()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.color
    }

    pub fn text_font(&self) -> Font {
        self.font
    }

    pub fn child_nodes(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn overlay_node(&self) -> Option<&ViewNode> {
        self.overlay.as_deref()
    }

    /// Text of a `Text` node or value of an `Input` node
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text(content) => Some(content),
            ViewKind::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_empty_view(&self) -> bool {
        matches!(self.kind, ViewKind::Empty)
    }

    // ========== Queries ==========

    /// First node tagged `role`, depth-first, overlays after children
    pub fn find(&self, role: ViewRole) -> Option<&ViewNode> {
        if self.role == Some(role) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find(role))
            .or_else(|| self.overlay.as_deref().and_then(|o| o.find(role)))
    }

    pub fn contains(&self, role: ViewRole) -> bool {
        self.find(role).is_some()
    }

    /// Height this node asks for: line heights plus padding
    ///
    /// Overlays, borders and label transforms do not affect layout.
    pub fn intrinsic_height(&self, typography: &TypographyTokens) -> f32 {
        let content = match &self.kind {
            ViewKind::Text(_) => self.font.line_height(typography),
            ViewKind::Input { .. } | ViewKind::Button(_) => Font::Body.line_height(typography),
            ViewKind::Spacer | ViewKind::Empty => 0.0,
            ViewKind::Stack(axis) => {
                let heights: Vec<f32> = self
                    .children
                    .iter()
                    .filter(|c| !c.is_empty_view())
                    .map(|c| c.intrinsic_height(typography))
                    .collect();
                match axis {
                    Axis::Vertical => {
                        let gaps = heights.len().saturating_sub(1) as f32;
                        heights.iter().sum::<f32>() + self.spacing * gaps
                    }
                    Axis::Horizontal | Axis::Depth => heights.into_iter().fold(0.0, f32::max),
                }
            }
        };
        if self.is_empty_view() {
            return 0.0;
        }
        content + self.padding.top + self.padding.bottom
    }
}

pub fn vstack() -> ViewNode {
    ViewNode::new(ViewKind::Stack(Axis::Vertical))
}

pub fn hstack() -> ViewNode {
    ViewNode::new(ViewKind::Stack(Axis::Horizontal))
}

pub fn zstack() -> ViewNode {
    ViewNode::new(ViewKind::Stack(Axis::Depth))
}

pub fn text(content: impl Into<String>) -> ViewNode {
    ViewNode::new(ViewKind::Text(content.into()))
}

pub fn text_field(value: impl Into<String>, focused: bool) -> ViewNode {
    ViewNode::new(ViewKind::Input {
        value: value.into(),
        focused,
    })
}

pub fn button(icon: Icon) -> ViewNode {
    ViewNode::new(ViewKind::Button(icon))
}

pub fn spacer() -> ViewNode {
    ViewNode::new(ViewKind::Spacer)
}

pub fn empty() -> ViewNode {
    ViewNode::new(ViewKind::Empty)
}
