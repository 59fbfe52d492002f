//! Field input events
//!
//! Platform input is translated into [`FieldEvent`]s before reaching a widget.
//! Each event also has a numeric [`event_types`] code used by state machines.

/// Numeric event codes consumed by [`crate::fsm::StateMachine`]
pub mod event_types {
    pub const APPEAR: u32 = 1;
    pub const DISAPPEAR: u32 = 2;
    pub const FOCUS: u32 = 10;
    pub const BLUR: u32 = 11;
    pub const TEXT_INPUT: u32 = 20;
    pub const CLEAR: u32 = 21;
    pub const TICK: u32 = 30;
}

/// An input event delivered to a field widget
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    /// The widget was inserted into the visible tree
    Appear,
    /// The widget was torn down
    Disappear,
    /// The field gained keyboard focus
    Focus,
    /// The field lost keyboard focus
    Blur,
    /// The user edited the text; carries the full new text
    Input(String),
    /// The clear affordance was activated
    ClearPressed,
    /// Animation frame, elapsed milliseconds since the previous tick
    Tick(f32),
}

impl FieldEvent {
    /// Numeric code for this event
    pub fn event_type(&self) -> u32 {
        use event_types::*;
        match self {
            FieldEvent::Appear => APPEAR,
            FieldEvent::Disappear => DISAPPEAR,
            FieldEvent::Focus => FOCUS,
            FieldEvent::Blur => BLUR,
            FieldEvent::Input(_) => TEXT_INPUT,
            FieldEvent::ClearPressed => CLEAR,
            FieldEvent::Tick(_) => TICK,
        }
    }
}
