//! Keyboard focus tracking for a single field

use crate::events::event_types;
use crate::fsm::StateMachine;

/// Focus FSM states
pub mod states {
    /// Not accepting keyboard input
    pub const IDLE: u32 = 0;
    /// Accepting keyboard input
    pub const FOCUSED: u32 = 1;
}

/// Focus flag owned by one widget instance
#[derive(Clone, Debug)]
pub struct FocusState {
    fsm: StateMachine,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusState {
    pub fn new() -> Self {
        use states::*;

        let fsm = StateMachine::builder(IDLE)
            .on(IDLE, event_types::FOCUS, FOCUSED)
            .on(FOCUSED, event_types::BLUR, IDLE)
            .build();
        Self { fsm }
    }

    pub fn is_focused(&self) -> bool {
        self.fsm.current() == states::FOCUSED
    }

    /// Returns whether focus actually changed
    pub fn focus(&mut self) -> bool {
        self.fsm.send(event_types::FOCUS)
    }

    /// Returns whether focus actually changed
    pub fn blur(&mut self) -> bool {
        self.fsm.send(event_types::BLUR)
    }

    /// Drop focus unconditionally (widget teardown)
    pub fn reset(&mut self) {
        self.fsm.reset();
    }
}
