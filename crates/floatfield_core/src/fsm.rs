//! Minimal finite state machines for widget interaction states
//!
//! ```rust
//! use floatfield_core::fsm::StateMachine;
//!
//! const OFF: u32 = 0;
//! const ON: u32 = 1;
//! const TOGGLE: u32 = 7;
//!
//! let mut fsm = StateMachine::builder(OFF)
//!     .on(OFF, TOGGLE, ON)
//!     .on(ON, TOGGLE, OFF)
//!     .build();
//!
//! assert!(fsm.send(TOGGLE));
//! assert_eq!(fsm.current(), ON);
//! ```

use smallvec::SmallVec;

/// State identifier
pub type StateId = u32;

/// A single `(from, event) -> to` edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: u32,
    pub to: StateId,
}

/// Table-driven state machine
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial: StateId,
    current: StateId,
    transitions: SmallVec<[Transition; 8]>,
}

impl StateMachine {
    /// Start building a machine whose initial state is `initial`
    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder {
            initial,
            transitions: SmallVec::new(),
        }
    }

    /// Current state
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Feed an event; returns whether a transition fired
    pub fn send(&mut self, event: u32) -> bool {
        let next = self
            .transitions
            .iter()
            .find(|t| t.from == self.current && t.event == event)
            .map(|t| t.to);

        match next {
            Some(to) => {
                self.current = to;
                true
            }
            None => false,
        }
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

/// Builder for [`StateMachine`]
pub struct StateMachineBuilder {
    initial: StateId,
    transitions: SmallVec<[Transition; 8]>,
}

impl StateMachineBuilder {
    /// Add a transition from `from` to `to` on `event`
    pub fn on(mut self, from: StateId, event: u32, to: StateId) -> Self {
        self.transitions.push(Transition { from, event, to });
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            initial: self.initial,
            current: self.initial,
            transitions: self.transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut fsm = StateMachine::builder(0).on(0, 1, 2).build();
        assert!(!fsm.send(99));
        assert_eq!(fsm.current(), 0);
    }

    #[test]
    fn test_reset_returns_to_initial() {
        let mut fsm = StateMachine::builder(0).on(0, 1, 2).build();
        fsm.send(1);
        assert_eq!(fsm.current(), 2);
        fsm.reset();
        assert_eq!(fsm.current(), 0);
    }
}
