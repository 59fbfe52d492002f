//! floatfield core primitives
//!
//! The building blocks shared by every floatfield widget:
//!
//! - **Color**: RGBA colors with hex parsing for configuration files
//! - **Binding**: two-way handles to caller-owned values with change notification
//! - **Environment**: scoped ambient values where the nearest override wins
//! - **State machines**: table-driven FSMs, used for keyboard focus
//! - **Events**: the input events a field widget reacts to
//!
//! # Example
//!
//! ```rust
//! use floatfield_core::{Binding, FocusState};
//!
//! let text = Binding::new(String::new());
//! let mut focus = FocusState::new();
//!
//! focus.focus();
//! text.set("hello".to_string());
//!
//! assert!(focus.is_focused());
//! assert_eq!(text.get(), "hello");
//! ```

pub mod binding;
pub mod color;
pub mod environment;
pub mod error;
pub mod events;
pub mod focus;
pub mod fsm;
pub mod sync;

pub use binding::{Binding, SubscriptionId};
pub use color::Color;
pub use environment::{Environment, EnvironmentKey};
pub use error::{CoreError, Result};
pub use events::{event_types, FieldEvent};
pub use focus::FocusState;
pub use fsm::{StateId, StateMachine, StateMachineBuilder, Transition};
