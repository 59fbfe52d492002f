//! floatfield Animation System
//!
//! Tick-driven tweens with cubic-bezier easing.
//!
//! # Features
//!
//! - **Easing**: CSS-style cubic-bezier curves (`ease-in`, `ease-out`, ...)
//! - **Interpolate**: linear interpolation for animated scalars
//! - **Tween**: a retargetable transition advanced by explicit frame ticks

pub mod easing;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use tween::Tween;
pub use values::Interpolate;
