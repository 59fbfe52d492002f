//! Tick-driven tweens
//!
//! A [`Tween`] moves a value from `from` to `to` over a fixed duration. It does
//! not own a clock: the host advances it with [`Tween::tick`] once per frame.
//!
//! ```rust
//! use floatfield_animation::{Easing, Tween};
//!
//! let mut scale = Tween::new(1.0f32, 0.5, 200.0, Easing::EaseOut);
//! scale.tick(100.0);
//! assert!(scale.value() < 1.0 && scale.value() > 0.5);
//!
//! scale.tick(100.0);
//! assert!(scale.is_finished());
//! assert_eq!(scale.value(), 0.5);
//! ```

use crate::easing::Easing;
use crate::values::Interpolate;

/// A value animating toward a target
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// A running tween from `from` to `to`
    pub fn new(from: T, to: T, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// A finished tween resting at `value`
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            duration_ms: 0.0,
            elapsed_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        let progress = self.progress();
        if progress >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    /// The value this tween is heading toward
    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt_ms`; returns whether the tween is still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        !self.is_finished()
    }

    /// Restart toward `to` from wherever the value currently is
    pub fn retarget(&mut self, to: T, duration_ms: f32, easing: Easing) {
        self.from = self.value();
        self.to = to;
        self.duration_ms = duration_ms.max(0.0);
        self.elapsed_ms = 0.0;
        self.easing = easing;
    }

    /// Jump straight to `value` with no animation
    pub fn snap(&mut self, value: T) {
        *self = Self::settled(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_is_finished() {
        let tween = Tween::settled(3.0f32);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 3.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(0.0f32, 1.0, 0.0, Easing::EaseOut);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_tick_reports_running_until_done() {
        let mut tween = Tween::new(0.0f32, -45.0, 300.0, Easing::Linear);
        assert!(tween.tick(100.0));
        assert!((tween.value() + 15.0).abs() < 1e-4);
        assert!(!tween.tick(500.0));
        assert_eq!(tween.value(), -45.0);
        assert!(!tween.tick(16.0));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0f32, 10.0, 100.0, Easing::Linear);
        tween.tick(50.0);
        tween.retarget(0.0, 100.0, Easing::Linear);

        assert!((tween.value() - 5.0).abs() < 1e-4);
        assert_eq!(*tween.target(), 0.0);
        tween.tick(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_snap() {
        let mut tween = Tween::new(0.0f32, 10.0, 100.0, Easing::EaseOut);
        tween.snap(4.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 4.0);
    }
}
