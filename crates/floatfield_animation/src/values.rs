//! Animatable value types

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(0.0f32.lerp(&10.0, 0.25), 2.5);
        assert_eq!(1.0f32.lerp(&0.5, 1.0), 0.5);
        assert_eq!((-45.0f32).lerp(&0.0, 0.0), -45.0);
    }
}
