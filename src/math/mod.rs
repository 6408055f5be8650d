//! This module contains the math utils that mainly comes from `cgmath`.

pub use cgmath::*;

pub mod color;
pub use self::color::Color;

/// Linear interpolation between `a` and `b` by factor `f`.
#[inline]
pub fn lerp<S: BaseFloat>(a: S, b: S, f: S) -> S {
    a + f * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn lerp_endpoints() {
        assert_ulps_eq!(lerp(0.1f32, 1.0, 0.0), 0.1);
        assert_ulps_eq!(lerp(0.1f32, 1.0, 1.0), 1.0);
        assert_ulps_eq!(lerp(0.0f32, 4.0, 0.25), 1.0);
    }
}
