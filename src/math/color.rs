use cgmath::BaseFloat;
use serde::{Deserialize, Serialize};

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> From<[u8; 4]> for Color<S> {
    fn from(v: [u8; 4]) -> Self {
        let max = S::from(255.0).unwrap();
        Color::new(
            S::from(v[0]).unwrap() / max,
            S::from(v[1]).unwrap() / max,
            S::from(v[2]).unwrap() / max,
            S::from(v[3]).unwrap() / max,
        )
    }
}

impl Into<[u8; 4]> for Color<f32> {
    fn into(self) -> [u8; 4] {
        let v = self.clip();
        let max = 255.0;
        [
            (v.r * max) as u8,
            (v.g * max) as u8,
            (v.b * max) as u8,
            (v.a * max) as u8,
        ]
    }
}

impl<S: BaseFloat> From<[S; 3]> for Color<S> {
    fn from(v: [S; 3]) -> Self {
        Color::new(v[0], v[1], v[2], S::one())
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    /// Clip to [0.0, 1.0] range.
    pub fn clip(&self) -> Self {
        let mut color = *self;
        color.r = self.r.max(S::zero()).min(S::one());
        color.g = self.g.max(S::zero()).min(S::one());
        color.b = self.b.max(S::zero()).min(S::one());
        color.a = self.a.max(S::zero()).min(S::one());
        color
    }

    /// Truncate alpha channel.
    pub fn rgb(&self) -> [S; 3] {
        [self.r, self.g, self.b]
    }

    pub fn rgba(&self) -> [S; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn white() -> Self {
        Color::new(S::one(), S::one(), S::one(), S::one())
    }

    pub fn black() -> Self {
        Color::new(S::zero(), S::zero(), S::zero(), S::one())
    }
}

impl Color<f32> {
    /// The teal-ish background most of the getting-started demos clear to.
    pub fn slate() -> Self {
        Color::new(0.2, 0.3, 0.3, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes() {
        let c: Color<f32> = [255, 0, 255, 255].into();
        assert_eq!(c, Color::new(1.0, 0.0, 1.0, 1.0));

        let v: [u8; 4] = Color::new(2.0f32, -1.0, 1.0, 0.0).into();
        assert_eq!(v, [255, 0, 255, 0]);
    }

    #[test]
    fn rgb_from_array_is_opaque() {
        let c: Color<f32> = [0.8, 0.8, 0.8].into();
        assert_eq!(c.a, 1.0);
        assert_eq!(c.rgb(), [0.8, 0.8, 0.8]);
    }
}
