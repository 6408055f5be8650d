//! Keyboard driven state of the demos, kept apart from the GL code so it can
//! be stepped with a plain `Input`.

use glsteps::prelude::*;

/// The angle of the `transformations` container, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub angle: f32,
    pub autonomous: bool,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation {
            angle: 0.0,
            autonomous: true,
        }
    }
}

impl Rotation {
    /// Radians the container rotates per frame.
    pub const STEP: f32 = 0.01;

    /// `Space` toggles the autonomous rotation. While it is off, `D`/`Right`
    /// rotates clockwise and `A`/`Left` counter-clockwise.
    pub fn update(&mut self, input: &Input) {
        if input.is_key_press(Key::Space) {
            self.autonomous = !self.autonomous;
            info!(
                "Autonomous rotation is {}.",
                if self.autonomous { "on" } else { "off" }
            );
        }

        if self.autonomous {
            self.angle += Self::STEP;
            return;
        }

        if input.is_key_down(Key::D) || input.is_key_down(Key::Right) {
            self.angle -= Self::STEP;
        }

        if input.is_key_down(Key::A) || input.is_key_down(Key::Left) {
            self.angle += Self::STEP;
        }
    }
}

/// The clear color of the SSAO targets. White is no occlusion at all.
pub const NO_OCCLUSION: Color<f32> = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcclusionPass {
    /// Draws the screen quad with the occlusion program.
    Estimate,
    /// Leaves the target cleared to `NO_OCCLUSION`.
    ClearOnly,
}

/// `E` switches the ambient occlusion of the `ssao` demo on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OcclusionToggle {
    pub enabled: bool,
}

impl Default for OcclusionToggle {
    fn default() -> Self {
        OcclusionToggle { enabled: true }
    }
}

impl OcclusionToggle {
    pub fn update(&mut self, input: &Input) {
        if input.is_key_press(Key::E) {
            self.enabled = !self.enabled;
            info!(
                "SSAO is {}.",
                if self.enabled { "enabled" } else { "disabled" }
            );
        }
    }

    pub fn pass(&self) -> OcclusionPass {
        if self.enabled {
            OcclusionPass::Estimate
        } else {
            OcclusionPass::ClearOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut Input, key: Key) {
        input.update(InputEvent::KeyboardPressed { key });
    }

    fn release(input: &mut Input, key: Key) {
        input.update(InputEvent::KeyboardReleased { key });
    }

    fn steps(n: f32) -> f32 {
        n * Rotation::STEP
    }

    #[test]
    fn rotates_on_its_own() {
        let input = Input::new();
        let mut rotation = Rotation::default();

        rotation.update(&input);
        rotation.update(&input);
        assert!((rotation.angle - steps(2.0)).abs() < 1e-6);

        // Keys only steer in manual mode.
        let mut input = Input::new();
        press(&mut input, Key::D);
        let mut rotation = Rotation::default();
        rotation.update(&input);
        assert!((rotation.angle - steps(1.0)).abs() < 1e-6);
    }

    #[test]
    fn space_toggles_once_per_press() {
        let mut input = Input::new();
        let mut rotation = Rotation::default();

        press(&mut input, Key::Space);
        rotation.update(&input);
        assert!(!rotation.autonomous);
        assert_eq!(rotation.angle, 0.0);

        // Held down, not pressed again.
        input.advance();
        rotation.update(&input);
        assert!(!rotation.autonomous);
        assert_eq!(rotation.angle, 0.0);

        input.advance();
        release(&mut input, Key::Space);
        input.advance();
        press(&mut input, Key::Space);
        rotation.update(&input);
        assert!(rotation.autonomous);
        assert!((rotation.angle - steps(1.0)).abs() < 1e-6);
    }

    #[test]
    fn manual_steering() {
        let mut rotation = Rotation {
            angle: 0.0,
            autonomous: false,
        };

        let mut input = Input::new();
        rotation.update(&input);
        assert_eq!(rotation.angle, 0.0);

        press(&mut input, Key::D);
        rotation.update(&input);
        input.advance();
        rotation.update(&input);
        assert!((rotation.angle + steps(2.0)).abs() < 1e-6);

        release(&mut input, Key::D);
        press(&mut input, Key::Left);
        rotation.update(&input);
        assert!((rotation.angle + steps(1.0)).abs() < 1e-6);

        press(&mut input, Key::Right);
        rotation.update(&input);
        assert!((rotation.angle + steps(1.0)).abs() < 1e-6);

        release(&mut input, Key::Right);
        release(&mut input, Key::Left);
        press(&mut input, Key::A);
        rotation.update(&input);
        assert!(rotation.angle.abs() < 1e-6);
    }

    #[test]
    fn occlusion_toggle() {
        let mut input = Input::new();
        let mut toggle = OcclusionToggle::default();
        assert_eq!(toggle.pass(), OcclusionPass::Estimate);

        press(&mut input, Key::E);
        toggle.update(&input);
        assert_eq!(toggle.pass(), OcclusionPass::ClearOnly);

        input.advance();
        toggle.update(&input);
        assert_eq!(toggle.pass(), OcclusionPass::ClearOnly);

        release(&mut input, Key::E);
        input.advance();
        press(&mut input, Key::E);
        toggle.update(&input);
        assert_eq!(toggle.pass(), OcclusionPass::Estimate);
    }

    #[test]
    fn skipped_occlusion_is_white() {
        assert_eq!(NO_OCCLUSION, Color::white());
    }
}
