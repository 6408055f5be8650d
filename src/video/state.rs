//! Global pipeline state of the current context.

use gl;

use crate::errors::*;
use crate::math::{Color, Vector2};

use super::check;

/// Clears the bound framebuffer. Passing `None` leaves the corresponding
/// buffer untouched.
pub fn clear<C, D>(color: C, depth: D) -> Result<()>
where
    C: Into<Option<Color<f32>>>,
    D: Into<Option<f32>>,
{
    let color = color.into();
    let depth = depth.into();

    unsafe {
        let mut bits = 0;
        if let Some(v) = color {
            bits |= gl::COLOR_BUFFER_BIT;
            gl::ClearColor(v.r, v.g, v.b, v.a);
        }

        if let Some(v) = depth {
            bits |= gl::DEPTH_BUFFER_BIT;
            gl::ClearDepth(f64::from(v));
        }

        if bits != 0 {
            gl::Clear(bits);
            check()
        } else {
            Ok(())
        }
    }
}

/// Sets the viewport to the rectangle from `(0, 0)` with `dimensions` pixels.
pub fn set_viewport(dimensions: Vector2<u32>) -> Result<()> {
    unsafe {
        gl::Viewport(0, 0, dimensions.x as i32, dimensions.y as i32);
        check()
    }
}

/// Enables or disables depth testing with the `GL_LESS` comparison.
pub fn enable_depth_test(enable: bool) -> Result<()> {
    unsafe {
        if enable {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LESS);
        } else {
            gl::Disable(gl::DEPTH_TEST);
        }

        check()
    }
}
