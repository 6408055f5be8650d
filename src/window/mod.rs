//! Represents an OpenGL context and the window around it.
//!
//! A `Window` is created by the application loop and owned by it. Every other
//! module talks to the GL context through the functions loaded here, so all
//! GL calls are expected to happen on the thread that created the window.
pub mod events;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::{Window, WindowParams};
}

mod backends;

use serde::{Deserialize, Serialize};

use self::backends::Visitor;
use self::events::Event;

use crate::errors::*;
use crate::math::Vector2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// The `(major, minor)` version of the core-profile context to request.
    pub gl_version: (u8, u8),
    /// Grabs and hides the cursor once the window is open.
    pub cursor_grab: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "LearnOpenGL".to_owned(),
            size: Vector2::new(800, 600),
            multisample: 0,
            vsync: true,
            gl_version: (3, 3),
            cursor_grab: false,
        }
    }
}

pub struct Window {
    visitor: Box<dyn Visitor>,
}

impl Window {
    /// Creates a window with a current GL context and loads the GL functions.
    pub fn new(params: &WindowParams) -> Result<Self> {
        let visitor = backends::new(params)?;
        Ok(Window { visitor })
    }

    /// Creates a window without GL context. `frames` holds the events that
    /// `poll_events` hands out on consecutive calls; a `Closed` event follows
    /// the last frame.
    pub fn headless(dimensions: Vector2<u32>, frames: Vec<Vec<Event>>) -> Self {
        Window {
            visitor: backends::new_headless(dimensions, frames),
        }
    }

    /// Returns the size in *points* of the client area of the window.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Resizes the GL context and the viewport, in physical pixels.
    #[inline]
    pub fn resize(&mut self, dimensions: Vector2<u32>) {
        self.visitor.resize(dimensions);
    }

    #[inline]
    pub fn set_cursor_grab(&self, grab: bool) -> Result<()> {
        self.visitor.set_cursor_grab(grab)
    }

    /// Appends all the pending events into `events`.
    #[inline]
    pub fn poll_events(&mut self, events: &mut Vec<Event>) {
        self.visitor.poll_events(events);
    }

    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Swaps the buffers in case of double or triple buffering.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }
}

#[cfg(test)]
mod tests {
    use super::events::WindowEvent;
    use super::*;

    #[test]
    fn headless_closes_after_script() {
        let frames = vec![vec![Event::Window(WindowEvent::GainFocus)], vec![]];
        let mut window = Window::headless(Vector2::new(4, 4), frames);
        let mut events = Vec::new();

        window.poll_events(&mut events);
        assert_eq!(events, vec![Event::Window(WindowEvent::GainFocus)]);

        events.clear();
        window.poll_events(&mut events);
        assert!(events.is_empty());

        window.poll_events(&mut events);
        assert_eq!(events, vec![Event::Window(WindowEvent::Closed)]);
    }

    #[test]
    fn headless_resize() {
        let mut window = Window::headless(Vector2::new(4, 4), Vec::new());
        window.resize(Vector2::new(16, 9));
        assert_eq!(window.dimensions(), Vector2::new(16, 9));
        assert!(window.is_current());
    }
}
