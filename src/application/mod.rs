//! A minimal application model shared by every demo.
//!
//! ## Application
//!
//! Demos implement the `Application` trait, which defines a simple
//! application-state-model. While the window is open, the associated per-frame
//! methods are called in a pre-determined order.
//!
//! ## Render loop
//!
//! `run` is where we actually run the main loop. It creates the window, builds
//! the application once all the GL functions are loaded, and then repeats
//! `poll events -> on_update -> on_render -> swap buffers` until the window
//! gets closed. The application is dropped before the window, so GPU objects
//! owned by the application are released while the context is still alive.

pub mod settings;
pub mod time;

pub use self::settings::{EngineParams, Settings};
pub use self::time::TimeSystem;

use crate::errors::*;
use crate::input::keyboard::Key;
use crate::input::Input;
use crate::math::Vector2;
use crate::window::events::{Event, WindowEvent};
use crate::window::Window;

/// `Application` is a user-friendly facade to building demos, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_update` is called every frame, after all the pending
    /// events have been processed.
    fn on_update(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called every frame, right before the buffers
    /// get swapped.
    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }

    /// `Application::on_resize` is called after the framebuffer has been resized,
    /// with the new size in physical pixels.
    fn on_resize(&mut self, _: &mut FrameContext, _: Vector2<u32>) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called when the loop is about to finish.
    fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
        Ok(())
    }
}

/// The per-frame state handed to an `Application`.
pub struct FrameContext {
    input: Input,
    time: TimeSystem,
    dimensions: Vector2<u32>,
    shutdown: bool,
}

impl FrameContext {
    fn new(params: &EngineParams, dimensions: Vector2<u32>) -> Self {
        FrameContext {
            input: Input::new(),
            time: TimeSystem::new(params.max_fps),
            dimensions,
            shutdown: false,
        }
    }

    #[inline]
    pub fn input(&self) -> &Input {
        &self.input
    }

    #[inline]
    pub fn time(&self) -> &TimeSystem {
        &self.time
    }

    /// The size of the default framebuffer in physical pixels.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// The width divided by the height of the default framebuffer, or 1 while
    /// the framebuffer is empty (e.g. a minimized window).
    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.dimensions.x == 0 || self.dimensions.y == 0 {
            1.0
        } else {
            self.dimensions.x as f32 / self.dimensions.y as f32
        }
    }

    /// Closes the window at the end of this frame.
    #[inline]
    pub fn quit(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if the loop is going to finish at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

/// Creates a window with `settings`, builds the application with `builder` and
/// runs the render loop until the window gets closed.
pub fn run<A, F>(settings: &Settings, builder: F) -> Result<()>
where
    A: Application,
    F: FnOnce(&mut FrameContext) -> Result<A>,
{
    let window = Window::new(&settings.window)?;
    crate::video::probe()?;
    run_with(window, &settings.engine, builder)
}

/// Runs the render loop on a window that has been created already.
pub fn run_with<A, F>(mut window: Window, params: &EngineParams, builder: F) -> Result<()>
where
    A: Application,
    F: FnOnce(&mut FrameContext) -> Result<A>,
{
    let dpr = window.device_pixel_ratio();
    let dimensions = window.dimensions();
    let dimensions = Vector2::new(
        (dimensions.x as f32 * dpr) as u32,
        (dimensions.y as f32 * dpr) as u32,
    );

    let mut ctx = FrameContext::new(params, dimensions);
    let mut application = builder(&mut ctx)?;
    let mut events = Vec::new();

    info!("[Application] Enters the render loop.");

    while !ctx.shutdown {
        ctx.time.advance();
        ctx.input.advance();

        window.poll_events(&mut events);
        for v in events.drain(..) {
            match v {
                Event::Window(WindowEvent::Closed) => ctx.shutdown = true,

                Event::Window(WindowEvent::Resized(width, height)) => {
                    let dimensions = Vector2::new(width, height);
                    window.resize(dimensions);
                    ctx.dimensions = dimensions;
                    application.on_resize(&mut ctx, dimensions)?;
                }

                Event::Window(WindowEvent::LostFocus) => ctx.input.reset(),

                Event::InputDevice(e) => ctx.input.update(e),

                _ => {}
            }
        }

        if params.exit_on_escape && ctx.input.is_key_press(Key::Escape) {
            ctx.shutdown = true;
        }

        if ctx.shutdown {
            break;
        }

        application.on_update(&mut ctx)?;
        application.on_render(&mut ctx)?;
        window.swap_buffers()?;
    }

    info!("[Application] Leaves the render loop.");

    application.on_exit(&mut ctx)?;
    drop(application);
    Ok(())
}
