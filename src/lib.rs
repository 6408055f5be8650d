//! # glsteps
//!
//! The support library shared by a sequence of small OpenGL tutorial programs.
//! Every demo is a linear "init, loop, cleanup" program: it opens a window,
//! compiles fixed shader sources, uploads static geometry and then draws the
//! same fixed sequence of calls every frame until the window is closed.
//!
//! The library only removes the repetition between those programs:
//!
//! * `window` creates the window and a current OpenGL core-profile context.
//! * `application` owns the render loop, frame timing and event dispatching.
//! * `input` keeps the keyboard state of the current frame.
//! * `video` wraps GL objects (programs, meshes, textures, framebuffers) so
//!   they are released when dropped.
//! * `assets` decodes images and Wavefront OBJ models.
//! * `ssao` generates the sample kernel and render targets of the screen-space
//!   ambient occlusion demo.
//!
//! ```rust,ignore
//! use glsteps::prelude::*;
//!
//! struct Clear;
//!
//! impl Application for Clear {
//!     fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
//!         video::state::clear(Color::new(0.2, 0.3, 0.3, 1.0), None)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() {
//!     application::run(&Settings::default(), |_| Ok(Clear)).unwrap();
//! }
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate cgmath;
pub extern crate gl;

pub mod errors;
pub mod application;
pub mod assets;
pub mod input;
pub mod math;
pub mod ssao;
pub mod video;
pub mod window;

pub mod prelude;
