mod glutin;
mod headless;

use crate::errors::*;
use crate::math::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    fn resize(&mut self, dimensions: Vector2<u32>);
    fn set_cursor_grab(&self, grab: bool) -> Result<()>;
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn swap_buffers(&self) -> Result<()>;
}

pub fn new(params: &WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::from(params)?;
    Ok(Box::new(visitor))
}

pub fn new_headless(dimensions: Vector2<u32>, frames: Vec<Vec<Event>>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(dimensions, frames))
}
