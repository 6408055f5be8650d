use std::collections::VecDeque;

use crate::errors::*;
use crate::math::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// A window without any GL context. Each call of `poll_events` hands out the
/// events of the next scripted frame; once the script runs dry a `Closed`
/// event is reported so that render loops always terminate.
pub struct HeadlessVisitor {
    dimensions: Vector2<u32>,
    frames: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>, frames: Vec<Vec<Event>>) -> Self {
        HeadlessVisitor {
            dimensions,
            frames: frames.into(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    #[inline]
    fn resize(&mut self, dimensions: Vector2<u32>) {
        self.dimensions = dimensions;
    }

    #[inline]
    fn set_cursor_grab(&self, _: bool) -> Result<()> {
        Ok(())
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.frames.pop_front() {
            Some(frame) => events.extend(frame),
            None => events.push(Event::Window(WindowEvent::Closed)),
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }
}
