use gl;
use glutin;

use crate::errors::*;
use crate::math::Vector2;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    context: glutin::WindowedContext<glutin::PossiblyCurrent>,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn from(params: &WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(
                glutin::Api::OpenGl,
                (major, minor),
            ))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let context = context
            .build_windowed(builder, &events_loop)
            .map_err(|err| format_err!("[Glutin] Failed to create window: {}", err))?;

        let context = unsafe {
            context
                .make_current()
                .map_err(|(_, err)| format_err!("[Glutin] {}", err))?
        };

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

        let mut visitor = GlutinVisitor {
            context,
            events_loop,
        };

        let size = visitor.dimensions();
        let dpr = visitor.device_pixel_ratio();
        let dims = Vector2::new((size.x as f32 * dpr) as u32, (size.y as f32 * dpr) as u32);

        visitor.events_loop.poll_events(|_| {});
        visitor.resize(dims);

        if params.cursor_grab {
            visitor.set_cursor_grab(true)?;
        }

        info!(
            "[Window] '{}' created with {}x{} pixels (dpr {}).",
            params.title, dims.x, dims.y, dpr
        );

        Ok(visitor)
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.context
            .window()
            .get_inner_size()
            .map(|size| Vector2::new(size.width as u32, size.height as u32))
            .unwrap_or_else(|| Vector2::new(0, 0))
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.context.window().get_hidpi_factor() as f32
    }

    fn resize(&mut self, dimensions: Vector2<u32>) {
        let size = glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.context.resize(size);

        unsafe {
            gl::Viewport(0, 0, dimensions.x as i32, dimensions.y as i32);
        }
    }

    fn set_cursor_grab(&self, grab: bool) -> Result<()> {
        let window = self.context.window();
        window.hide_cursor(grab);
        window
            .grab_cursor(grab)
            .map_err(|err| format_err!("[Glutin] Failed to grab cursor: {}", err))
    }

    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dpr = self.device_pixel_ratio();
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dpr) {
                events.push(e);
            }
        });
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.context.is_current()
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.context
            .swap_buffers()
            .map_err(|err| format_err!("[Glutin] {}", err))
    }
}
