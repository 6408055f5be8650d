use std::cell::RefCell;
use std::rc::Rc;

use glsteps::application::{self, EngineParams};
use glsteps::math::Vector2;
use glsteps::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

struct Recorder {
    log: Log,
    quit_after: Option<usize>,
    frames: usize,
}

impl Recorder {
    fn new(log: &Log) -> Self {
        Recorder {
            log: log.clone(),
            quit_after: None,
            frames: 0,
        }
    }
}

impl Application for Recorder {
    fn on_update(&mut self, ctx: &mut FrameContext) -> Result<()> {
        self.frames += 1;
        if ctx.input().is_key_press(Key::Space) {
            self.log.borrow_mut().push("space".into());
        }

        if Some(self.frames) == self.quit_after {
            ctx.quit();
        }

        Ok(())
    }

    fn on_render(&mut self, _: &mut FrameContext) -> Result<()> {
        self.log.borrow_mut().push("render".into());
        Ok(())
    }

    fn on_resize(&mut self, ctx: &mut FrameContext, dimensions: Vector2<u32>) -> Result<()> {
        assert_eq!(ctx.dimensions(), dimensions);
        self.log
            .borrow_mut()
            .push(format!("resize {}x{}", dimensions.x, dimensions.y));
        Ok(())
    }

    fn on_exit(&mut self, _: &mut FrameContext) -> Result<()> {
        self.log.borrow_mut().push("exit".into());
        Ok(())
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        self.log.borrow_mut().push("drop".into());
    }
}

fn key(key: Key) -> Event {
    Event::InputDevice(InputEvent::KeyboardPressed { key })
}

fn run(frames: Vec<Vec<Event>>, params: &EngineParams, quit_after: Option<usize>) -> Vec<String> {
    let log = Log::default();
    let window = Window::headless(Vector2::new(800, 600), frames);

    application::run_with(window, params, |_| {
        let mut app = Recorder::new(&log);
        app.quit_after = quit_after;
        Ok(app)
    })
    .unwrap();

    let v = log.borrow().clone();
    v
}

#[test]
fn closes_when_script_ends() {
    let log = run(vec![vec![], vec![]], &EngineParams::default(), None);
    assert_eq!(log, vec!["render", "render", "exit", "drop"]);
}

#[test]
fn escape_ends_loop() {
    let frames = vec![vec![], vec![key(Key::Escape)], vec![], vec![]];
    let log = run(frames, &EngineParams::default(), None);
    assert_eq!(log, vec!["render", "exit", "drop"]);
}

#[test]
fn escape_ignored_when_disabled() {
    let params = EngineParams {
        exit_on_escape: false,
        ..Default::default()
    };

    let frames = vec![vec![key(Key::Escape)], vec![]];
    let log = run(frames, &params, None);
    assert_eq!(log, vec!["render", "render", "exit", "drop"]);
}

#[test]
fn closed_event_skips_frame() {
    let frames = vec![vec![], vec![Event::Window(WindowEvent::Closed)], vec![]];
    let log = run(frames, &EngineParams::default(), None);
    assert_eq!(log, vec!["render", "exit", "drop"]);
}

#[test]
fn quit_finishes_current_frame() {
    let frames = vec![vec![], vec![], vec![], vec![]];
    let log = run(frames, &EngineParams::default(), Some(2));
    assert_eq!(log, vec!["render", "render", "exit", "drop"]);
}

#[test]
fn resize_reaches_application() {
    let frames = vec![vec![Event::Window(WindowEvent::Resized(1024, 768))]];
    let log = run(frames, &EngineParams::default(), None);
    assert_eq!(log, vec!["resize 1024x768", "render", "exit", "drop"]);
}

#[test]
fn key_press_is_edge_triggered() {
    let frames = vec![vec![key(Key::Space)], vec![], vec![]];
    let log = run(frames, &EngineParams::default(), None);
    assert_eq!(log, vec!["space", "render", "render", "render", "exit", "drop"]);
}

#[test]
fn builder_error_propagates() {
    let window = Window::headless(Vector2::new(800, 600), vec![]);
    let result = application::run_with(window, &EngineParams::default(), |_| -> Result<Recorder> {
        Err(failure::err_msg("setup failed"))
    });

    assert_eq!(result.err().unwrap().to_string(), "setup failed");
}

#[test]
fn initial_dimensions() {
    let window = Window::headless(Vector2::new(640, 480), vec![]);
    application::run_with(window, &EngineParams::default(), |ctx| {
        assert_eq!(ctx.dimensions(), Vector2::new(640, 480));
        assert!((ctx.aspect() - 640.0 / 480.0).abs() < 1e-6);
        Ok(Recorder::new(&Log::default()))
    })
    .unwrap();
}

#[test]
fn empty_framebuffer_keeps_aspect_positive() {
    use glsteps::math::{self, Deg, Matrix4};

    struct Projection(Rc<RefCell<Vec<f32>>>);

    impl Application for Projection {
        fn on_resize(&mut self, ctx: &mut FrameContext, _: Vector2<u32>) -> Result<()> {
            let _: Matrix4<f32> = math::perspective(Deg(45.0), ctx.aspect(), 0.1, 100.0);
            Ok(())
        }

        fn on_render(&mut self, ctx: &mut FrameContext) -> Result<()> {
            let _: Matrix4<f32> = math::perspective(Deg(45.0), ctx.aspect(), 0.1, 100.0);
            self.0.borrow_mut().push(ctx.aspect());
            Ok(())
        }
    }

    let frames = vec![
        vec![Event::Window(WindowEvent::Resized(0, 600))],
        vec![Event::Window(WindowEvent::Resized(800, 0))],
        vec![Event::Window(WindowEvent::Resized(800, 400))],
    ];

    let aspects = Rc::new(RefCell::new(Vec::new()));
    let window = Window::headless(Vector2::new(800, 600), frames);
    application::run_with(window, &EngineParams::default(), |_| {
        Ok(Projection(aspects.clone()))
    })
    .unwrap();

    assert_eq!(*aspects.borrow(), vec![1.0, 1.0, 2.0]);
}
