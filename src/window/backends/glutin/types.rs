use glutin;

use super::super::super::events::{Event, WindowEvent};

use crate::input::events::InputEvent;
use crate::input::keyboard::Key;

/// Converts a glutin event. `dpr` turns the logical sizes that glutin reports
/// into the physical pixels the GL viewport expects.
pub fn from_event(source: glutin::Event, dpr: f32) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event, dpr),

        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent, dpr: f32) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested | glutin::WindowEvent::Destroyed => {
            Some(Event::Window(WindowEvent::Closed))
        }

        glutin::WindowEvent::Focused(v) => if v {
            Some(Event::Window(WindowEvent::GainFocus))
        } else {
            Some(Event::Window(WindowEvent::LostFocus))
        },

        glutin::WindowEvent::Resized(size) => {
            let size = size.to_physical(f64::from(dpr));
            Some(Event::Window(WindowEvent::Resized(
                size.width as u32,
                size.height as u32,
            )))
        }

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key).map(|key| match state {
            glutin::ElementState::Pressed => Event::InputDevice(InputEvent::KeyboardPressed { key }),
            glutin::ElementState::Released => {
                Event::InputDevice(InputEvent::KeyboardReleased { key })
            }
        }),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::Key1 => Some(Key::Key1),
        glutin::VirtualKeyCode::Key2 => Some(Key::Key2),
        glutin::VirtualKeyCode::Key3 => Some(Key::Key3),
        glutin::VirtualKeyCode::Key4 => Some(Key::Key4),
        glutin::VirtualKeyCode::Key5 => Some(Key::Key5),
        glutin::VirtualKeyCode::Key6 => Some(Key::Key6),
        glutin::VirtualKeyCode::Key7 => Some(Key::Key7),
        glutin::VirtualKeyCode::Key8 => Some(Key::Key8),
        glutin::VirtualKeyCode::Key9 => Some(Key::Key9),
        glutin::VirtualKeyCode::Key0 => Some(Key::Key0),
        glutin::VirtualKeyCode::A => Some(Key::A),
        glutin::VirtualKeyCode::B => Some(Key::B),
        glutin::VirtualKeyCode::C => Some(Key::C),
        glutin::VirtualKeyCode::D => Some(Key::D),
        glutin::VirtualKeyCode::E => Some(Key::E),
        glutin::VirtualKeyCode::F => Some(Key::F),
        glutin::VirtualKeyCode::G => Some(Key::G),
        glutin::VirtualKeyCode::H => Some(Key::H),
        glutin::VirtualKeyCode::I => Some(Key::I),
        glutin::VirtualKeyCode::J => Some(Key::J),
        glutin::VirtualKeyCode::K => Some(Key::K),
        glutin::VirtualKeyCode::L => Some(Key::L),
        glutin::VirtualKeyCode::M => Some(Key::M),
        glutin::VirtualKeyCode::N => Some(Key::N),
        glutin::VirtualKeyCode::O => Some(Key::O),
        glutin::VirtualKeyCode::P => Some(Key::P),
        glutin::VirtualKeyCode::Q => Some(Key::Q),
        glutin::VirtualKeyCode::R => Some(Key::R),
        glutin::VirtualKeyCode::S => Some(Key::S),
        glutin::VirtualKeyCode::T => Some(Key::T),
        glutin::VirtualKeyCode::U => Some(Key::U),
        glutin::VirtualKeyCode::V => Some(Key::V),
        glutin::VirtualKeyCode::W => Some(Key::W),
        glutin::VirtualKeyCode::X => Some(Key::X),
        glutin::VirtualKeyCode::Y => Some(Key::Y),
        glutin::VirtualKeyCode::Z => Some(Key::Z),
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        glutin::VirtualKeyCode::F1 => Some(Key::F1),
        glutin::VirtualKeyCode::F2 => Some(Key::F2),
        glutin::VirtualKeyCode::F3 => Some(Key::F3),
        glutin::VirtualKeyCode::F4 => Some(Key::F4),
        glutin::VirtualKeyCode::F5 => Some(Key::F5),
        glutin::VirtualKeyCode::F6 => Some(Key::F6),
        glutin::VirtualKeyCode::F7 => Some(Key::F7),
        glutin::VirtualKeyCode::F8 => Some(Key::F8),
        glutin::VirtualKeyCode::F9 => Some(Key::F9),
        glutin::VirtualKeyCode::F10 => Some(Key::F10),
        glutin::VirtualKeyCode::F11 => Some(Key::F11),
        glutin::VirtualKeyCode::F12 => Some(Key::F12),
        glutin::VirtualKeyCode::Left => Some(Key::Left),
        glutin::VirtualKeyCode::Up => Some(Key::Up),
        glutin::VirtualKeyCode::Right => Some(Key::Right),
        glutin::VirtualKeyCode::Down => Some(Key::Down),
        glutin::VirtualKeyCode::Back => Some(Key::Back),
        glutin::VirtualKeyCode::Return => Some(Key::Return),
        glutin::VirtualKeyCode::Space => Some(Key::Space),
        glutin::VirtualKeyCode::Tab => Some(Key::Tab),
        glutin::VirtualKeyCode::LAlt => Some(Key::LAlt),
        glutin::VirtualKeyCode::LControl => Some(Key::LControl),
        glutin::VirtualKeyCode::LShift => Some(Key::LShift),
        glutin::VirtualKeyCode::RAlt => Some(Key::RAlt),
        glutin::VirtualKeyCode::RControl => Some(Key::RControl),
        glutin::VirtualKeyCode::RShift => Some(Key::RShift),
        _ => None,
    }
}
