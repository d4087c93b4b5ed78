use std::time::Duration;

use winit::event::VirtualKeyCode;

use crate::game::{GameInput, Key};

/// Arrow keys, Space and P. Everything else is ignored.
pub fn map_key(key: VirtualKeyCode) -> Option<Key> {
    match key {
        VirtualKeyCode::Left => Some(Key::Left),
        VirtualKeyCode::Right => Some(Key::Right),
        VirtualKeyCode::Down => Some(Key::Down),
        VirtualKeyCode::Up => Some(Key::Up),
        VirtualKeyCode::Space => Some(Key::Space),
        VirtualKeyCode::P => Some(Key::Pause),
        _ => None,
    }
}

/// One host frame as controller inputs: the elapsed time first, then the mapped key presses
/// in arrival order.
pub fn frame_inputs(keys: &[VirtualKeyCode], dt: Duration) -> Vec<GameInput> {
    std::iter::once(GameInput::Tick(dt))
        .chain(keys.iter().filter_map(|&k| map_key(k)).map(GameInput::Key))
        .collect()
}
