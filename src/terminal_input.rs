use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::input::{Direction, GameInput, Point};

/// Terminal rows are about twice as tall as columns are wide.
const ROW_SCALE: i32 = 2;

/// Waits up to `timeout` for one terminal event and maps it to game input.
///
/// Returns `Ok(None)` on timeout or for events the game does not use.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    Ok(map_event(&event::read()?))
}

/// Maps a raw terminal event to game input.
#[must_use]
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        _ => None,
    }
}

/// Left button press and release bracket a swipe, like a touch start/end.
fn map_mouse(mouse: &MouseEvent) -> Option<GameInput> {
    let point = Point {
        x: i32::from(mouse.column),
        y: i32::from(mouse.row) * ROW_SCALE,
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameInput::GestureStart(point)),
        MouseEventKind::Up(MouseButton::Left) => Some(GameInput::GestureEnd(point)),
        _ => None,
    }
}
