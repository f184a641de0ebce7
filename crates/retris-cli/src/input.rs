use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use retris_engine::Command;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Command(Command),
    Quit,
}

pub(crate) fn map_event(event: &Event) -> Option<Input> {
    event.as_key_event().and_then(map_key)
}

/// Maps a key to an [`Input`].
///
/// Letters are case-insensitive. Key releases and unbound keys map to `None`.
pub(crate) fn map_key(key: KeyEvent) -> Option<Input> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    let command = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return c.eq_ignore_ascii_case(&'c').then_some(Input::Quit);
        }
        KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Down => Command::SoftDrop,
        KeyCode::Up => Command::Rotate,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Command::MoveLeft,
            'd' => Command::MoveRight,
            's' => Command::SoftDrop,
            'w' => Command::Rotate,
            'r' => Command::Restart,
            'q' => return Some(Input::Quit),
            _ => return None,
        },
        _ => return None,
    };
    Some(Input::Command(command))
}
