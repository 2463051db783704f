use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the browser to do
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    CopyOutput,
    Refresh,
    UpdateSearch(char),
    DeleteChar,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('p') if ctrl => Action::MoveUp,
            KeyCode::Char('n') if ctrl => Action::MoveDown,
            KeyCode::Char('y') if ctrl => Action::CopyOutput,
            KeyCode::Char('r') if ctrl => Action::Refresh,
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                Action::UpdateSearch(c)
            }
            KeyCode::Esc => Action::ClearSearch,
            KeyCode::Up => Action::MoveUp,
            KeyCode::Down => Action::MoveDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Backspace => Action::DeleteChar,
            _ => Action::None,
        }
    }
}

/// Wait up to `timeout` for a key press
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }

    Ok(match event::read()? {
        Event::Key(key) => Action::from(key),
        _ => Action::None,
    })
}
