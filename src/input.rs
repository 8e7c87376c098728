//! Key handling for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use word_snake::snake::Direction;
use word_snake::GameInput;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Game(GameInput),
    Quit,
    Ignored,
}

/// Map a key to an action. Whether the action applies in the current phase
/// is up to the session; unsupported actions are ignored there.
pub fn map_key(key: KeyEvent) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameInput::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameInput::Steer(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameInput::Steer(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameInput::Steer(Direction::Right)
        }
        KeyCode::Backspace | KeyCode::Delete => GameInput::Undo,
        KeyCode::Char(' ') | KeyCode::Enter => GameInput::Start,
        KeyCode::Char('p') | KeyCode::Char('P') => GameInput::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => return InputResult::Ignored,
    };
    InputResult::Game(input)
}
