//! Key mapping from terminal events to simulation actions.
//!
//! Cell toggling is mouse-driven and resolved by the view's hit test; the
//! keyboard carries only the run/clear/speed controls. Speed keys are the
//! keyboard stand-in for the original UI's interval slider.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_life_types::SimAction;

/// Map keyboard input to simulation actions.
pub fn map_key_event(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(SimAction::ToggleRun)
        }
        KeyCode::Char('c') | KeyCode::Char('C') => Some(SimAction::Clear),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(SimAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(SimAction::Slower),
        _ => None,
    }
}

/// Check if the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
