//! Global key bindings. Anything not claimed here flows through to the
//! focused application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleLauncher,
    /// Escape: cancel an active gesture, or close the launcher.
    Cancel,
    CloseFocusedWindow,
    // Launcher navigation (only consulted while the launcher is open)
    MenuUp,
    MenuDown,
    MenuSelect,
}

/// Map a key event to a shell action. `launcher_open` widens the bindings so
/// plain arrow keys navigate the menu instead of reaching an application.
pub fn action_for_key(key: &KeyEvent, launcher_open: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char(' ') if ctrl => Some(Action::ToggleLauncher),
        KeyCode::Char('w') if ctrl => Some(Action::CloseFocusedWindow),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up if launcher_open => Some(Action::MenuUp),
        KeyCode::Down if launcher_open => Some(Action::MenuDown),
        KeyCode::Enter if launcher_open => Some(Action::MenuSelect),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_bindings_resolve() {
        assert_eq!(
            action_for_key(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), false),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char(' '), KeyModifiers::CONTROL), false),
            Some(Action::ToggleLauncher)
        );
    }

    #[test]
    fn plain_keys_reach_apps_unless_launcher_is_open() {
        assert_eq!(action_for_key(&key(KeyCode::Up, KeyModifiers::NONE), false), None);
        assert_eq!(
            action_for_key(&key(KeyCode::Up, KeyModifiers::NONE), true),
            Some(Action::MenuUp)
        );
        assert_eq!(
            action_for_key(&key(KeyCode::Char('q'), KeyModifiers::NONE), false),
            None
        );
    }
}
