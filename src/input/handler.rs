use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Key),
    Quit,
    None,
}

/// Maps terminal key events onto the logical keys the engine understands
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Key::Up),
            KeyCode::Down => KeyAction::Game(Key::Down),
            KeyCode::Left => KeyAction::Game(Key::Left),
            KeyCode::Right => KeyAction::Game(Key::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Key::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Key::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Key::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Key::Right),

            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Game(Key::Confirm),
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Char('g') | KeyCode::Char('G') => {
                KeyAction::Game(Key::ToggleMesh)
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Game(Key::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Game(Key::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Game(Key::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Game(Key::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Game(Key::Up));
        assert_eq!(press(KeyCode::Char('a')), KeyAction::Game(Key::Left));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Game(Key::Down));
        assert_eq!(press(KeyCode::Char('d')), KeyAction::Game(Key::Right));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), KeyAction::Game(Key::Up));
    }

    #[test]
    fn test_confirm_and_mesh_keys() {
        assert_eq!(press(KeyCode::Enter), KeyAction::Game(Key::Confirm));
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::Game(Key::Confirm));
        assert_eq!(press(KeyCode::Char('m')), KeyAction::Game(Key::ToggleMesh));
        assert_eq!(press(KeyCode::Char('G')), KeyAction::Game(Key::ToggleMesh));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::new().handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Tab), KeyAction::None);
    }
}
