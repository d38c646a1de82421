//! Event mapping from terminal events to table actions.

use crate::types::TableAction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to table actions.
pub fn handle_key_event(key: KeyEvent) -> Option<TableAction> {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(TableAction::PlaySelected),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(TableAction::ToggleRivalHands),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TableAction::Redeal),
        KeyCode::Char('c') | KeyCode::Char('C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TableAction::ClearTrick)
        }
        _ => None,
    }
}

/// Map a mouse event to a pointer press; only left-button presses select.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<TableAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TableAction::Select {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Map any terminal event. Key repeats and releases are ignored.
pub fn handle_event(event: &Event) -> Option<TableAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Check if key should quit the table.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(TableAction::PlaySelected)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(TableAction::PlaySelected)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('V'))),
            Some(TableAction::ToggleRivalHands)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(TableAction::Redeal)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(TableAction::ClearTrick)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_not_clear_trick() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_left_press_selects() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 7)),
            Some(TableAction::Select { column: 12, row: 7 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 12, 7)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 7)),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_event_dispatch() {
        let press = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
        assert_eq!(
            handle_event(&press),
            Some(TableAction::Select { column: 3, row: 4 })
        );
        assert_eq!(handle_event(&Event::FocusGained), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
