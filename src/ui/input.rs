//! Global key routing.

use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key event: global chords first, then the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.navigate_back();
        return;
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(code) if code == ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navigation::Screen;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::empty(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::empty(), KeyEventKind::Press)
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Enter)); // move to message

        handle_key(
            &mut app,
            key(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press,
            ),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_is_just_a_character() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        match app.screen() {
            Screen::Greeting(screen) => assert_eq!(screen.state().name, "Androidq"),
            _ => panic!("expected greeting screen"),
        }
    }

    #[test]
    fn esc_navigates_back() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(matches!(app.screen(), Screen::Greeting(_)));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::new();
        handle_key(
            &mut app,
            key(
                KeyCode::Char('x'),
                KeyModifiers::empty(),
                KeyEventKind::Release,
            ),
        );
        match app.screen() {
            Screen::Greeting(screen) => assert_eq!(screen.state().name, "Android"),
            _ => panic!("expected greeting screen"),
        }
    }
}
