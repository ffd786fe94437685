use crate::monitor::run::is_quit;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[test]
fn quit_keys() {
    // Assert
    assert!(is_quit(&KeyEvent::from(KeyCode::Char('q'))));
    assert!(is_quit(&KeyEvent::from(KeyCode::Esc)));
    assert!(is_quit(&KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
}

#[test]
fn other_keys_do_not_quit() {
    // Assert
    assert!(!is_quit(&KeyEvent::from(KeyCode::Char('c'))));
    assert!(!is_quit(&KeyEvent::from(KeyCode::Enter)));

    let mut release = KeyEvent::from(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert!(!is_quit(&release));
}
