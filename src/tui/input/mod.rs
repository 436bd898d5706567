mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::*;
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event. Only active in Edit mode; newlines
/// become spaces since items are single-line.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Edit || text.is_empty() {
        return;
    }
    let clean = text.replace(['\r', '\n'], " ");
    insert_str(app, &clean);
}

/// Terminals disagree on how they report shifted letters: some send
/// `Char('J')` alone, some add SHIFT, some send `Char('j')` with SHIFT.
/// Normalize all of them to uppercase with SHIFT set.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code {
        if key.modifiers.contains(KeyModifiers::SHIFT) && c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if c.is_ascii_uppercase() {
            key.modifiers.insert(KeyModifiers::SHIFT);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_shift(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn texts(app: &App) -> Vec<(String, bool)> {
        app.store
            .items()
            .iter()
            .map(|item| (item.text.clone(), item.checked))
            .collect()
    }

    #[test]
    fn normalize_shifted_letters() {
        let k = normalize_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::SHIFT));
        assert_eq!(k.code, KeyCode::Char('J'));
        let k = normalize_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE));
        assert_eq!(k.modifiers, KeyModifiers::SHIFT);
        let k = normalize_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(k, KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
        press_shift(&mut app, 'G');
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn space_toggles_and_saves() {
        let (tmp, mut app) = app_with_file("- [ ] buy milk\n- [x] call mom\n");
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            texts(&app),
            vec![("buy milk".into(), true), ("call mom".into(), true)]
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("todo.md")).unwrap(),
            "# TODO List\n\n- [x] buy milk\n- [x] call mom\n"
        );
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.store.items()[0].checked);
    }

    #[test]
    fn edit_commit_updates_text() {
        let (tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        for _ in 0.."buy milk".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "  buy oat milk ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.items()[0].text, "buy oat milk");
        assert!(
            fs::read_to_string(tmp.path().join("todo.md"))
                .unwrap()
                .contains("- [ ] buy oat milk\n")
        );
    }

    #[test]
    fn edit_escape_discards_changes() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, " later");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());
        assert_eq!(app.store.items()[0].text, "buy milk");
    }

    #[test]
    fn edit_commit_of_blank_text_keeps_original() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Enter);
        for _ in 0..20 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.items()[0].text, "buy milk");
    }

    #[test]
    fn edit_cursor_movement_inserts_mid_text() {
        let (_tmp, mut app) = app_with_file("- [ ] ac\n");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('!'));
        assert_eq!(app.edit.as_ref().unwrap().buffer, "bc!");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.items()[0].text, "bc!");
    }

    #[test]
    fn new_item_is_appended_and_edited() {
        let (tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.cursor, 3);
        assert_eq!(app.store.items()[3].text, "new todo");
        assert_eq!(app.store.items()[3].id, 3);
        // Placeholder is already on disk
        assert!(
            fs::read_to_string(tmp.path().join("todo.md"))
                .unwrap()
                .ends_with("- [ ] new todo\n")
        );
        // Editing starts with an empty buffer
        type_str(&mut app, "water plants");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.items()[3].text, "water plants");
    }

    #[test]
    fn delete_removes_current_item() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press_shift(&mut app, 'G');
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
        // Nothing left to delete
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn shift_jk_reorders() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press_shift(&mut app, 'J');
        assert_eq!(app.cursor, 1);
        assert_eq!(app.store.items()[1].text, "buy milk");
        press_shift(&mut app, 'K');
        assert_eq!(app.cursor, 0);
        assert_eq!(app.store.items()[0].text, "buy milk");
    }

    #[test]
    fn paste_replaces_newlines() {
        let (_tmp, mut app) = app_with_file("- [ ] \n");
        press(&mut app, KeyCode::Enter);
        handle_paste(&mut app, "one\ntwo");
        assert_eq!(app.edit.as_ref().unwrap().buffer, "one two");
    }

    #[test]
    fn paste_ignored_in_navigate_mode() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        handle_paste(&mut app, "stray");
        assert_eq!(app.store.items()[0].text, "buy milk");
    }

    #[test]
    fn quit_saves_and_stops() {
        let (tmp, mut app) = app_with_file("# Notes\n- [x] a\n");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(
            fs::read_to_string(tmp.path().join("todo.md")).unwrap(),
            "# TODO List\n\n- [x] a\n"
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_toggle_swallows_keys() {
        let (_tmp, mut app) = app_with_file(SIMPLE_LIST_MD);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn keys_on_empty_list_are_harmless() {
        let (_tmp, mut app) = app_with_file("# nothing here\n");
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        press_shift(&mut app, 'J');
        press(&mut app, KeyCode::Down);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.cursor, 0);
        assert!(app.store.is_empty());
    }
}
