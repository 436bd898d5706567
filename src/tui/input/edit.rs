use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::ItemKey;
use crate::tui::app::{App, EditState, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::*;

/// Start editing the item with `key`. A fresh item starts with an empty
/// buffer so the placeholder doesn't have to be deleted first.
pub(super) fn enter_edit(app: &mut App, key: ItemKey, fresh: bool) {
    let Some(item) = app.store.get(key) else {
        return;
    };
    let original = item.text.clone();
    let buffer = if fresh { String::new() } else { original.clone() };
    app.edit = Some(EditState {
        key,
        cursor: buffer.len(),
        buffer,
        original,
    });
    app.mode = Mode::Edit;
}

// ---------------------------------------------------------------------------
// EDIT mode input

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Keep the typed text
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            confirm_edit(app);
            quit(app);
        }
        (_, KeyCode::Enter) => confirm_edit(app),
        (_, KeyCode::Esc) => cancel_edit(app),

        (_, KeyCode::Left) => move_edit_cursor(app, prev_grapheme_boundary),
        (_, KeyCode::Right) => move_edit_cursor(app, next_grapheme_boundary),
        (_, KeyCode::Home) => {
            if let Some(es) = &mut app.edit {
                es.cursor = 0;
            }
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(es) = &mut app.edit {
                es.cursor = 0;
            }
        }
        (_, KeyCode::End) => {
            if let Some(es) = &mut app.edit {
                es.cursor = es.buffer.len();
            }
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(es) = &mut app.edit {
                es.cursor = es.buffer.len();
            }
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(es) = &mut app.edit {
                es.buffer.replace_range(..es.cursor, "");
                es.cursor = 0;
            }
        }

        (_, KeyCode::Backspace) => {
            if let Some(es) = &mut app.edit
                && let Some(prev) = prev_grapheme_boundary(&es.buffer, es.cursor)
            {
                es.buffer.replace_range(prev..es.cursor, "");
                es.cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(es) = &mut app.edit
                && let Some(next) = next_grapheme_boundary(&es.buffer, es.cursor)
            {
                es.buffer.replace_range(es.cursor..next, "");
            }
        }

        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let mut tmp = [0u8; 4];
            insert_str(app, c.encode_utf8(&mut tmp));
        }
        _ => {}
    }
}

/// Insert text at the edit cursor
pub(super) fn insert_str(app: &mut App, text: &str) {
    if let Some(es) = &mut app.edit {
        es.buffer.insert_str(es.cursor, text);
        es.cursor += text.len();
    }
}

fn move_edit_cursor(app: &mut App, step: fn(&str, usize) -> Option<usize>) {
    if let Some(es) = &mut app.edit
        && let Some(pos) = step(&es.buffer, es.cursor)
    {
        es.cursor = pos;
    }
}

/// Commit the edit. Blank or unchanged text leaves the item as it was.
pub(super) fn confirm_edit(app: &mut App) {
    app.mode = Mode::Navigate;
    let Some(es) = app.edit.take() else {
        return;
    };
    let text = es.buffer.trim();
    if text.is_empty() || text == es.original {
        return;
    }
    if let Err(e) = app.store.update_text_by_key(es.key, text) {
        app.report(&e);
    }
}

pub(super) fn cancel_edit(app: &mut App) {
    app.edit = None;
    app.mode = Mode::Navigate;
}
