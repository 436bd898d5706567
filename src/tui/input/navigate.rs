use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

// ---------------------------------------------------------------------------
// NAVIGATE mode input

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status = None;

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => quit(app),
        (KeyModifiers::NONE, KeyCode::Char('q')) => quit(app),

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Reorder
        (KeyModifiers::SHIFT, KeyCode::Char('J')) => move_current(app, 1),
        (KeyModifiers::SHIFT, KeyCode::Char('K')) => move_current(app, -1),
        (m, KeyCode::Down) if m.contains(KeyModifiers::ALT) => move_current(app, 1),
        (m, KeyCode::Up) if m.contains(KeyModifiers::ALT) => move_current(app, -1),

        // Mutations
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_current(app),
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('e')) => {
            if let Some(item) = app.store.get_index(app.cursor) {
                let key = item.key;
                enter_edit(app, key, false);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n') | KeyCode::Char('a')) => append_item(app),
        (KeyModifiers::NONE, KeyCode::Char('d')) => delete_current(app),

        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, delta: isize) {
    let last = app.store.len().saturating_sub(1);
    app.cursor = app.cursor.saturating_add_signed(delta).min(last);
}

/// Save and leave the event loop. A failed save is reported but does not
/// keep the user from quitting.
pub(super) fn quit(app: &mut App) {
    if let Err(e) = app.store.save() {
        app.report(&e);
    }
    app.should_quit = true;
}

fn toggle_current(app: &mut App) {
    let Some(item) = app.store.get_index(app.cursor) else {
        return;
    };
    let checked = !item.checked;
    if let Err(e) = app.store.update_status(app.cursor, checked) {
        app.report(&e);
    }
}

fn append_item(app: &mut App) {
    let placeholder = app.placeholder.clone();
    match app.store.append(placeholder) {
        Ok(key) => {
            app.cursor = app.store.len() - 1;
            enter_edit(app, key, true);
        }
        Err(e) => {
            app.report(&e);
            app.cursor = app.store.len().saturating_sub(1);
        }
    }
}

fn delete_current(app: &mut App) {
    match app.store.remove(app.cursor) {
        Ok(Some(removed)) => {
            log::debug!("deleted {:?}", removed);
            app.set_status(format!("deleted \"{}\"", removed.text));
        }
        Ok(None) => {}
        Err(e) => app.report(&e),
    }
    app.clamp_cursor();
}

fn move_current(app: &mut App, delta: isize) {
    let Some(key) = app.store.get_index(app.cursor).map(|item| item.key) else {
        return;
    };
    if let Err(e) = app.store.move_item(app.cursor, delta) {
        app.report(&e);
    }
    // The move stays in memory even when the save fails, so follow the key
    if let Some(index) = app.store.index_of(key) {
        app.cursor = index;
    }
}
