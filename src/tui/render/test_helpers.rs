use std::fs;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::Config;
use crate::tui::app::{App, open_store};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Three items, the second one checked.
pub const SIMPLE_LIST_MD: &str = "\
# TODO List

- [ ] buy milk
- [x] call mom
- [ ] pay rent
";

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Write `md` to `todo.md` in a temp dir and open an App on it.
/// Keep the TempDir alive for as long as the App is used.
pub fn app_with_file(md: &str) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("todo.md");
    fs::write(&path, md).unwrap();
    let config = Config::default();
    let (store, notice) = open_store(&path, &config);
    assert!(notice.is_none(), "fixture failed to load: {:?}", notice);
    let mut app = App::new(store, &config);
    app.drain_store_events();
    (tmp, app)
}
