use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TodoItem;
use crate::tui::app::{App, EditState};
use crate::util::unicode::{display_width, next_grapheme_boundary, truncate_to_width};

/// Width of the `▸ [x] ` prefix in cells
const PREFIX_WIDTH: usize = 6;

/// Checkbox symbol for an item
fn checkbox(item: &TodoItem) -> &'static str {
    if item.checked { "[x]" } else { "[ ]" }
}

/// Render the item list, one row per item
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No items. Press n to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor visible
    app.clamp_cursor();
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor.saturating_sub(visible_height.saturating_sub(1));
    }

    let text_width = (area.width as usize).saturating_sub(PREFIX_WIDTH);
    let editing = app.edit.as_ref();
    let mut cursor_pos: Option<Position> = None;
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    let items = app.store.items();
    let end = items.len().min(app.scroll_offset + visible_height);
    for (row, item) in items[app.scroll_offset..end].iter().enumerate() {
        let is_cursor = item.id == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{25B8} " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                checkbox(item),
                Style::default()
                    .fg(if item.checked { app.theme.green } else { app.theme.text })
                    .bg(row_bg),
            ),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];

        match editing.filter(|es| es.key == item.key) {
            Some(es) => {
                let (visible, col) = visible_edit_text(es, text_width);
                spans.push(Span::styled(
                    visible,
                    Style::default().fg(app.theme.text_bright).bg(row_bg),
                ));
                cursor_pos = Some(Position::new(
                    area.x + (PREFIX_WIDTH + col) as u16,
                    area.y + row as u16,
                ));
            }
            None => {
                let mut style = Style::default().fg(app.theme.item_color(item.checked)).bg(row_bg);
                if item.checked {
                    style = style.add_modifier(Modifier::CROSSED_OUT);
                }
                if is_cursor && !item.checked {
                    style = style.fg(app.theme.text_bright);
                }
                spans.push(Span::styled(truncate_to_width(&item.text, text_width), style));
            }
        }

        // Pad the cursor row so the selection background spans the width
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if is_cursor && used < area.width as usize {
            spans.push(Span::styled(
                " ".repeat(area.width as usize - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

/// The slice of the edit buffer to show and the cursor's column within it.
/// Scrolls horizontally so the cursor always stays in view.
fn visible_edit_text(es: &EditState, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let mut start = 0;
    while display_width(&es.buffer[start..es.cursor]) >= width {
        match next_grapheme_boundary(&es.buffer, start) {
            Some(next) if next <= es.cursor => start = next,
            _ => break,
        }
    }
    let col = display_width(&es.buffer[start..es.cursor]);
    let visible = truncate_to_width(&es.buffer[start..], width);
    (visible, col)
}
