use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

const EDIT_HINT: &str = "Enter save  Esc cancel";
const NAVIGATE_HINT: &str = "j/k move  space toggle  e edit  n new  d delete  J/K reorder  ? help  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();

    if let Some(status) = &app.status {
        let color = if status.is_error { app.theme.red } else { app.theme.text };
        spans.push(Span::styled(
            truncate_to_width(&format!(" {}", status.text), width),
            Style::default().fg(color).bg(bg),
        ));
    }

    // Right-aligned key hint, dropped when it doesn't fit
    let hint = match app.mode {
        Mode::Edit => Some(EDIT_HINT),
        Mode::Navigate if app.show_key_hints => Some(NAVIGATE_HINT),
        Mode::Navigate => None,
    };
    if let Some(hint) = hint {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
