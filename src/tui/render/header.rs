use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Title text derived from the markdown header (`# TODO List` -> `TODO List`)
pub fn title_from_header(header: &str) -> &str {
    let title = header.trim_start_matches('#').trim();
    if title.is_empty() { "TODO" } else { title }
}

/// Render the header: title, file name and progress, with a separator below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);

    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled("\u{25B6}", Style::default().fg(app.theme.purple).bg(bg)),
        Span::styled(" ", bg_style),
        Span::styled(
            title_from_header(app.store.header()).to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let file_name = app.file_name();
    if !file_name.is_empty() {
        spans.push(Span::styled(" \u{2502} ", Style::default().fg(app.theme.dim).bg(bg)));
        spans.push(Span::styled(file_name, Style::default().fg(app.theme.text).bg(bg)));
    }

    // Right-aligned progress
    let progress = format!("{}/{} done ", app.store.done_count(), app.store.len());
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let width = chunks[0].width as usize;
    if used + progress.len() < width {
        spans.push(Span::styled(" ".repeat(width - used - progress.len()), bg_style));
        spans.push(Span::styled(progress, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[1],
    );
}
