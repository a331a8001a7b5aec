// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the log view panel.
///
/// This widget displays the most recent lines from the application's log
/// file. It includes a horizontal scrollbar to allow viewing of long log
/// lines that might otherwise be truncated, and styles the timestamp part
/// of each line to improve readability.
///
/// # Arguments
///
/// * `frame` - The mutable frame to render onto.
/// * `app` - A mutable reference to the application's state, containing log content and scroll state.
/// * `area` - The `Rect` in which to render this widget.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Logs (scroll with ← →)")
        .borders(Borders::ALL);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Widest line in the buffer, used to size the scrollbar.
    let max_width = app
        .log_content
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // A log line looks like "DATE TIME LEVEL MESSAGE"; split off the first
    // two fields so the timestamp can be dimmed.
    let log_lines: Vec<Line> = app
        .log_content
        .iter()
        .map(|line_str| {
            let mut parts = line_str.splitn(3, ' ');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(date), Some(time), Some(rest)) => {
                    let timestamp = format!("{} {}", date, time);
                    let message = format!(" {}", rest);
                    Line::from(vec![
                        Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
                        Span::raw(message),
                    ])
                }
                // Lines that do not match the expected shape render as-is.
                _ => Line::from(line_str.as_str()),
            }
        })
        .collect();

    let log_paragraph =
        Paragraph::new(log_lines).scroll((0, app.log_horizontal_scroll as u16));

    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom).thumb_symbol("■");

    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };

    frame.render_stateful_widget(
        scrollbar,
        scrollbar_area,
        &mut app.log_horizontal_scroll_state,
    );
}
