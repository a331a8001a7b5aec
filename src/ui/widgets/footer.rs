// src/ui/widgets/footer.rs

use crate::app::{App, AppState, ExportStatus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions and the
/// outcome of the last export.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.show_disclaimer {
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" to acknowledge the notice."),
        ])
    } else {
        match app.state {
            // While the user is typing.
            AppState::Idle => Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to scan, "),
                Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to quit."),
            ]),
            // While the report is on screen.
            AppState::Finished => {
                let mut spans = vec![
                    Span::styled("[N]", Style::new().bold().fg(Color::Yellow)),
                    Span::raw("ew scan, "),
                    Span::styled("[E]", Style::new().bold().fg(Color::Yellow)),
                    Span::raw("xport, "),
                    Span::styled("[L]", Style::new().bold().fg(Color::Yellow)),
                    Span::raw("ogs, "),
                    Span::styled("[Q]", Style::new().bold().fg(Color::Yellow)),
                    Span::raw("uit"),
                ];
                match &app.export_status {
                    ExportStatus::Idle => {}
                    ExportStatus::Success(path) => {
                        spans.push(Span::raw(" | "));
                        spans.push(Span::styled(
                            format!("Saved: {}", path),
                            Style::new().fg(Color::Green),
                        ));
                    }
                    ExportStatus::Error(message) => {
                        spans.push(Span::raw(" | "));
                        spans.push(Span::styled(
                            format!("Export failed: {}", message),
                            Style::new().fg(Color::Red),
                        ));
                    }
                }
                Line::from(spans)
            }
            // While the scan is in flight.
            AppState::Scanning => Line::from("Scanning... Press Q to quit."),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
