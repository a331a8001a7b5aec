// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use crate::core::models::RiskStatus;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the summary widget, which provides a high-level overview of the
/// scan results.
///
/// This widget displays the overall risk score with its verdict band, an
/// animated gauge, the SAFE/MALICIOUS status, the fixed technical details
/// of the report and the per-severity issue counts. It only renders content
/// once the scan has finished.
///
/// # Arguments
/// * `frame` - The `Frame` used for rendering the UI.
/// * `app` - A reference to the application's state, containing all scan data.
/// * `area` - The `Rect` defining the drawable area for this widget.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    // Define the layout for the internal chunks of the widget.
    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Target & scan time
            Constraint::Length(3), // Score & verdict section
            Constraint::Length(1), // Gauge chart
            Constraint::Length(2), // Spacer
            Constraint::Length(5), // Technical details section
            Constraint::Length(2), // Spacer
            Constraint::Length(4), // Threats found section
            Constraint::Min(0),
        ])
        .split(area);

    // Do not render summary content until the scan is complete.
    if !matches!(app.state, AppState::Finished) {
        return;
    }
    let Some(report) = &app.scan_report else {
        return;
    };

    // --- Target Section ---
    let mut target_lines = vec![Line::from(app.target_host().bold())];
    if let Some(finished_at) = app.finished_at {
        target_lines.push(Line::from(
            format!("scanned at {}", finished_at.format("%H:%M:%S")).dark_gray(),
        ));
    }
    frame.render_widget(
        Paragraph::new(target_lines).alignment(Alignment::Center),
        summary_chunks[0],
    );

    // --- Score & Verdict Section ---
    // Bands follow the score thresholds used for the report coloring:
    // below 30 is low, below 70 moderate, everything else high.
    let (band_text, band_style) = match app.summary.score {
        0..=29 => ("Low Risk", Style::default().fg(Color::Green)),
        30..=69 => ("Moderate Risk", Style::default().fg(Color::Yellow)),
        _ => ("High Risk", Style::default().fg(Color::Red)),
    };
    let status_style = match report.status {
        RiskStatus::Safe => Style::default().fg(Color::Green).bold(),
        RiskStatus::Malicious => Style::default().fg(Color::Red).bold(),
    };
    let score_text = Text::from(vec![
        Line::from("Risk Score".bold()),
        Line::from(format!("{}/100 ({})", app.summary.score, band_text)).style(band_style),
        Line::from(report.status.to_string()).style(status_style),
    ]);
    frame.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center),
        summary_chunks[1],
    );

    // --- Gauge Chart (Animated) ---
    // The gauge fills up to the displayed score; color tracks the band.
    let score_gauge = Gauge::default()
        .percent(app.displayed_score as u16)
        .label("")
        .style(Style::default().fg(if app.displayed_score < 30 {
            Color::Green
        } else if app.displayed_score < 70 {
            Color::Yellow
        } else {
            Color::Red
        }));
    frame.render_widget(score_gauge, summary_chunks[2]);

    // --- Technical Details Section ---
    let details_block = Block::default().title("TECHNICAL DETAILS".bold());
    let details_lines = vec![
        Line::from(vec![
            Span::raw("URL Length: "),
            Span::styled(report.details.url_length.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("SSL Certificate: "),
            Span::styled(
                report.details.ssl_certificate.clone(),
                if report.details.ssl_certificate == "Valid" {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                },
            ),
        ]),
        Line::from(vec![
            Span::raw("Subdomains: "),
            Span::styled(report.details.subdomains.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(details_lines).block(details_block),
        summary_chunks[4],
    );

    // --- Threats Found Section ---
    let issues_block = Block::default().title("THREATS FOUND".bold());
    let details_text = Text::from(vec![
        Line::from(vec![
            Span::raw("Critical: "),
            Span::styled(
                app.summary.critical_issues.to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Warnings: "),
            Span::styled(
                app.summary.warning_issues.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Notices: "),
            Span::styled(
                app.summary.info_issues.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ]);
    frame.render_widget(
        Paragraph::new(details_text).block(issues_block),
        summary_chunks[6],
    );
}
