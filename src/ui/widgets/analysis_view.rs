// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::knowledge_base;
use crate::core::models::Severity;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Threat Report (Navigate with ↑ ↓)");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => {
                Paragraph::new("Scan results will appear here...").alignment(Alignment::Center)
            }
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", spinner_char),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("Scanning... Please wait."),
                ]))
                .alignment(Alignment::Center)
            }
            _ => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), area);
        return;
    }

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(inner_area);

    let Some(report) = &app.scan_report else {
        return;
    };

    // One list row per triggered heuristic, in report order. The message is
    // shown rather than the family title because keyword and extension rows
    // are distinct per match.
    let items: Vec<ListItem> = report
        .threats
        .iter()
        .map(|threat| {
            let (category_prefix, severity) =
                match knowledge_base::get_finding_detail(&threat.code) {
                    Some(detail) => (format!("[{}] ", detail.category), detail.severity),
                    None => ("[?] ".to_string(), Severity::Info),
                };

            let message_style = match severity {
                Severity::Critical => Style::default().fg(Color::Red),
                Severity::Warning => Style::default().fg(Color::Yellow),
                Severity::Info => Style::default().fg(Color::Cyan),
            };

            let line = Line::from(vec![
                Span::styled(category_prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(threat.message.clone(), message_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let findings_list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(findings_list, chunks[0], &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    if let Some(selected_index) = app.analysis_list_state.selected() {
        if let Some(selected_threat) = report.threats.get(selected_index) {
            if let Some(detail) = knowledge_base::get_finding_detail(&selected_threat.code) {
                let text = vec![
                    Line::from(""),
                    Line::from(detail.title.bold()),
                    Line::from(""),
                    Line::from("WHAT IT MEANS:".yellow().bold()),
                    Line::from(detail.description),
                    Line::from(""),
                    Line::from("WHAT TO DO:".yellow().bold()),
                    Line::from(detail.remediation),
                ];
                let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
                frame.render_widget(p, chunks[1]);
            }
        }
    } else {
        render_placeholder_details(frame, app, detail_block, chunks[1]);
    }
}

fn render_placeholder_details(frame: &mut Frame, app: &App, block: Block, area: Rect) {
    let total_issues =
        app.summary.critical_issues + app.summary.warning_issues + app.summary.info_issues;

    let placeholder_text = if total_issues == 0 {
        Text::from(vec![
            Line::from(""),
            Line::from("✓ NO THREATS DETECTED".bold().fg(Color::Green)),
            Line::from(""),
            Line::from("None of the heuristic checks fired for this URL."),
            Line::from(""),
            Line::from("Remember that a clean result is an indication, not a guarantee."),
        ])
    } else {
        Text::from("Select an item above to see details.")
    };

    let p = Paragraph::new(placeholder_text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(p, area);
}
