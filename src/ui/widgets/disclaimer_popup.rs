// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the heuristics notice popup on top of the existing UI.
///
/// This function creates a modal-like window shown at startup that explains
/// what the verdicts of this tool are - and what they are not. The `Clear`
/// widget is used to ensure the popup is drawn on a clean area, obscuring
/// the content underneath.
///
/// # Arguments
/// * `frame` - A mutable reference to the `Frame` used for rendering the TUI.
/// * `area` - The `Rect` representing the total area available for rendering.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("ABOUT THESE RESULTS".bold().yellow()),
        Line::from(""),
        Line::from(
            "PhishGuard scores URLs with a fixed set of pattern heuristics: length, symbols, raw IP hosts, transport scheme, known-bad keywords and domain extensions.",
        ),
        Line::from(""),
        Line::from(
            "The analysis runs entirely offline. No request is ever sent to the scanned address, and nothing about the page itself is inspected.",
        ),
        Line::from(""),
        Line::from("Keep in mind:"),
        Line::from("1. A SAFE verdict means no heuristic fired. It is an indication, not a guarantee."),
        Line::from("2. A MALICIOUS verdict means the URL shares traits with known phishing links, not that the site has been confirmed hostile."),
        Line::from("3. When in doubt, verify the destination through an independent channel."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to Acknowledge and Continue".bold()),
    ]);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    // The popup occupies 70% of the width and 70% of the height.
    let popup_area = centered_rect(70, 70, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    // `Clear` is essential here: it first clears the popup area before
    // rendering, which prevents the background UI from bleeding through.
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle for a popup.
///
/// Calculates a `Rect` centered within a parent area `r` based on the
/// desired width and height percentages.
///
/// # Arguments
/// * `percent_x` - The desired width of the popup as a percentage of the parent area.
/// * `percent_y` - The desired height of the popup as a percentage of the parent area.
/// * `r` - The parent `Rect` to center the new area within.
///
/// # Returns
/// A new `Rect` that is centered within `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
