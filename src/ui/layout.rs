// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// This struct holds `Rect` objects, each representing a specific widget
/// area on the terminal screen. This approach makes it easy to manage and
/// reference the layout without re-calculating dimensions every time a
/// widget needs to be rendered.
pub struct AppLayout {
    pub input: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
    pub log_panel: Rect,
}

/// Creates the complete application layout.
///
/// The terminal frame is divided into three vertical chunks: the input box
/// at the top, the main content area in the middle, and the footer at the
/// bottom. The content area is then split horizontally between the analysis
/// report and the summary, with a third column for the log panel when it is
/// toggled on.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
/// * `show_logs` - Whether the log panel column is currently visible.
///
/// # Returns
/// An `AppLayout` struct containing the calculated `Rect` for each widget area.
pub fn create_layout(frame_size: Rect, show_logs: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_constraints = if show_logs {
        // Report (40%), Summary (25%), Logs (35%).
        vec![
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ]
    } else {
        // Report (60%), Summary (40%).
        vec![Constraint::Percentage(60), Constraint::Percentage(40)]
    };

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(content_constraints)
        .split(main_chunks[1]);

    AppLayout {
        input: main_chunks[0],
        report: content_chunks[0],
        summary: content_chunks[1],
        log_panel: if show_logs {
            content_chunks[2]
        } else {
            Rect::default()
        },
        footer: main_chunks[2],
    }
}
