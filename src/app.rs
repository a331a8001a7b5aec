// src/app.rs

use crate::core::knowledge_base;
use crate::core::models::{RiskReport, Severity};
use crate::logging;
use chrono::{DateTime, Local};
use ratatui::widgets::{ListState, ScrollbarState};
use tracing::{error, info, warn};
use url::Url;

/// Frames of the scan spinner, advanced once per tick while Scanning.
pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How many spinner/gauge points the score animation advances per tick.
const SCORE_ANIMATION_STEP: u8 = 4;

/// How many log lines the log panel keeps in memory.
const LOG_TAIL_LINES: usize = 100;

/// How many columns a single left/right key press scrolls the log panel.
const LOG_SCROLL_STEP: usize = 4;

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

// Aggregated view of a finished report for the summary panel: the clamped
// score plus per-severity counts of the triggered findings.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub score: u8,
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub info_issues: usize,
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub state: AppState,
    pub input: String,
    /// The string handed to the scanner, exactly as typed.
    pub target: String,
    pub scan_report: Option<RiskReport>,
    pub finished_at: Option<DateTime<Local>>,
    pub summary: ScanSummary,
    /// Score currently shown by the gauge; animates toward `summary.score`.
    pub displayed_score: u8,
    pub spinner_frame: usize,
    pub analysis_list_state: ListState,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
    pub export_status: ExportStatus,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_disclaimer: true,
            state: AppState::Idle,
            input: String::new(),
            target: String::new(),
            scan_report: None,
            finished_at: None,
            summary: ScanSummary::default(),
            displayed_score: 0,
            spinner_frame: 0,
            analysis_list_state: ListState::default(),
            show_logs: false,
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
            export_status: ExportStatus::Idle,
        }
    }

    /// Moves the app into the Scanning state, freezing the current input as
    /// the scan target. The input is passed through untouched: the scorer's
    /// contract is the raw string, so no scheme normalization happens here.
    pub fn begin_scan(&mut self) {
        self.target = self.input.clone();
        self.state = AppState::Scanning;
        self.spinner_frame = 0;
        self.export_status = ExportStatus::Idle;
        info!(target = %self.target, "Scan requested.");
    }

    /// Stores a finished report and switches to the Finished state.
    pub fn finish_scan(&mut self, report: RiskReport) {
        info!(
            status = %report.status,
            score = report.risk_score,
            "Scan delivered to the UI."
        );
        let has_threats = !report.threats.is_empty();
        self.scan_report = Some(report);
        self.state = AppState::Finished;
        self.finished_at = Some(Local::now());
        self.displayed_score = 0;
        self.update_summary();
        self.analysis_list_state
            .select(has_threats.then_some(0));
        if self.show_logs {
            self.refresh_logs();
        }
    }

    /// Recomputes the per-severity counters from the stored report, looking
    /// each threat's family up in the knowledge base.
    fn update_summary(&mut self) {
        if let Some(report) = &self.scan_report {
            let mut summary = ScanSummary {
                score: report.risk_score,
                ..Default::default()
            };
            for threat in &report.threats {
                match knowledge_base::get_finding_detail(&threat.code).map(|d| d.severity) {
                    Some(Severity::Critical) => summary.critical_issues += 1,
                    Some(Severity::Warning) => summary.warning_issues += 1,
                    Some(Severity::Info) | None => summary.info_issues += 1,
                }
            }
            self.summary = summary;
        }
    }

    /// Per-frame animation: spinner while Scanning, gauge fill once Finished.
    pub fn on_tick(&mut self) {
        match self.state {
            AppState::Scanning => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
            }
            AppState::Finished => {
                if self.displayed_score < self.summary.score {
                    self.displayed_score = self
                        .displayed_score
                        .saturating_add(SCORE_ANIMATION_STEP)
                        .min(self.summary.score);
                }
            }
            AppState::Idle => {}
        }
    }

    pub fn select_next(&mut self) {
        let threat_count = self.scan_report.as_ref().map_or(0, |r| r.threats.len());
        if threat_count == 0 {
            return;
        }
        let next = match self.analysis_list_state.selected() {
            Some(current) => (current + 1).min(threat_count - 1),
            None => 0,
        };
        self.analysis_list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let threat_count = self.scan_report.as_ref().map_or(0, |r| r.threats.len());
        if threat_count == 0 {
            return;
        }
        let previous = match self.analysis_list_state.selected() {
            Some(current) => current.saturating_sub(1),
            None => 0,
        };
        self.analysis_list_state.select(Some(previous));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.refresh_logs();
        }
    }

    /// Re-reads the tail of the log file for the log panel.
    pub fn refresh_logs(&mut self) {
        match std::fs::read_to_string(logging::log_file_path()) {
            Ok(content) => {
                let lines: Vec<String> = content.lines().map(str::to_string).collect();
                let skip = lines.len().saturating_sub(LOG_TAIL_LINES);
                self.log_content = lines[skip..].to_vec();
            }
            Err(e) => {
                warn!(error = %e, "Could not read the log file for the log panel.");
                self.log_content.clear();
            }
        }
        self.log_horizontal_scroll = 0;
        self.log_horizontal_scroll_state = ScrollbarState::default();
    }

    pub fn scroll_log_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(LOG_SCROLL_STEP);
        self.log_horizontal_scroll_state = self
            .log_horizontal_scroll_state
            .position(self.log_horizontal_scroll);
    }

    pub fn scroll_log_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(LOG_SCROLL_STEP);
        self.log_horizontal_scroll_state = self
            .log_horizontal_scroll_state
            .position(self.log_horizontal_scroll);
    }

    /// Writes the finished report to a timestamped JSON file in the current
    /// directory and records the outcome for the footer.
    pub fn export_report(&mut self) {
        let Some(report) = &self.scan_report else {
            self.export_status = ExportStatus::Error("Nothing to export yet.".to_string());
            return;
        };
        let payload = match Self::export_payload(&self.target, report) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Could not serialize the report.");
                self.export_status = ExportStatus::Error(e.to_string());
                return;
            }
        };
        let filename = format!(
            "{}-report-{}.json",
            env!("CARGO_PKG_NAME"),
            Local::now().format("%Y%m%d-%H%M%S")
        );
        match std::fs::write(&filename, payload) {
            Ok(()) => {
                info!(file = %filename, "Report exported.");
                self.export_status = ExportStatus::Success(filename);
            }
            Err(e) => {
                error!(error = %e, file = %filename, "Report export failed.");
                self.export_status = ExportStatus::Error(e.to_string());
            }
        }
    }

    // The exported document is the report object with the scanned URL
    // spliced in at the top level, mirroring the on-screen result.
    fn export_payload(target: &str, report: &RiskReport) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(report)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "url".to_string(),
                serde_json::Value::String(target.to_string()),
            );
        }
        serde_json::to_string_pretty(&value)
    }

    /// Host portion of the target for display purposes only. Falls back to
    /// the raw input when it does not parse as a URL.
    pub fn target_host(&self) -> String {
        Url::parse(&self.target)
            .ok()
            .and_then(|url| url.host_str().map(String::from))
            .unwrap_or_else(|| self.target.clone())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Clears everything scan-related and returns to the Idle state.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.target = String::new();
        self.scan_report = None;
        self.finished_at = None;
        self.summary = ScanSummary::default();
        self.displayed_score = 0;
        self.spinner_frame = 0;
        self.analysis_list_state = ListState::default();
        self.log_horizontal_scroll = 0;
        self.log_horizontal_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::scan_url;

    fn finished_app(url: &str) -> App {
        let mut app = App::new();
        app.input = url.to_string();
        app.begin_scan();
        app.finish_scan(scan_url(url));
        app
    }

    #[test]
    fn summary_counts_by_severity() {
        // IP host is Critical, missing HTTPS is Warning, the keyword is Info.
        let app = finished_app("http://192.168.1.1/login");
        assert_eq!(app.summary.score, 60);
        assert_eq!(app.summary.critical_issues, 1);
        assert_eq!(app.summary.warning_issues, 1);
        assert_eq!(app.summary.info_issues, 1);
    }

    #[test]
    fn clean_scan_selects_nothing() {
        let app = finished_app("https://example.com");
        assert_eq!(app.summary.score, 0);
        assert_eq!(app.analysis_list_state.selected(), None);
    }

    #[test]
    fn finished_scan_selects_first_threat() {
        let app = finished_app("http://192.168.1.1/login");
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[test]
    fn selection_stays_within_threat_list() {
        let mut app = finished_app("http://192.168.1.1/login");
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(2));
        for _ in 0..10 {
            app.select_previous();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[test]
    fn gauge_animation_steps_toward_score_and_stops() {
        let mut app = finished_app("http://secure-login-update.tk");
        assert_eq!(app.displayed_score, 0);
        app.on_tick();
        assert_eq!(app.displayed_score, 4);
        for _ in 0..100 {
            app.on_tick();
        }
        assert_eq!(app.displayed_score, app.summary.score);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut app = finished_app("http://192.168.1.1/login");
        app.reset();
        assert!(matches!(app.state, AppState::Idle));
        assert!(app.scan_report.is_none());
        assert!(app.input.is_empty());
        assert_eq!(app.summary.critical_issues, 0);
        assert_eq!(app.analysis_list_state.selected(), None);
    }

    #[test]
    fn export_payload_carries_url_and_report_keys() {
        let app = finished_app("http://192.168.1.1/login");
        let payload =
            App::export_payload(&app.target, app.scan_report.as_ref().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["url"], "http://192.168.1.1/login");
        assert_eq!(value["status"], "malicious");
        assert_eq!(value["riskScore"], 60);
        assert!(value["threats"].as_array().is_some());
    }

    #[test]
    fn target_host_falls_back_to_raw_input() {
        let mut app = App::new();
        app.target = "https://example.com/path".to_string();
        assert_eq!(app.target_host(), "example.com");
        app.target = "not a url".to_string();
        assert_eq!(app.target_host(), "not a url");
    }
}
