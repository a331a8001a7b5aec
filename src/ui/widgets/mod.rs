// src/ui/widgets/mod.rs

// This file serves as the module declaration for all UI widgets.
// By declaring them here, we make them available to the rest of the `ui`
// module and the main application logic.

pub mod analysis_view; // The widget for the threat list and detail pane.
pub mod disclaimer_popup; // The widget for the heuristics notice popup.
pub mod footer; // The widget for the dynamic footer bar.
pub mod input; // The widget for the user input field.
pub mod log_view; // The widget for the log panel.
pub mod summary; // The widget that displays the scan summary.
