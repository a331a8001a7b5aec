// src/core/mod.rs

// This makes the `models`, `rules`, `scanner` and `knowledge_base` modules
// available to other parts of the application. The `mod.rs` file acts as the
// root of the `core` module, exposing its sub-modules to the crate.

/// Contains all data structures and models used throughout the application,
/// such as `RiskReport`, `RiskStatus`, `Threat` and `Severity`.
pub mod models;

/// The ordered, data-driven table of heuristic rules that drives scoring.
pub mod rules;

/// Houses the core scoring logic: the pure evaluation of a URL string
/// against the heuristic table.
pub mod scanner;

/// Contains the static database of finding explanations and advice keyed by
/// rule code. It acts as a repository of known phishing signals.
pub mod knowledge_base;
