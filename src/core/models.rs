// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::Display;

// --- Core Data Models ---

// An enumeration representing the severity level of a triggered heuristic.
// Severity is presentation metadata owned by the knowledge base; it never
// feeds the numeric risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

// The overall verdict of a URL scan. A scan is `Malicious` as soon as a
// single heuristic fires; otherwise it is `Safe`.
// Serializes in lowercase ("safe"/"malicious") to match the exported report
// format, and displays in uppercase (SAFE/MALICIOUS) for the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskStatus {
    Safe,
    Malicious,
}

// A single triggered heuristic, carrying the machine-readable rule code
// (the knowledge-base key) and the human-readable threat message shown to
// the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Threat {
    pub code: String,
    pub message: String,
}

impl Threat {
    // A constructor function to create a new `Threat` instance.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

// The fixed technical-details block of a report. Field names serialize
// under the camelCase keys of the exported JSON format.
// `subdomains` holds the raw '.' count of the input, unclamped and
// independent of the subdomain heuristic's threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScanDetails {
    pub url_length: String,
    pub ssl_certificate: String,
    pub subdomains: String,
}

// --- Main Report ---

// The complete result of scoring one URL string. Constructed fresh on each
// scan and never mutated afterwards.
//
// Invariants: `risk_score == min(100, sum of triggered weights)` and
// `threats.is_empty() <=> status == Safe`. Both are enforced by the
// constructor below, which is the only way the scanner builds a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub status: RiskStatus,
    pub risk_score: u8,
    pub threats: Vec<Threat>,
    pub details: ScanDetails,
}

impl RiskReport {
    // Builds a report from the accumulated raw weight sum and the ordered
    // list of triggered threats, deriving the status and clamping the score.
    pub fn new(raw_score: u32, threats: Vec<Threat>, details: ScanDetails) -> Self {
        let status = if threats.is_empty() {
            RiskStatus::Safe
        } else {
            RiskStatus::Malicious
        };
        Self {
            status,
            risk_score: raw_score.min(100) as u8,
            threats,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ScanDetails {
        ScanDetails {
            url_length: "19 characters".to_string(),
            ssl_certificate: "Valid".to_string(),
            subdomains: "1".to_string(),
        }
    }

    #[test]
    fn status_derived_from_threats() {
        let clean = RiskReport::new(0, Vec::new(), details());
        assert_eq!(clean.status, RiskStatus::Safe);

        let flagged = RiskReport::new(
            20,
            vec![Threat::new("NO_HTTPS", "Connection not secured with HTTPS")],
            details(),
        );
        assert_eq!(flagged.status, RiskStatus::Malicious);
    }

    #[test]
    fn score_clamped_to_100() {
        let threats = vec![Threat::new("AT_SYMBOL", "x"), Threat::new("IP_HOST", "y")];
        let report = RiskReport::new(220, threats, details());
        assert_eq!(report.risk_score, 100);
    }

    #[test]
    fn report_serializes_with_original_keys() {
        let report = RiskReport::new(
            20,
            vec![Threat::new("NO_HTTPS", "Connection not secured with HTTPS")],
            ScanDetails {
                url_length: "18 characters".to_string(),
                ssl_certificate: "Invalid".to_string(),
                subdomains: "1".to_string(),
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "malicious");
        assert_eq!(json["riskScore"], 20);
        assert_eq!(json["details"]["urlLength"], "18 characters");
        assert_eq!(json["details"]["sslCertificate"], "Invalid");
        assert_eq!(json["details"]["subdomains"], "1");
    }

    #[test]
    fn status_displays_uppercase() {
        assert_eq!(RiskStatus::Safe.to_string(), "SAFE");
        assert_eq!(RiskStatus::Malicious.to_string(), "MALICIOUS");
    }
}
