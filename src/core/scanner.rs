// src/core/scanner.rs

use tracing::{debug, info};

use crate::core::models::{RiskReport, ScanDetails, Threat};
use crate::core::rules::HEURISTICS;

/// Scores a URL string against the heuristic table and builds the report.
///
/// The function is pure, total and deterministic: any string is accepted,
/// including ones that are not syntactically valid URLs, and no I/O happens
/// beyond tracing events. The input is lower-cased once and every heuristic
/// row is evaluated against that form, in table order.
///
/// # Arguments
///
/// * `raw_url` - The string to score, exactly as the user submitted it.
///
/// # Returns
///
/// A `RiskReport` with the clamped score, the ordered triggered threats and
/// the fixed technical-details block.
pub fn scan_url(raw_url: &str) -> RiskReport {
    let url = raw_url.to_lowercase();
    info!(url = %url, "Starting URL scan.");

    let mut raw_score: u32 = 0;
    let mut threats: Vec<Threat> = Vec::new();

    // A blank input is nothing to score: the UI never submits one, and an
    // empty string is reported clean rather than flagged as insecure.
    if !url.is_empty() {
        for rule in HEURISTICS {
            if rule.check.matches(&url) {
                debug!(code = rule.code, weight = rule.weight, "Heuristic triggered.");
                raw_score += u32::from(rule.weight);
                threats.push(Threat::new(rule.code, rule.message));
            }
        }
    }

    let details = ScanDetails {
        url_length: format!("{} characters", url.chars().count()),
        ssl_certificate: if url.starts_with("https://") {
            "Valid"
        } else {
            "Invalid"
        }
        .to_string(),
        subdomains: url.matches('.').count().to_string(),
    };

    let report = RiskReport::new(raw_score, threats, details);
    info!(
        score = report.risk_score,
        threats = report.threats.len(),
        "URL scan finished."
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RiskStatus;

    fn messages(report: &RiskReport) -> Vec<&str> {
        report.threats.iter().map(|t| t.message.as_str()).collect()
    }

    #[test]
    fn clean_https_url_scores_zero() {
        let report = scan_url("https://example.com");
        assert_eq!(report.status, RiskStatus::Safe);
        assert_eq!(report.risk_score, 0);
        assert!(report.threats.is_empty());
        assert_eq!(report.details.url_length, "19 characters");
        assert_eq!(report.details.ssl_certificate, "Valid");
        assert_eq!(report.details.subdomains, "1");
    }

    #[test]
    fn keyword_heavy_free_tld_url() {
        // "secure-login-update" carries only two dashes, so the dash rule
        // stays quiet; no HTTPS, three keywords and the .tk extension fire.
        let report = scan_url("http://secure-login-update.tk");
        assert_eq!(report.status, RiskStatus::Malicious);
        assert_eq!(report.risk_score, 95);
        assert_eq!(
            messages(&report),
            vec![
                "Connection not secured with HTTPS",
                "Suspicious keyword detected: \"login\"",
                "Suspicious keyword detected: \"update\"",
                "Suspicious keyword detected: \"secure\"",
                "Suspicious domain extension: .tk",
            ]
        );
    }

    #[test]
    fn ip_host_with_login_path() {
        let report = scan_url("http://192.168.1.1/login");
        assert_eq!(report.status, RiskStatus::Malicious);
        assert_eq!(report.risk_score, 60);
        assert_eq!(
            messages(&report),
            vec![
                "Uses IP address instead of domain",
                "Connection not secured with HTTPS",
                "Suspicious keyword detected: \"login\"",
            ]
        );
    }

    #[test]
    fn long_but_otherwise_clean_url_scores_twenty() {
        // 20 characters of prefix plus 56 padding characters: 76 total.
        let url = format!("https://example.com/{}", "a".repeat(56));
        assert_eq!(url.chars().count(), 76);
        let report = scan_url(&url);
        assert_eq!(report.risk_score, 20);
        assert_eq!(messages(&report), vec!["Unusually long URL"]);
        assert_eq!(report.details.url_length, "76 characters");
    }

    #[test]
    fn every_rule_firing_clamps_to_100() {
        // Hits all eight families at once: long, '@', dashes, IP host, no
        // HTTPS, all seven keywords, dot overload and a flagged extension.
        let url =
            "http://1.2.3.4.login.verify.update.bank.secure-account-free-really-long-label@pad.xyz";
        assert!(url.chars().count() > 75);
        let report = scan_url(url);
        assert_eq!(report.risk_score, 100);
        assert_eq!(report.threats.len(), 14);
        assert_eq!(report.status, RiskStatus::Malicious);
    }

    #[test]
    fn score_is_always_within_bounds() {
        let inputs = [
            "",
            "not a url at all",
            "https://example.com",
            "http://secure-login-update.tk",
            "ftp://bank.account.verify.login.update.free.ru",
        ];
        for input in inputs {
            let report = scan_url(input);
            assert!(report.risk_score <= 100, "input {input:?} broke the clamp");
            assert_eq!(
                report.threats.is_empty(),
                report.status == RiskStatus::Safe,
                "status invariant broken for {input:?}"
            );
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let url = "http://secure-login-update.tk";
        assert_eq!(scan_url(url), scan_url(url));
    }

    #[test]
    fn scoring_is_case_insensitive() {
        let url = "http://Secure-Login-Update.tk";
        assert_eq!(scan_url(url), scan_url(&url.to_uppercase()));
        assert_eq!(scan_url(url), scan_url(&url.to_lowercase()));
    }

    #[test]
    fn empty_input_is_reported_clean() {
        let report = scan_url("");
        assert_eq!(report.status, RiskStatus::Safe);
        assert_eq!(report.risk_score, 0);
        assert!(report.threats.is_empty());
        assert_eq!(report.details.url_length, "0 characters");
        assert_eq!(report.details.ssl_certificate, "Invalid");
        assert_eq!(report.details.subdomains, "0");
    }

    #[test]
    fn subdomain_detail_reports_raw_dot_count() {
        // Two dots: under the threshold, but the detail still shows the
        // actual count.
        let report = scan_url("https://www.example.com");
        assert!(report.threats.is_empty());
        assert_eq!(report.details.subdomains, "2");

        // Five dots: over the threshold, and the detail keeps the raw count.
        let report = scan_url("https://a.b.c.d.example.com");
        assert_eq!(report.details.subdomains, "5");
        assert!(
            report
                .threats
                .iter()
                .any(|t| t.message == "Too many subdomains in URL")
        );
    }

    #[test]
    fn non_url_strings_are_scored_like_urls() {
        let report = scan_url("free bank login, honest");
        assert_eq!(report.status, RiskStatus::Malicious);
        // No HTTPS plus the three keywords.
        assert_eq!(report.risk_score, 50);
        assert_eq!(report.details.ssl_certificate, "Invalid");
    }
}
