//! This module acts as the central "brain" of the detector.
//! It contains a static, read-only database of every heuristic finding the
//! scanner can raise, complete with detailed, human-readable explanations
//! and practical advice. Making this data-driven allows the detector's
//! intelligence to be updated without touching evaluation logic.

use crate::core::models::Severity;
use std::fmt;

/// Defines the high-level categories for heuristic findings.
/// This is used to group related issues together in the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// Findings about the shape of the URL string itself (length, symbols).
    Structure,
    /// Findings about how the host is addressed (raw IPs, subdomain depth).
    Addressing,
    /// Findings about the transport scheme.
    Transport,
    /// Findings about suspicious words and domain extensions.
    Lexical,
}

/// Implements the `Display` trait to provide a human-friendly name for each
/// category, used for rendering prefixes in the findings list.
impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Structure => write!(f, "URL Structure"),
            FindingCategory::Addressing => write!(f, "Host Addressing"),
            FindingCategory::Transport => write!(f, "Transport Security"),
            FindingCategory::Lexical => write!(f, "Suspicious Content"),
        }
    }
}

/// A struct that holds all the detailed, human-readable information about a
/// specific finding family.
///
/// This is the core data structure of the knowledge base, containing all
/// necessary information to present a finding to a user, including its
/// severity, what the signal means, and what to do about it.
pub struct FindingDetail {
    /// A unique, machine-readable identifier shared by every heuristic row
    /// of the same family (e.g., "SUSPICIOUS_KEYWORD").
    pub code: &'static str,
    /// A short, human-readable title for the finding.
    pub title: &'static str,
    /// The category this finding belongs to.
    pub category: FindingCategory,
    /// The severity level of the finding (Critical, Warning or Info).
    pub severity: Severity,
    /// A detailed but easy-to-understand explanation of what the signal
    /// means and why phishing campaigns rely on it.
    pub description: &'static str,
    /// Clear, actionable advice for the person deciding whether to trust
    /// the link.
    pub remediation: &'static str,
}

/// The centralized, static knowledge base of all heuristic findings.
///
/// This array is the data that drives the report detail pane. Each entry
/// provides the complete context for one rule family's `Threat.code`.
static FINDINGS: &[FindingDetail] = &[
    // --- URL Structure ---
    FindingDetail {
        code: "URL_TOO_LONG",
        title: "Unusually Long URL",
        category: FindingCategory::Structure,
        severity: Severity::Warning,
        description: "Phishing links are often padded with long paths, tracking parameters or encoded payloads. The extra length pushes the real domain out of the visible part of the address bar, so a victim only sees a plausible-looking prefix.",
        remediation: "Read the full address before trusting it, starting from the end of the host portion. If the link arrived in a message, compare the domain against the organization's known address instead of judging by the visible fragment."
    },
    FindingDetail {
        code: "AT_SYMBOL",
        title: "'@' Symbol in URL",
        category: FindingCategory::Structure,
        severity: Severity::Critical,
        description: "In a URL, everything before an '@' is treated as user credentials and silently ignored when resolving the host. Attackers exploit this to show a trusted name up front ('https://yourbank.com@evil.example') while the browser actually visits the part after the '@'.",
        remediation: "Treat any everyday link containing '@' as hostile. The real destination is whatever follows the '@'; verify that part, not the decoy in front of it."
    },
    FindingDetail {
        code: "DASH_OVERLOAD",
        title: "Excessive Hyphens",
        category: FindingCategory::Structure,
        severity: Severity::Warning,
        description: "Legitimate domains rarely chain more than a couple of hyphens. Phishing kits register throwaway names like 'secure-account-verify-now' to smuggle several trusted-sounding words into one domain.",
        remediation: "Be suspicious of hyphen-heavy hosts that read like a sentence. Navigate to the organization directly through a bookmark or search result rather than through the link."
    },
    // --- Host Addressing ---
    FindingDetail {
        code: "IP_HOST",
        title: "IP Address as Host",
        category: FindingCategory::Addressing,
        severity: Severity::Critical,
        description: "Real services are reached by name, not by raw address. A URL pointing straight at a numeric IP usually means a temporary or compromised machine with no DNS record, which is a classic mark of a short-lived phishing page.",
        remediation: "Do not enter credentials or personal data on a page addressed by a bare IP. If the destination is supposed to be a known service, reach it via its regular domain instead."
    },
    FindingDetail {
        code: "SUBDOMAIN_OVERLOAD",
        title: "Too Many Subdomains",
        category: FindingCategory::Addressing,
        severity: Severity::Warning,
        description: "Deeply nested hosts like 'login.secure.yourbank.com.evil.example' use a chain of subdomains to imitate a trusted address. Only the final two labels decide who actually owns the page; everything in front is freely chosen by the attacker.",
        remediation: "Read the host right-to-left: the registered domain sits at the end. If the trusted name appears in the middle of a longer chain, the page belongs to whoever controls the tail, not to the brand being imitated."
    },
    // --- Transport Security ---
    FindingDetail {
        code: "NO_HTTPS",
        title: "No HTTPS",
        category: FindingCategory::Transport,
        severity: Severity::Warning,
        description: "The link does not use HTTPS, so nothing on the page is encrypted or authenticated in transit. Legitimate services have defaulted to HTTPS for years; a plain-HTTP login or payment page is either hostile or dangerously misconfigured.",
        remediation: "Never submit passwords or payment details over plain HTTP. If the site is genuine it will also be reachable at the 'https://' address; use that, or stay away."
    },
    // --- Suspicious Content ---
    FindingDetail {
        code: "SUSPICIOUS_KEYWORD",
        title: "Suspicious Keyword",
        category: FindingCategory::Lexical,
        severity: Severity::Info,
        description: "Words like 'login', 'verify', 'secure' or 'free' are the staple vocabulary of credential-harvesting pages, urging action or borrowing legitimacy. One keyword alone is weak evidence, but each additional match adds its own weight, so keyword-stuffed URLs accumulate a high score quickly.",
        remediation: "Ask why the word is in the address at all. Real services keep such terms in the page, not the domain. The more of these words a single URL carries, the less you should trust it."
    },
    FindingDetail {
        code: "SUSPICIOUS_TLD",
        title: "High-Risk Domain Extension",
        category: FindingCategory::Lexical,
        severity: Severity::Critical,
        description: "Extensions such as .xyz, .top, .tk, .zip and .ru are heavily over-represented in abuse feeds because they are cheap or free to register, making them the default choice for disposable phishing domains.",
        remediation: "Treat unfamiliar domains under these extensions with extra care, especially when they imitate a brand that normally lives under .com or a national TLD. Verify through an independent channel before interacting."
    },
];

/// Retrieves the full detail for a given finding code from the static
/// knowledge base.
///
/// # Arguments
///
/// * `code` - The machine-readable code carried by a `Threat`.
///
/// # Returns
///
/// An `Option` containing a reference to the `FindingDetail` if the code is
/// known, or `None` if the code does not exist in the knowledge base.
pub fn get_finding_detail(code: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|f| f.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::HEURISTICS;

    #[test]
    fn every_heuristic_code_resolves() {
        for rule in HEURISTICS {
            assert!(
                get_finding_detail(rule.code).is_some(),
                "no knowledge-base entry for {}",
                rule.code
            );
        }
    }

    #[test]
    fn severity_tracks_rule_weight() {
        // Families weighted 25 and above are Critical, 15-20 Warning, 10 Info.
        for rule in HEURISTICS {
            let detail = get_finding_detail(rule.code).unwrap();
            let expected = match rule.weight {
                25.. => Severity::Critical,
                15..=24 => Severity::Warning,
                _ => Severity::Info,
            };
            assert_eq!(detail.severity, expected, "family {}", rule.code);
        }
    }

    #[test]
    fn unknown_code_returns_none() {
        assert!(get_finding_detail("NOT_A_RULE").is_none());
    }
}
