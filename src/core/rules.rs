// src/core/rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

// Statically compiled pattern for the dotted-quad host heuristic: an http or
// https scheme followed directly by four groups of 1-3 digits. Octet ranges
// are deliberately not validated, so 999.999.999.999 still matches.
static IP_HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap());

/// Defines the different kinds of checks a heuristic can perform.
/// Every check runs against the already lower-cased input string.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// The character count of the whole input exceeds the limit.
    LengthOver(usize),
    /// The input contains the given character anywhere.
    ContainsChar(char),
    /// The input contains more than `limit` occurrences of the character.
    CharCountOver(char, usize),
    /// The input matches the dotted-quad host pattern.
    IpHost,
    /// The input does not start with the given prefix.
    MissingPrefix(&'static str),
    /// The input contains the given substring.
    ContainsWord(&'static str),
    /// The input ends with the given suffix.
    EndsWith(&'static str),
}

impl Check {
    /// Evaluates the check against a lower-cased URL string.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Check::LengthOver(limit) => url.chars().count() > *limit,
            Check::ContainsChar(c) => url.contains(*c),
            Check::CharCountOver(c, limit) => url.matches(*c).count() > *limit,
            Check::IpHost => IP_HOST_PATTERN.is_match(url),
            Check::MissingPrefix(prefix) => !url.starts_with(prefix),
            Check::ContainsWord(word) => url.contains(word),
            Check::EndsWith(suffix) => url.ends_with(suffix),
        }
    }
}

/// A single row of the heuristic table.
pub struct Heuristic {
    /// The knowledge-base key shared by all rows of the same rule family.
    pub code: &'static str,
    /// The specific check to perform.
    pub check: Check,
    /// The weight this row adds to the raw score when it fires.
    pub weight: u8,
    /// The exact threat message appended to the report.
    pub message: &'static str,
}

/// The ordered heuristic table that drives scoring.
///
/// Row order is evaluation order, and therefore the order threats appear in
/// a report. The keyword and domain-extension families are expanded to one
/// row per entry: each row fires at most once, and a URL hitting several
/// keywords accumulates weight once per hit.
pub static HEURISTICS: &[Heuristic] = &[
    Heuristic {
        code: "URL_TOO_LONG",
        check: Check::LengthOver(75),
        weight: 20,
        message: "Unusually long URL",
    },
    Heuristic {
        code: "AT_SYMBOL",
        check: Check::ContainsChar('@'),
        weight: 25,
        message: "Contains '@' symbol (possible redirect trick)",
    },
    Heuristic {
        code: "DASH_OVERLOAD",
        check: Check::CharCountOver('-', 3),
        weight: 15,
        message: "Too many '-' characters in domain",
    },
    Heuristic {
        code: "IP_HOST",
        check: Check::IpHost,
        weight: 30,
        message: "Uses IP address instead of domain",
    },
    Heuristic {
        code: "NO_HTTPS",
        check: Check::MissingPrefix("https://"),
        weight: 20,
        message: "Connection not secured with HTTPS",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("login"),
        weight: 10,
        message: "Suspicious keyword detected: \"login\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("verify"),
        weight: 10,
        message: "Suspicious keyword detected: \"verify\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("update"),
        weight: 10,
        message: "Suspicious keyword detected: \"update\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("bank"),
        weight: 10,
        message: "Suspicious keyword detected: \"bank\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("secure"),
        weight: 10,
        message: "Suspicious keyword detected: \"secure\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("account"),
        weight: 10,
        message: "Suspicious keyword detected: \"account\"",
    },
    Heuristic {
        code: "SUSPICIOUS_KEYWORD",
        check: Check::ContainsWord("free"),
        weight: 10,
        message: "Suspicious keyword detected: \"free\"",
    },
    Heuristic {
        code: "SUBDOMAIN_OVERLOAD",
        check: Check::CharCountOver('.', 4),
        weight: 15,
        message: "Too many subdomains in URL",
    },
    Heuristic {
        code: "SUSPICIOUS_TLD",
        check: Check::EndsWith(".xyz"),
        weight: 25,
        message: "Suspicious domain extension: .xyz",
    },
    Heuristic {
        code: "SUSPICIOUS_TLD",
        check: Check::EndsWith(".top"),
        weight: 25,
        message: "Suspicious domain extension: .top",
    },
    Heuristic {
        code: "SUSPICIOUS_TLD",
        check: Check::EndsWith(".tk"),
        weight: 25,
        message: "Suspicious domain extension: .tk",
    },
    Heuristic {
        code: "SUSPICIOUS_TLD",
        check: Check::EndsWith(".zip"),
        weight: 25,
        message: "Suspicious domain extension: .zip",
    },
    Heuristic {
        code: "SUSPICIOUS_TLD",
        check: Check::EndsWith(".ru"),
        weight: 25,
        message: "Suspicious domain extension: .ru",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_single_fire_check() {
        // 5 structural rules + 7 keywords + 1 subdomain rule + 5 extensions.
        assert_eq!(HEURISTICS.len(), 18);
    }

    #[test]
    fn ip_host_accepts_unvalidated_octets() {
        assert!(Check::IpHost.matches("http://192.168.1.1/login"));
        assert!(Check::IpHost.matches("https://10.0.0.1"));
        assert!(Check::IpHost.matches("http://999.999.999.999"));
    }

    #[test]
    fn ip_host_rejects_wide_octets_and_plain_domains() {
        assert!(!Check::IpHost.matches("http://1234.1.1.1"));
        assert!(!Check::IpHost.matches("https://example.com"));
        // The pattern is scheme-anchored, not string-anchored.
        assert!(Check::IpHost.matches("redirect to http://1.2.3.4/path"));
    }

    #[test]
    fn char_count_check_is_strictly_greater() {
        let three_dashes = "http://a-b-c-d.com";
        assert!(!Check::CharCountOver('-', 3).matches(three_dashes));
        let four_dashes = "http://a-b-c-d-e.com";
        assert!(Check::CharCountOver('-', 3).matches(four_dashes));
    }

    #[test]
    fn length_check_counts_characters() {
        let exactly_75: String = "a".repeat(75);
        assert!(!Check::LengthOver(75).matches(&exactly_75));
        let over: String = "a".repeat(76);
        assert!(Check::LengthOver(75).matches(&over));
    }

    #[test]
    fn missing_prefix_fires_on_anything_but_https() {
        assert!(Check::MissingPrefix("https://").matches("http://example.com"));
        assert!(Check::MissingPrefix("https://").matches("example.com"));
        assert!(!Check::MissingPrefix("https://").matches("https://example.com"));
    }

    #[test]
    fn keyword_rows_keep_source_order() {
        let keywords: Vec<&str> = HEURISTICS
            .iter()
            .filter_map(|rule| match rule.check {
                Check::ContainsWord(word) => Some(word),
                _ => None,
            })
            .collect();
        assert_eq!(
            keywords,
            ["login", "verify", "update", "bank", "secure", "account", "free"]
        );
    }

    #[test]
    fn extension_rows_keep_source_order() {
        let suffixes: Vec<&str> = HEURISTICS
            .iter()
            .filter_map(|rule| match rule.check {
                Check::EndsWith(suffix) => Some(suffix),
                _ => None,
            })
            .collect();
        assert_eq!(suffixes, [".xyz", ".top", ".tk", ".zip", ".ru"]);
    }
}
