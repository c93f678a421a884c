use serde::{Deserialize, Serialize};

/// Severity bucket for a vulnerability finding, ordered from most to least severe.
///
/// Scanners emit severities as free-form uppercase strings; only these four
/// are counted. Anything else (including "UNKNOWN" or a missing severity) is
/// uncategorized and stays out of the buckets by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All countable severities, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Parses a raw scanner severity string. Returns `None` for anything
    /// outside the four counted buckets.
    pub fn parse(raw: &str) -> Option<Severity> {
        match raw {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// A single vulnerability reported by the scanner for one installed package.
///
/// Field names follow the scanner's JSON vocabulary so stored results stay
/// byte-compatible with raw scanner output. The severity is kept as the raw
/// string; bucketing happens at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: String,

    #[serde(rename = "Severity", default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(rename = "PkgName", default)]
    pub pkg_name: String,

    #[serde(rename = "InstalledVersion", default)]
    pub installed_version: String,
}

impl Finding {
    /// The counted severity bucket for this finding, if it has one.
    pub fn severity_bucket(&self) -> Option<Severity> {
        self.severity.as_deref().and_then(Severity::parse)
    }
}
