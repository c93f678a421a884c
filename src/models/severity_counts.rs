use serde::{Deserialize, Serialize};

use super::finding::Severity;

/// Aggregated tally of findings per severity bucket.
///
/// Always derived from stored scan results, never persisted as a source of
/// truth. The sum of the four fields equals the number of categorized
/// findings that went into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl SeverityCounts {
    /// Adds one finding to the named bucket.
    pub fn bucket(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low
    }

    /// Bucket-wise sum with another tally.
    pub fn merge(&self, other: &SeverityCounts) -> SeverityCounts {
        SeverityCounts {
            critical: self.critical + other.critical,
            high: self.high + other.high,
            medium: self.medium + other.medium,
            low: self.low + other.low,
        }
    }
}
