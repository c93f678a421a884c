use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity};

/// One scanned artifact within a scan (an image layer, an OS package set, a
/// language lockfile). The scanner omits the `Vulnerabilities` key entirely
/// for clean targets, so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResultSection {
    #[serde(rename = "Target", default)]
    pub target: String,

    #[serde(rename = "Vulnerabilities", default)]
    pub vulnerabilities: Vec<Finding>,
}

/// The complete output of scanning one target, grouped into sections.
///
/// Created by the scanner invocation, filtered exactly once, then treated as
/// immutable and persisted as a single self-contained document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(rename = "ArtifactName", default)]
    pub artifact_name: String,

    #[serde(rename = "Results", default)]
    pub results: Vec<ScanResultSection>,
}

impl ScanResult {
    /// Returns the total number of findings across all sections.
    pub fn total_findings(&self) -> usize {
        self.results.iter().map(|s| s.vulnerabilities.len()).sum()
    }

    /// Returns a map of severity bucket to the count of findings in it.
    /// Uncategorized findings are absent from the map.
    pub fn finding_counts(&self) -> HashMap<Severity, usize> {
        let mut counts = HashMap::new();
        for section in &self.results {
            for finding in &section.vulnerabilities {
                if let Some(severity) = finding.severity_bucket() {
                    *counts.entry(severity).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}
