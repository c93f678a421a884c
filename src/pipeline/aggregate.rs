use crate::models::{ScanResult, SeverityCounts};

/// Tallies every finding across every section of every result into severity
/// buckets.
///
/// Findings with an unrecognized or missing severity are skipped, not
/// surfaced: the scanner's severity vocabulary drifts between versions and a
/// recount must never fail because of it. Counting is commutative, so the
/// traversal order of results and findings never affects the tally.
pub fn aggregate<'a, I>(results: I) -> SeverityCounts
where
    I: IntoIterator<Item = &'a ScanResult>,
{
    let mut counts = SeverityCounts::default();
    for result in results {
        for section in &result.results {
            for finding in &section.vulnerabilities {
                if let Some(severity) = finding.severity_bucket() {
                    counts.bucket(severity);
                }
            }
        }
    }
    counts
}
