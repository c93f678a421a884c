use crate::config::SuppressionRuleSet;
use crate::models::ScanResult;

/// Removes every finding whose identifier appears in the rule set.
///
/// Pure: the caller persists the returned result. Sections are kept even when
/// emptied so the report still records that the target was scanned. The
/// relative order of surviving findings is preserved, and filtering an
/// already-filtered result with the same rules is a no-op.
pub fn filter(mut result: ScanResult, rules: &SuppressionRuleSet) -> ScanResult {
    for section in &mut result.results {
        section
            .vulnerabilities
            .retain(|finding| !rules.contains(&finding.vulnerability_id));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, ScanResultSection};

    fn finding(id: &str, severity: &str) -> Finding {
        Finding {
            vulnerability_id: id.to_string(),
            severity: Some(severity.to_string()),
            pkg_name: "pkg".to_string(),
            installed_version: "1.0".to_string(),
        }
    }

    fn sample_result() -> ScanResult {
        ScanResult {
            artifact_name: "registry/app:1.2".to_string(),
            results: vec![
                ScanResultSection {
                    target: "os packages".to_string(),
                    vulnerabilities: vec![
                        finding("CVE-1", "CRITICAL"),
                        finding("CVE-2", "LOW"),
                        finding("CVE-3", "HIGH"),
                    ],
                },
                ScanResultSection {
                    target: "app/Cargo.lock".to_string(),
                    vulnerabilities: vec![finding("CVE-1", "CRITICAL")],
                },
            ],
        }
    }

    #[test]
    fn removes_only_suppressed_findings() {
        let rules: SuppressionRuleSet = ["CVE-1".to_string()].into_iter().collect();
        let filtered = filter(sample_result(), &rules);

        let remaining: Vec<&str> = filtered
            .results
            .iter()
            .flat_map(|s| s.vulnerabilities.iter())
            .map(|f| f.vulnerability_id.as_str())
            .collect();
        assert_eq!(remaining, vec!["CVE-2", "CVE-3"]);
    }

    #[test]
    fn emptied_sections_are_kept() {
        let rules: SuppressionRuleSet = ["CVE-1".to_string()].into_iter().collect();
        let filtered = filter(sample_result(), &rules);
        assert_eq!(filtered.results.len(), 2);
        assert!(filtered.results[1].vulnerabilities.is_empty());
    }

    #[test]
    fn preserves_order_of_survivors() {
        let rules: SuppressionRuleSet = ["CVE-2".to_string()].into_iter().collect();
        let filtered = filter(sample_result(), &rules);
        let ids: Vec<&str> = filtered.results[0]
            .vulnerabilities
            .iter()
            .map(|f| f.vulnerability_id.as_str())
            .collect();
        assert_eq!(ids, vec!["CVE-1", "CVE-3"]);
    }

    #[test]
    fn empty_rule_set_is_identity() {
        let rules = SuppressionRuleSet::default();
        assert_eq!(filter(sample_result(), &rules), sample_result());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rules: SuppressionRuleSet = ["CVE-1".to_string(), "CVE-3".to_string()]
            .into_iter()
            .collect();
        let once = filter(sample_result(), &rules);
        let twice = filter(once.clone(), &rules);
        assert_eq!(once, twice);
    }
}
