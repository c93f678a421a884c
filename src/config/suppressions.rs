use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::WardenError;

/// On-disk shape of the suppression config: `{"ignore_cves": ["CVE-..."]}`.
#[derive(Debug, Deserialize)]
struct SuppressionFile {
    #[serde(default)]
    ignore_cves: Vec<String>,
}

/// The set of vulnerability identifiers excluded from reports and counts
/// (accepted-risk exceptions). Loaded once per invocation, immutable after.
#[derive(Debug, Clone, Default)]
pub struct SuppressionRuleSet {
    ids: HashSet<String>,
}

impl SuppressionRuleSet {
    /// Loads the rule set from a JSON config file. A missing file is not an
    /// error and yields an empty set; a malformed file is a config error
    /// naming the offending path.
    pub async fn load(path: &Path) -> Result<Self, WardenError> {
        if !path.exists() {
            info!(path = %path.display(), "No suppression config, running with empty rule set");
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let file: SuppressionFile = serde_json::from_str(&content).map_err(|e| {
            WardenError::Config(format!(
                "Malformed suppression config {}: {}",
                path.display(),
                e
            ))
        })?;

        let ids: HashSet<String> = file.ignore_cves.into_iter().collect();
        info!(count = ids.len(), path = %path.display(), "Loaded suppression rules");
        Ok(Self { ids })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.ids.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for SuppressionRuleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let rules = SuppressionRuleSet::load(&dir.path().join("exceptions.json"))
            .await
            .unwrap();
        assert!(rules.is_empty());
        assert!(!rules.contains("CVE-2024-0001"));
    }

    #[tokio::test]
    async fn loads_and_collapses_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exceptions.json");
        std::fs::write(
            &path,
            r#"{"ignore_cves": ["CVE-1", "CVE-2", "CVE-1"]}"#,
        )
        .unwrap();

        let rules = SuppressionRuleSet::load(&path).await.unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("CVE-1"));
        assert!(rules.contains("CVE-2"));
        assert!(!rules.contains("CVE-3"));
    }

    #[tokio::test]
    async fn malformed_file_is_a_config_error_naming_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exceptions.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SuppressionRuleSet::load(&path).await.unwrap_err();
        match err {
            WardenError::Config(msg) => assert!(msg.contains("exceptions.json")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exceptions.json");
        std::fs::write(&path, "{}").unwrap();

        let rules = SuppressionRuleSet::load(&path).await.unwrap();
        assert!(rules.is_empty());
    }
}
