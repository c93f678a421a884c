use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::WardenError;
use crate::models::ScanResult;

/// Invocation wrapper around the external `trivy` binary.
///
/// One blocking call per scan, bounded by the caller's timeout. No retry at
/// this layer; if retrying makes sense it belongs to the caller.
pub struct TrivyScanner {
    program: String,
}

impl TrivyScanner {
    pub fn new() -> Self {
        Self::with_program("trivy")
    }

    /// Overrides the scanner binary; used to point tests at a stub.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Scans one image and parses the JSON payload into a [`ScanResult`].
    ///
    /// Non-zero exit surfaces as `ScanExecution` with the exit status and
    /// captured stderr; a payload that does not match the expected shape
    /// surfaces as `ScanParse`.
    pub async fn scan(&self, image: &str, timeout: Duration) -> Result<ScanResult, WardenError> {
        if image.trim().is_empty() {
            return Err(WardenError::InvalidTarget("empty image reference".into()));
        }

        debug!(image = %image, program = %self.program, "Invoking scanner");

        let child = Command::new(&self.program)
            .args(["image", "--quiet", "--format", "json", image])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                WardenError::Timeout(format!(
                    "Scan of {} timed out after {}s",
                    image,
                    timeout.as_secs()
                ))
            })??;

        if !output.status.success() {
            return Err(WardenError::ScanExecution {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let result: ScanResult = serde_json::from_slice(&output.stdout)
            .map_err(|e| WardenError::ScanParse(format!("scan of {image}: {e}")))?;

        info!(
            image = %image,
            sections = result.results.len(),
            findings = result.total_findings(),
            "Scan completed"
        );
        Ok(result)
    }
}

impl Default for TrivyScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn stub_scanner(dir: &TempDir, body: &str) -> TrivyScanner {
        let path = dir.path().join("trivy-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        TrivyScanner::with_program(path.to_str().unwrap())
    }

    #[tokio::test]
    async fn parses_well_formed_payload() {
        let dir = TempDir::new().unwrap();
        let scanner = stub_scanner(
            &dir,
            r#"echo '{"ArtifactName":"alpine:3.19","Results":[{"Target":"os","Vulnerabilities":[{"VulnerabilityID":"CVE-1","Severity":"HIGH","PkgName":"busybox","InstalledVersion":"1.36"}]}]}'"#,
        );

        let result = scanner
            .scan("alpine:3.19", Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(result.artifact_name, "alpine:3.19");
        assert_eq!(result.total_findings(), 1);
    }

    #[tokio::test]
    async fn non_zero_exit_carries_status_and_stderr() {
        let dir = TempDir::new().unwrap();
        let scanner = stub_scanner(&dir, "echo 'image not found' >&2; exit 3");

        let err = scanner
            .scan("missing:latest", Duration::from_secs(10))
            .await
            .unwrap_err();
        match err {
            WardenError::ScanExecution { status, stderr } => {
                assert_eq!(status, 3);
                assert!(stderr.contains("image not found"));
            }
            other => panic!("expected ScanExecution, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let scanner = stub_scanner(&dir, "echo 'not json at all'");

        let err = scanner
            .scan("alpine:3.19", Duration::from_secs(10))
            .await
            .unwrap_err();
        assert!(matches!(err, WardenError::ScanParse(_)));
    }

    #[tokio::test]
    async fn slow_scanner_times_out() {
        let dir = TempDir::new().unwrap();
        let scanner = stub_scanner(&dir, "sleep 5; echo '{}'");

        let err = scanner
            .scan("alpine:3.19", Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, WardenError::Timeout(_)));
    }

    #[tokio::test]
    async fn empty_image_reference_is_rejected() {
        let scanner = TrivyScanner::new();
        let err = scanner.scan("  ", Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, WardenError::InvalidTarget(_)));
    }
}
