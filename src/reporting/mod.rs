pub mod html;

pub use html::render_report;

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::errors::WardenError;
use crate::models::ScanResult;

/// Renders and writes a timestamped HTML report into `reports_dir`, returning
/// the path of the new report file.
pub async fn write_report(
    results: &[ScanResult],
    reports_dir: &Path,
) -> Result<PathBuf, WardenError> {
    tokio::fs::create_dir_all(reports_dir).await.map_err(|e| {
        WardenError::Persistence(format!("create {}: {}", reports_dir.display(), e))
    })?;

    let now = Local::now();
    let html = render_report(results, now);
    let path = reports_dir.join(format!("vuln_report_{}.html", now.format("%Y-%m-%d_%H-%M-%S")));
    tokio::fs::write(&path, &html)
        .await
        .map_err(|e| WardenError::Persistence(format!("write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), targets = results.len(), "Report generated");
    Ok(path)
}

/// Finds the most recently modified report in `reports_dir`, if any.
pub async fn latest_report(reports_dir: &Path) -> Result<Option<PathBuf>, WardenError> {
    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;

    let mut entries = match tokio::fs::read_dir(reports_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(WardenError::Persistence(format!(
                "list {}: {}",
                reports_dir.display(),
                e
            )))
        }
    };

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !(name.starts_with("vuln_report_") && name.ends_with(".html")) {
            continue;
        }
        let modified = entry.metadata().await?.modified()?;
        if latest.as_ref().map_or(true, |(ts, _)| modified > *ts) {
            latest = Some((modified, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
