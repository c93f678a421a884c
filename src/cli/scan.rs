use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::cli::commands::ScanArgs;
use crate::config::SuppressionRuleSet;
use crate::errors::WardenError;
use crate::pipeline::filter;
use crate::scanner::TrivyScanner;
use crate::store::{FsResultStore, ResultStore};

pub async fn handle_scan(args: ScanArgs) -> Result<(), WardenError> {
    let rules = SuppressionRuleSet::load(Path::new(&args.exceptions)).await?;
    info!(image = %args.image, suppressed = rules.len(), "Scanning");

    let scanner = TrivyScanner::with_program(&args.scanner);
    let raw = scanner
        .scan(&args.image, Duration::from_secs(args.timeout))
        .await?;
    let before = raw.total_findings();

    let filtered = filter(raw, &rules);

    let store = FsResultStore::open(&args.scans_dir).await?;
    store.put(&args.image, &filtered).await?;

    println!(
        "Scan complete: {} findings ({} suppressed). Filtered result stored in {}",
        filtered.total_findings(),
        before - filtered.total_findings(),
        args.scans_dir,
    );
    Ok(())
}
