use std::path::Path;

use crate::cli::commands::ReportArgs;
use crate::errors::WardenError;
use crate::reporting::write_report;
use crate::store::{FsResultStore, ResultStore};

pub async fn handle_report(args: ReportArgs) -> Result<(), WardenError> {
    let store = FsResultStore::open(&args.scans_dir).await?;
    let results = store.load_all().await?;

    let path = write_report(&results, Path::new(&args.reports_dir)).await?;
    println!("Report generated: {}", path.display());
    Ok(())
}
