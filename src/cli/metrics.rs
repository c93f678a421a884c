use std::time::Duration;

use crate::cli::commands::MetricsArgs;
use crate::errors::WardenError;
use crate::metrics;
use crate::store::FsResultStore;

pub async fn handle_metrics(args: MetricsArgs) -> Result<(), WardenError> {
    let store = FsResultStore::open(&args.scans_dir).await?;
    metrics::serve(store, args.port, Duration::from_secs(args.interval)).await
}
