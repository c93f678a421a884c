use std::path::Path;

use crate::cli::commands::NotifyArgs;
use crate::errors::WardenError;
use crate::notify::SlackNotifier;
use crate::reporting::latest_report;

pub async fn handle_notify(args: NotifyArgs) -> Result<(), WardenError> {
    let report = latest_report(Path::new(&args.reports_dir))
        .await?
        .ok_or_else(|| {
            WardenError::Notification(format!(
                "No reports found in {}; run `vulnwarden report` first",
                args.reports_dir
            ))
        })?;

    let mut notifier = SlackNotifier::from_env()?;
    if let Some(channel) = args.channel {
        notifier = notifier.with_channel(channel);
    }
    notifier.post_report(&report).await?;

    println!("Slack notification sent for {}", report.display());
    Ok(())
}
