use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vulnwarden", version, about = "Container vulnerability scan pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan an image, apply suppressions, and store the filtered result
    Scan(ScanArgs),
    /// Generate an HTML report from all stored scan results
    Report(ReportArgs),
    /// Serve Prometheus gauges recounted from stored scan results
    Metrics(MetricsArgs),
    /// Post the latest report to Slack
    Notify(NotifyArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ScanArgs {
    /// Container image reference to scan (e.g. registry/app:1.2)
    pub image: String,

    /// Directory holding persisted scan results
    #[arg(long, default_value = "./scans")]
    pub scans_dir: String,

    /// Suppression config file (JSON with an ignore_cves list)
    #[arg(long, default_value = "./config/exceptions.json")]
    pub exceptions: String,

    /// Scanner binary to invoke
    #[arg(long, default_value = "trivy")]
    pub scanner: String,

    /// Scan timeout in seconds
    #[arg(long, default_value = "600")]
    pub timeout: u64,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Directory holding persisted scan results
    #[arg(long, default_value = "./scans")]
    pub scans_dir: String,

    /// Output directory for HTML reports
    #[arg(long, default_value = "./reports")]
    pub reports_dir: String,
}

#[derive(Debug, Args, Clone)]
pub struct MetricsArgs {
    /// Directory holding persisted scan results
    #[arg(long, default_value = "./scans")]
    pub scans_dir: String,

    /// Listen port for the /metrics endpoint
    #[arg(long, default_value = "9100")]
    pub port: u16,

    /// Recount interval in seconds
    #[arg(long, default_value = "30")]
    pub interval: u64,
}

#[derive(Debug, Args, Clone)]
pub struct NotifyArgs {
    /// Directory holding generated HTML reports
    #[arg(long, default_value = "./reports")]
    pub reports_dir: String,

    /// Slack channel to post to (or set SLACK_CHANNEL)
    #[arg(long)]
    pub channel: Option<String>,
}
