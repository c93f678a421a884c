use clap::Parser;
use tracing_subscriber::EnvFilter;

use vulnwarden::{cli, errors};

#[tokio::main]
async fn main() {
    // Usage errors (missing image, unknown flag) exit 1 with the usage
    // message; --help and --version exit 0.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Scan(args) => cli::scan::handle_scan(args).await,
        cli::Commands::Report(args) => cli::report::handle_report(args).await,
        cli::Commands::Metrics(args) => cli::metrics::handle_metrics(args).await,
        cli::Commands::Notify(args) => cli::notify::handle_notify(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::WardenError::Config(_) => 2,
                errors::WardenError::ScanExecution { .. } => 3,
                errors::WardenError::ScanParse(_) => 4,
                errors::WardenError::Persistence(_) => 5,
                errors::WardenError::Notification(_) => 6,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
