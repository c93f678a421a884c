pub mod commands;
pub mod metrics;
pub mod notify;
pub mod report;
pub mod scan;

pub use commands::{Cli, Commands};
