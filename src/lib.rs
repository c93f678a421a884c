pub mod cli;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod reporting;
pub mod scanner;
pub mod store;
