pub mod exporter;

pub use exporter::{build_router, refresh, serve, shared_counts, SharedCounts};
