pub mod fs;

pub use fs::FsResultStore;

use async_trait::async_trait;

use crate::errors::WardenError;
use crate::models::ScanResult;

/// Abstract store of persisted scan results, one self-contained entry per
/// scanned target. Keeps the filter and aggregation logic independent of the
/// flat-file layout underneath.
#[async_trait]
pub trait ResultStore {
    /// Stores one result under its identifier, replacing any previous entry.
    /// The write must be atomic: readers never observe a partial entry.
    async fn put(&self, id: &str, result: &ScanResult) -> Result<(), WardenError>;

    /// Loads one result by identifier.
    async fn get(&self, id: &str) -> Result<ScanResult, WardenError>;

    /// Lists the identifiers of all stored results.
    async fn list(&self) -> Result<Vec<String>, WardenError>;

    /// Loads every stored result. Entries that fail to parse are skipped
    /// with a warning: a concurrent writer may be mid-rename and one bad
    /// file must not poison a whole recount.
    async fn load_all(&self) -> Result<Vec<ScanResult>, WardenError>;
}

/// Derives a store identifier from a scanned target reference by normalizing
/// the path and tag separators, e.g. `registry/app:1.2` -> `registry_app_1.2`.
pub fn result_id(target: &str) -> String {
    target.replace(['/', ':'], "_")
}
