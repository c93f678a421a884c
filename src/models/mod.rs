pub mod finding;
pub mod scan_result;
pub mod severity_counts;

pub use finding::*;
pub use scan_result::*;
pub use severity_counts::*;
