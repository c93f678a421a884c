pub mod aggregate;
pub mod filter;

pub use aggregate::aggregate;
pub use filter::filter;
