pub mod suppressions;

pub use suppressions::SuppressionRuleSet;
