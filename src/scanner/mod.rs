pub mod trivy;

pub use trivy::TrivyScanner;
