pub mod types;

pub use types::{Finding, Severity};
