//! Validation module for the admissions dataset.
//!
//! Checks the dataset's declared invariants after loading; failures are
//! reported per check, never as aborts.

pub mod integrity;

pub use integrity::{CheckResult, IntegrityReport, RecordValidator};
