//! Dataset analytics module.
//!
//! Provides:
//! - per-column summary statistics (the dataset overview table)
//! - department-level enrollment breakdown
//! - Spring vs Fall term comparison

pub mod breakdown;
pub mod summary;

pub use breakdown::{
    department_breakdown, term_comparison, DepartmentBreakdown, DepartmentShare, TermSummary,
};
pub use summary::{summarize_columns, ColumnSummary};
