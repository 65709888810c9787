pub mod analytics;
pub mod data;
pub mod metrics;
pub mod validation;

// Re-export commonly used types
pub use analytics::{ColumnSummary, DepartmentBreakdown, DepartmentShare, TermSummary};
pub use data::{DataLoader, Department, LoaderError, StudentRecord, Term, EXPECTED_COLUMNS};
pub use metrics::{CorrelationMatrix, MetricsCalculator, MetricsError, RateRow};
pub use validation::{CheckResult, IntegrityReport, RecordValidator};
