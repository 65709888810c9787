//! Dataset integrity validation.
//!
//! Validates the declared invariants of a loaded dataset:
//! - Funnel ordering (Applications >= Admitted >= Enrolled)
//! - Percentage ranges (retention and satisfaction within [0, 100])
//! - Department totals (per-department counts sum <= Enrolled)
//! - Year uniqueness (one row per year)

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::data::StudentRecord;

/// Result of a single validation check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    pub fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    pub fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete integrity report for one dataset.
#[derive(Debug, Serialize)]
pub struct IntegrityReport {
    pub row_count: usize,
    pub checks: Vec<CheckResult>,
}

impl IntegrityReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed_checks(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    pub fn summary(&self) -> String {
        let passed = self.checks.iter().filter(|c| c.passed).count();
        format!(
            "{} rows: {}/{} checks passed",
            self.row_count,
            passed,
            self.checks.len()
        )
    }
}

/// Validator for loaded admissions records.
pub struct RecordValidator;

impl RecordValidator {
    /// Run every integrity check on the dataset.
    ///
    /// Checks never abort the run; each failure is recorded in the
    /// report and logged.
    pub fn validate(records: &[StudentRecord]) -> IntegrityReport {
        let checks = vec![
            Self::check_funnel_ordering(records),
            Self::check_percentage_ranges(records),
            Self::check_department_totals(records),
            Self::check_year_uniqueness(records),
        ];

        for check in &checks {
            if !check.passed {
                warn!(check = %check.name, "{}", check.message);
            }
        }

        IntegrityReport {
            row_count: records.len(),
            checks,
        }
    }

    /// Applications >= Admitted >= Enrolled on every row.
    fn check_funnel_ordering(records: &[StudentRecord]) -> CheckResult {
        let offending: Vec<String> = records
            .iter()
            .filter(|r| !r.funnel_is_ordered())
            .map(|r| r.year.to_string())
            .collect();

        if offending.is_empty() {
            CheckResult::pass(
                "funnel_ordering",
                "Applications >= Admitted >= Enrolled on every row",
            )
        } else {
            CheckResult::fail(
                "funnel_ordering",
                &format!("{} rows with inverted funnel", offending.len()),
                Some(format!("years: {}", offending.join(", "))),
            )
        }
    }

    /// Retention and satisfaction percentages within [0, 100].
    fn check_percentage_ranges(records: &[StudentRecord]) -> CheckResult {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        let offending: Vec<String> = records
            .iter()
            .filter(|r| !in_range(r.retention_rate) || !in_range(r.satisfaction))
            .map(|r| r.year.to_string())
            .collect();

        if offending.is_empty() {
            CheckResult::pass(
                "percentage_ranges",
                "All retention and satisfaction values within [0, 100]",
            )
        } else {
            CheckResult::fail(
                "percentage_ranges",
                &format!("{} rows with out-of-range percentages", offending.len()),
                Some(format!("years: {}", offending.join(", "))),
            )
        }
    }

    /// Per-department enrollment counts sum to at most Enrolled.
    fn check_department_totals(records: &[StudentRecord]) -> CheckResult {
        let offending: Vec<String> = records
            .iter()
            .filter(|r| r.department_total() > r.enrolled)
            .map(|r| {
                format!(
                    "{} ({} departmental vs {} enrolled)",
                    r.year,
                    r.department_total(),
                    r.enrolled
                )
            })
            .collect();

        if offending.is_empty() {
            CheckResult::pass(
                "department_totals",
                "Department enrollments never exceed total enrollment",
            )
        } else {
            CheckResult::fail(
                "department_totals",
                &format!("{} rows with excess department totals", offending.len()),
                Some(offending.join("; ")),
            )
        }
    }

    /// No duplicate years.
    fn check_year_uniqueness(records: &[StudentRecord]) -> CheckResult {
        let mut seen = HashSet::new();
        let duplicates: Vec<String> = records
            .iter()
            .filter(|r| !seen.insert(r.year))
            .map(|r| r.year.to_string())
            .collect();

        if duplicates.is_empty() {
            CheckResult::pass("year_uniqueness", "One row per year")
        } else {
            CheckResult::fail(
                "year_uniqueness",
                &format!("{} duplicated years", duplicates.len()),
                Some(format!("years: {}", duplicates.join(", "))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Term;

    fn record(year: i32) -> StudentRecord {
        StudentRecord {
            year,
            term: Term::Fall,
            applications: 1000,
            admitted: 400,
            enrolled: 150,
            retention_rate: 88.0,
            satisfaction: 79.5,
            engineering_enrolled: 60,
            business_enrolled: 40,
            arts_enrolled: 30,
            science_enrolled: 20,
        }
    }

    #[test]
    fn test_clean_dataset_passes() {
        let records = vec![record(2020), record(2021)];
        let report = RecordValidator::validate(&records);

        assert!(report.all_passed(), "failures: {:?}", report.failed_checks());
        assert_eq!(report.row_count, 2);
        assert_eq!(report.summary(), "2 rows: 4/4 checks passed");
    }

    #[test]
    fn test_inverted_funnel_fails() {
        let mut bad = record(2020);
        bad.admitted = 1200;
        let report = RecordValidator::validate(&[bad]);

        assert!(!report.all_passed());
        let failed = report.failed_checks();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "funnel_ordering");
        assert!(failed[0].details.as_deref().unwrap().contains("2020"));
    }

    #[test]
    fn test_out_of_range_percentage_fails() {
        let mut bad = record(2021);
        bad.satisfaction = 104.0;
        let report = RecordValidator::validate(&[record(2020), bad]);

        let failed = report.failed_checks();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "percentage_ranges");
    }

    #[test]
    fn test_excess_department_total_fails() {
        let mut bad = record(2020);
        bad.engineering_enrolled = 200;
        let report = RecordValidator::validate(&[bad]);

        let failed = report.failed_checks();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "department_totals");
    }

    #[test]
    fn test_duplicate_year_fails() {
        let report = RecordValidator::validate(&[record(2020), record(2020)]);

        let failed = report.failed_checks();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "year_uniqueness");
    }

    #[test]
    fn test_empty_dataset_passes() {
        let report = RecordValidator::validate(&[]);
        assert!(report.all_passed());
        assert_eq!(report.row_count, 0);
    }
}
