//! Derived admissions metrics.
//!
//! Computes the per-year rate columns of the funnel table:
//! - Admission Rate (%) = Admitted / Applications x 100
//! - Enrollment Rate (%) = Enrolled / Admitted x 100
//! - Overall Enrollment Rate (%) = Enrolled / Applications x 100

use serde::Serialize;

use crate::data::StudentRecord;

use super::correlation::{self, CorrelationMatrix, MetricsError};

/// One year of funnel data with its derived rate columns.
///
/// A rate is `None` when its denominator is zero: the value is undefined,
/// not 0. Text output renders it as `n/a`, JSON as `null`, and aggregates
/// skip it.
#[derive(Debug, Clone, Serialize)]
pub struct RateRow {
    #[serde(flatten)]
    pub record: StudentRecord,

    /// Admitted / Applications x 100.
    #[serde(rename = "Admission Rate (%)")]
    pub admission_rate: Option<f64>,

    /// Enrolled / Admitted x 100.
    #[serde(rename = "Enrollment Rate (%)")]
    pub enrollment_rate: Option<f64>,

    /// Enrolled / Applications x 100.
    #[serde(rename = "Overall Enrollment Rate (%)")]
    pub overall_enrollment_rate: Option<f64>,
}

/// Metrics calculator.
///
/// Both operations are pure functions of the input table; nothing is
/// retained between invocations and the input is never mutated.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Calculate per-year rate columns, sorted ascending by year.
    ///
    /// The sort is stable, so rows sharing a year keep their input order.
    /// Every input row appears exactly once in the output.
    pub fn yearly_rates(records: &[StudentRecord]) -> Vec<RateRow> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.year);

        sorted
            .into_iter()
            .map(|record| {
                let admission_rate = pct(record.admitted, record.applications);
                let enrollment_rate = pct(record.enrolled, record.admitted);
                let overall_enrollment_rate = pct(record.enrolled, record.applications);
                RateRow {
                    record,
                    admission_rate,
                    enrollment_rate,
                    overall_enrollment_rate,
                }
            })
            .collect()
    }

    /// Pairwise Pearson correlation over all numeric columns.
    ///
    /// Fails with [`MetricsError::InsufficientData`] on fewer than two
    /// rows; independent of [`Self::yearly_rates`], which still succeeds
    /// on the same input.
    pub fn correlation_matrix(
        records: &[StudentRecord],
    ) -> Result<CorrelationMatrix, MetricsError> {
        correlation::compute(records)
    }
}

/// Percentage of `part` in `whole`; undefined when `whole` is zero.
fn pct(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}
