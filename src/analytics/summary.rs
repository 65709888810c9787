//! Per-column summary statistics.
//!
//! The dataset-overview table: count, mean, sample standard deviation,
//! min, max for every numeric column.

use serde::Serialize;

use crate::data::StudentRecord;
use crate::metrics::NUMERIC_COLUMNS;

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` below two values.
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize every numeric column of the dataset.
///
/// Total for any input; an empty table yields all-`None` statistics.
pub fn summarize_columns(records: &[StudentRecord]) -> Vec<ColumnSummary> {
    NUMERIC_COLUMNS
        .iter()
        .map(|(name, extract)| {
            let values: Vec<f64> = records.iter().map(|r| extract(r)).collect();
            summarize(name, &values)
        })
        .collect()
}

fn summarize(column: &str, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    if count == 0 {
        return ColumnSummary {
            column: column.to_string(),
            count,
            mean: None,
            std_dev: None,
            min: None,
            max: None,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        None
    } else {
        let variance = values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        Some(variance.sqrt())
    };
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    ColumnSummary {
        column: column.to_string(),
        count,
        mean: Some(mean),
        std_dev,
        min: Some(min),
        max: Some(max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Term;

    fn record(year: i32, applications: u32) -> StudentRecord {
        StudentRecord {
            year,
            term: Term::Fall,
            applications,
            admitted: applications / 2,
            enrolled: applications / 5,
            retention_rate: 85.0,
            satisfaction: 78.0,
            engineering_enrolled: 40,
            business_enrolled: 30,
            arts_enrolled: 20,
            science_enrolled: 10,
        }
    }

    #[test]
    fn test_summary_basic_stats() {
        let records = vec![record(2020, 1000), record(2021, 1200), record(2022, 1400)];
        let summaries = summarize_columns(&records);

        let apps = summaries
            .iter()
            .find(|s| s.column == "Applications")
            .unwrap();
        assert_eq!(apps.count, 3);
        assert!((apps.mean.unwrap() - 1200.0).abs() < 1e-9);
        assert!((apps.std_dev.unwrap() - 200.0).abs() < 1e-9);
        assert_eq!(apps.min, Some(1000.0));
        assert_eq!(apps.max, Some(1400.0));
    }

    #[test]
    fn test_summary_covers_all_numeric_columns() {
        let summaries = summarize_columns(&[record(2020, 1000)]);
        assert_eq!(summaries.len(), NUMERIC_COLUMNS.len());
    }

    #[test]
    fn test_summary_single_row_has_no_std_dev() {
        let summaries = summarize_columns(&[record(2020, 1000)]);
        let year = summaries.iter().find(|s| s.column == "Year").unwrap();
        assert_eq!(year.mean, Some(2020.0));
        assert_eq!(year.std_dev, None);
    }

    #[test]
    fn test_summary_empty_table() {
        let summaries = summarize_columns(&[]);
        assert!(summaries.iter().all(|s| s.count == 0 && s.mean.is_none()));
    }
}
