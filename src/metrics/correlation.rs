//! Pearson correlation across the dataset's numeric columns.
//!
//! Term is categorical and excluded; Year participates as numeric,
//! matching the feature-correlation heatmap's column selection.

use serde::Serialize;
use thiserror::Error;

use crate::data::StudentRecord;

/// Numeric columns participating in the correlation matrix, with their
/// value extractors.
pub const NUMERIC_COLUMNS: &[(&str, fn(&StudentRecord) -> f64)] = &[
    ("Year", |r| r.year as f64),
    ("Applications", |r| r.applications as f64),
    ("Admitted", |r| r.admitted as f64),
    ("Enrolled", |r| r.enrolled as f64),
    ("Retention Rate (%)", |r| r.retention_rate),
    ("Student Satisfaction (%)", |r| r.satisfaction),
    ("Engineering Enrolled", |r| r.engineering_enrolled as f64),
    ("Business Enrolled", |r| r.business_enrolled as f64),
    ("Arts Enrolled", |r| r.arts_enrolled as f64),
    ("Science Enrolled", |r| r.science_enrolled as f64),
];

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("need at least {required} rows for correlation, got {rows}")]
    InsufficientData { rows: usize, required: usize },
}

/// Pairwise Pearson correlation matrix over the numeric columns.
///
/// Symmetric; diagonal is `Some(1.0)` for any column with nonzero
/// variance. `None` marks an undefined coefficient: a constant column
/// has no defined correlation with anything, itself included.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Coefficient for a pair of column names. `None` for an unknown
    /// column or an undefined coefficient.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    /// Row of coefficients in column order.
    pub fn row(&self, i: usize) -> &[Option<f64>] {
        &self.values[i]
    }

    /// Number of columns (the matrix is square).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Minimum rows for a defined correlation.
const MIN_ROWS: usize = 2;

/// Compute the correlation matrix over all rows.
pub fn compute(records: &[StudentRecord]) -> Result<CorrelationMatrix, MetricsError> {
    if records.len() < MIN_ROWS {
        return Err(MetricsError::InsufficientData {
            rows: records.len(),
            required: MIN_ROWS,
        });
    }

    let series: Vec<Vec<f64>> = NUMERIC_COLUMNS
        .iter()
        .map(|(_, extract)| records.iter().map(|r| extract(r)).collect())
        .collect();
    let columns: Vec<String> = NUMERIC_COLUMNS
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect();

    let n = columns.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Pearson correlation coefficient of two equal-length series.
///
/// `None` when either series has (near-)zero variance. Clamped to
/// [-1, 1] against floating-point drift.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = (denom_x * denom_y).sqrt();
    if denom < f64::EPSILON {
        None
    } else {
        Some((num / denom).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Term;

    fn record(year: i32, applications: u32, enrolled: u32, satisfaction: f64) -> StudentRecord {
        StudentRecord {
            year,
            term: Term::Fall,
            applications,
            admitted: applications / 2,
            enrolled,
            retention_rate: 85.0, // constant across fixtures
            satisfaction,
            engineering_enrolled: enrolled / 2,
            business_enrolled: enrolled / 4,
            arts_enrolled: enrolled / 8,
            science_enrolled: enrolled / 8,
        }
    }

    fn fixture() -> Vec<StudentRecord> {
        vec![
            record(2019, 900, 120, 76.0),
            record(2020, 1000, 150, 78.5),
            record(2021, 1200, 200, 80.0),
            record(2022, 1150, 190, 79.0),
        ]
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let r = pearson(&xs, &ys).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [4.0, 3.0, 2.0, 1.0];
        let r = pearson(&xs, &ys).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_constant_series_undefined() {
        let xs = [5.0, 5.0, 5.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&xs, &ys), None);
    }

    #[test]
    fn test_matrix_symmetry() {
        let matrix = compute(&fixture()).unwrap();
        for a in matrix.columns() {
            for b in matrix.columns() {
                assert_eq!(matrix.get(a, b), matrix.get(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_matrix_diagonal_is_one() {
        let matrix = compute(&fixture()).unwrap();
        for col in matrix.columns() {
            if col == "Retention Rate (%)" {
                continue; // constant in the fixture
            }
            let r = matrix.get(col, col).unwrap();
            assert!((r - 1.0).abs() < 1e-9, "{col} diagonal was {r}");
        }
    }

    #[test]
    fn test_constant_column_is_undefined() {
        let matrix = compute(&fixture()).unwrap();
        assert_eq!(matrix.get("Retention Rate (%)", "Retention Rate (%)"), None);
        assert_eq!(matrix.get("Retention Rate (%)", "Applications"), None);
    }

    #[test]
    fn test_coefficients_in_range() {
        let matrix = compute(&fixture()).unwrap();
        for i in 0..matrix.len() {
            for r in matrix.row(i).iter().flatten() {
                assert!((-1.0..=1.0).contains(r));
            }
        }
    }

    #[test]
    fn test_single_row_insufficient() {
        let err = compute(&fixture()[..1]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::InsufficientData { rows: 1, required: 2 }
        ));
    }

    #[test]
    fn test_term_excluded() {
        let matrix = compute(&fixture()).unwrap();
        assert_eq!(matrix.len(), NUMERIC_COLUMNS.len());
        assert!(!matrix.columns().iter().any(|c| c == "Term"));
    }
}
