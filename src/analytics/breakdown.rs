//! Department and term enrollment breakdowns.
//!
//! Aggregates behind the department bar chart and the Spring-vs-Fall
//! distribution comparison.

use serde::Serialize;

use crate::data::{Department, StudentRecord, Term};

/// Total enrollment for one department across all years.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentShare {
    pub department: Department,
    pub enrolled: u32,
    /// Share of the four-department total; `None` when that total is 0.
    pub share: Option<f64>,
}

/// Department-level enrollment totals.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentBreakdown {
    pub shares: Vec<DepartmentShare>,
    pub department_total: u32,
}

impl DepartmentBreakdown {
    /// Department with the highest total enrollment.
    pub fn largest(&self) -> Option<&DepartmentShare> {
        self.shares.iter().max_by_key(|s| s.enrolled)
    }
}

/// Aggregate per-department enrollment across all years.
pub fn department_breakdown(records: &[StudentRecord]) -> DepartmentBreakdown {
    let totals: Vec<(Department, u32)> = Department::ALL
        .iter()
        .map(|d| (*d, records.iter().map(|r| d.enrolled_in(r)).sum()))
        .collect();
    let department_total: u32 = totals.iter().map(|(_, n)| n).sum();

    let shares = totals
        .into_iter()
        .map(|(department, enrolled)| DepartmentShare {
            department,
            enrolled,
            share: if department_total == 0 {
                None
            } else {
                Some(enrolled as f64 / department_total as f64)
            },
        })
        .collect();

    DepartmentBreakdown {
        shares,
        department_total,
    }
}

/// Distribution of Enrolled within one term across years.
#[derive(Debug, Clone, Serialize)]
pub struct TermSummary {
    pub term: Term,
    pub rows: usize,
    pub total_enrolled: u32,
    pub mean_enrolled: Option<f64>,
    pub min_enrolled: Option<u32>,
    pub median_enrolled: Option<f64>,
    pub max_enrolled: Option<u32>,
}

/// Compare enrollment distributions between Spring and Fall intakes.
///
/// Always returns one summary per term, in display order; a term with
/// no rows reports zero counts and `None` statistics.
pub fn term_comparison(records: &[StudentRecord]) -> Vec<TermSummary> {
    Term::ALL
        .iter()
        .map(|&term| {
            let mut enrolled: Vec<u32> = records
                .iter()
                .filter(|r| r.term == term)
                .map(|r| r.enrolled)
                .collect();
            enrolled.sort_unstable();

            let rows = enrolled.len();
            let total: u32 = enrolled.iter().sum();

            TermSummary {
                term,
                rows,
                total_enrolled: total,
                mean_enrolled: if rows == 0 {
                    None
                } else {
                    Some(total as f64 / rows as f64)
                },
                min_enrolled: enrolled.first().copied(),
                median_enrolled: median(&enrolled),
                max_enrolled: enrolled.last().copied(),
            }
        })
        .collect()
}

/// Median of an already-sorted slice.
fn median(sorted: &[u32]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}
