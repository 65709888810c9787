//! Core data types for the admissions dataset.
//!
//! One `StudentRecord` per CSV row, one row per academic year. The types
//! mirror the input schema exactly so downstream metrics never touch raw
//! column names.

use serde::{Deserialize, Serialize};

/// Academic term (Spring or Fall intake).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Spring,
    Fall,
}

impl Term {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Spring" | "spring" | "SPRING" => Some(Self::Spring),
            "Fall" | "fall" | "FALL" => Some(Self::Fall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }

    /// Both terms, in display order.
    pub const ALL: [Term; 2] = [Term::Spring, Term::Fall];
}

/// Academic department with a dedicated enrollment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Business,
    Arts,
    Science,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Business,
        Department::Arts,
        Department::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Business => "Business",
            Self::Arts => "Arts",
            Self::Science => "Science",
        }
    }

    /// Enrollment count for this department in a given record.
    pub fn enrolled_in(&self, record: &StudentRecord) -> u32 {
        match self {
            Self::Engineering => record.engineering_enrolled,
            Self::Business => record.business_enrolled,
            Self::Arts => record.arts_enrolled,
            Self::Science => record.science_enrolled,
        }
    }
}

/// A single year of admissions data.
///
/// Field names map to the exact CSV header contract; counts shrink down
/// the funnel: applications >= admitted >= enrolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Academic year (unique per row).
    #[serde(rename = "Year")]
    pub year: i32,

    /// Intake term.
    #[serde(rename = "Term")]
    pub term: Term,

    /// Applications received.
    #[serde(rename = "Applications")]
    pub applications: u32,

    /// Applicants admitted.
    #[serde(rename = "Admitted")]
    pub admitted: u32,

    /// Admitted students who enrolled.
    #[serde(rename = "Enrolled")]
    pub enrolled: u32,

    /// Percent of the prior cohort retained.
    #[serde(rename = "Retention Rate (%)")]
    pub retention_rate: f64,

    /// Student satisfaction survey score, percent.
    #[serde(rename = "Student Satisfaction (%)")]
    pub satisfaction: f64,

    #[serde(rename = "Engineering Enrolled")]
    pub engineering_enrolled: u32,

    #[serde(rename = "Business Enrolled")]
    pub business_enrolled: u32,

    #[serde(rename = "Arts Enrolled")]
    pub arts_enrolled: u32,

    #[serde(rename = "Science Enrolled")]
    pub science_enrolled: u32,
}

impl StudentRecord {
    /// Sum of the four per-department enrollment counts.
    ///
    /// At most `enrolled`; some enrollees sit outside the four tracked
    /// departments.
    pub fn department_total(&self) -> u32 {
        Department::ALL.iter().map(|d| d.enrolled_in(self)).sum()
    }

    /// Whether the admissions funnel is ordered:
    /// applications >= admitted >= enrolled.
    pub fn funnel_is_ordered(&self) -> bool {
        self.applications >= self.admitted && self.admitted >= self.enrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StudentRecord {
        StudentRecord {
            year: 2020,
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
    fn test_term_parsing() {
        assert_eq!(Term::from_str("Spring"), Some(Term::Spring));
        assert_eq!(Term::from_str("fall"), Some(Term::Fall));
        assert_eq!(Term::from_str("Summer"), None);
        assert_eq!(Term::Fall.as_str(), "Fall");
    }

    #[test]
    fn test_department_total() {
        let r = record();
        assert_eq!(r.department_total(), 150);
        assert_eq!(Department::Engineering.enrolled_in(&r), 60);
    }

    #[test]
    fn test_funnel_ordering() {
        let mut r = record();
        assert!(r.funnel_is_ordered());

        r.admitted = 1200;
        assert!(!r.funnel_is_ordered());
    }
}
