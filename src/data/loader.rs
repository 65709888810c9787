//! CSV loader for the admissions dataset.
//!
//! Validates the header against the expected column contract before any
//! row is decoded, so a schema mismatch never produces a partial table.
//! Rows decode straight into [`StudentRecord`] via serde.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::types::StudentRecord;

/// Required columns in the input CSV. Names are an exact-match contract;
/// extra columns are ignored.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "Year",
    "Term",
    "Applications",
    "Admitted",
    "Enrolled",
    "Retention Rate (%)",
    "Student Satisfaction (%)",
    "Engineering Enrolled",
    "Business Enrolled",
    "Arts Enrolled",
    "Science Enrolled",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("missing required columns: {}", .0.join(", "))]
    SchemaMismatch(Vec<String>),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CSV data loader for one admissions dataset file.
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    /// Create a loader for the given CSV path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and schema-validate the full dataset.
    pub fn load(&self) -> Result<Vec<StudentRecord>, LoaderError> {
        if !self.path.exists() {
            return Err(LoaderError::FileNotFound(
                self.path.display().to_string(),
            ));
        }

        let file = File::open(&self.path)?;
        let records = load_from_reader(file)?;
        info!(
            rows = records.len(),
            path = %self.path.display(),
            "loaded admissions dataset"
        );
        Ok(records)
    }
}

/// Load records from any reader (in-memory buffers, test fixtures).
///
/// Header validation runs first; every expected column must be present
/// or the whole load fails with [`LoaderError::SchemaMismatch`] listing
/// the missing names.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<StudentRecord>, LoaderError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let present: HashSet<&str> = headers.iter().collect();
    let missing: Vec<String> = EXPECTED_COLUMNS
        .iter()
        .filter(|col| !present.contains(**col))
        .map(|col| (*col).to_string())
        .collect();

    if !missing.is_empty() {
        return Err(LoaderError::SchemaMismatch(missing));
    }

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
