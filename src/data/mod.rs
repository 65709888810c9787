pub mod loader;
pub mod types;

pub use loader::{load_from_reader, DataLoader, LoaderError, EXPECTED_COLUMNS};
pub use types::{Department, StudentRecord, Term};
