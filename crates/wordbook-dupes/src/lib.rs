//! Duplicate-value checker for one column of a delimited text file.

mod column;
mod report;

pub use column::{ColumnSelector, DupesError, read_column};
pub use report::{
    Duplicate, DuplicateReport, DuplicateSummary, EMPTY_PLACEHOLDER, analyze, find_duplicates,
};
