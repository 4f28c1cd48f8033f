use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

#[derive(Debug, thiserror::Error)]
pub enum DupesError {
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{0}' not found, available: {1:?}")]
    UnknownColumn(String, Vec<String>),

    #[error("Column '{column}' out of range, file has {width} columns")]
    OutOfRange { column: String, width: usize },

    #[error("Selecting a column by name needs a header row")]
    NoHeaders,
}

/// Which column to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Zero-based index
    Index(usize),
    /// Spreadsheet letter such as `C` or `AA`. A header with the same text wins.
    Letter(String),
    /// Header name
    Name(String),
}

impl ColumnSelector {
    /// One to three ASCII letters select by letter, anything else by header name
    pub fn parse(column: &str) -> Self {
        let column = column.trim();
        if (1..=3).contains(&column.len()) && column.chars().all(|c| c.is_ascii_alphabetic()) {
            return ColumnSelector::Letter(column.to_string());
        }
        ColumnSelector::Name(column.to_string())
    }

    /// Zero-based column index against the file's header row
    pub fn resolve(&self, headers: &[String]) -> Result<usize, DupesError> {
        let by_header = |name: &str| headers.iter().position(|h| h.trim() == name);

        match self {
            ColumnSelector::Index(i) => Ok(*i),
            ColumnSelector::Letter(letters) => {
                if let Some(index) = by_header(letters) {
                    tracing::debug!("Column '{letters}' matches a header, not a letter");
                    return Ok(index);
                }
                Ok(letter_index(letters))
            }
            ColumnSelector::Name(name) => {
                if headers.is_empty() {
                    return Err(DupesError::NoHeaders);
                }
                by_header(name)
                    .ok_or_else(|| DupesError::UnknownColumn(name.clone(), headers.to_vec()))
            }
        }
    }

    fn label(&self) -> String {
        match self {
            ColumnSelector::Index(i) => i.to_string(),
            ColumnSelector::Letter(letters) => letters.to_ascii_uppercase(),
            ColumnSelector::Name(name) => name.clone(),
        }
    }
}

/// `A` is 0, `Z` is 25, `AA` is 26
fn letter_index(letters: &str) -> usize {
    letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
        - 1
}

/// Read one column of a delimited file. Short rows yield `None` for the cell.
pub fn read_column(
    path: &Path,
    selector: &ColumnSelector,
    delimiter: u8,
    has_headers: bool,
) -> Result<Vec<Option<String>>, DupesError> {
    let csv_err = |source| DupesError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers: Vec<String> = if has_headers {
        reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    if !has_headers && matches!(selector, ColumnSelector::Name(_)) {
        return Err(DupesError::NoHeaders);
    }
    let index = selector.resolve(&headers)?;

    let mut values = Vec::new();
    let mut width = headers.len();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        width = width.max(record.len());
        values.push(record.get(index).map(str::to_string));
    }

    if index >= width && !(values.is_empty() && headers.is_empty()) {
        return Err(DupesError::OutOfRange {
            column: selector.label(),
            width,
        });
    }

    tracing::info!("Read {} values from column {}", values.len(), selector.label());
    Ok(values)
}
