use std::collections::HashMap;

/// Stand-in value for empty cells
pub const EMPTY_PLACEHOLDER: &str = "<empty>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub value: String,
    /// 1-based positions within the column
    pub positions: Vec<usize>,
}

impl Duplicate {
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// First and last position
    pub fn span(&self) -> (usize, usize) {
        let first = self.positions.first().copied().unwrap_or_default();
        let last = self.positions.last().copied().unwrap_or_default();
        (first, last)
    }
}

/// Column-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateSummary {
    /// Rows read, empty cells included
    pub total: usize,
    /// Distinct values, `<empty>` counted once
    pub unique: usize,
    /// Distinct values seen more than once
    pub duplicated: usize,
}

impl DuplicateSummary {
    /// Share of distinct values that repeat, in percent
    pub fn rate(&self) -> f64 {
        if self.unique == 0 {
            return 0.0;
        }
        self.duplicated as f64 / self.unique as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub duplicates: Vec<Duplicate>,
    pub summary: DuplicateSummary,
}

/// Every value that occurs more than once, in order of first appearance.
pub fn find_duplicates<I, S>(values: I) -> Vec<Duplicate>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    analyze(values).duplicates
}

/// Duplicates plus the column summary
pub fn analyze<I, S>(values: I) -> DuplicateReport
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
    let mut total = 0;

    for (i, value) in values.into_iter().enumerate() {
        let value = match value.as_ref().map(|v| v.as_ref().trim()) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => EMPTY_PLACEHOLDER.to_string(),
        };

        let seen = positions.entry(value.clone()).or_default();
        if seen.is_empty() {
            order.push(value);
        }
        seen.push(i + 1);
        total += 1;
    }

    let unique = order.len();
    let duplicates: Vec<Duplicate> = order
        .into_iter()
        .filter_map(|value| {
            let positions = positions.remove(&value)?;
            (positions.len() > 1).then_some(Duplicate { value, positions })
        })
        .collect();

    DuplicateReport {
        summary: DuplicateSummary {
            total,
            unique,
            duplicated: duplicates.len(),
        },
        duplicates,
    }
}
