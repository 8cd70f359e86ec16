//! CSV header parsing and normalization.

/// Column names from the first line of an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|column| normalize_header(column.as_ref()))
                .collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the first column with this exact name.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// True when no column has a name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }
}

/// Trims a header, drops a stray BOM and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
