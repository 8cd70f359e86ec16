use std::collections::BTreeMap;

/// One data line of an upload, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 0-based position among non-empty data rows.
    pub index: usize,
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new(index: usize, cells: BTreeMap<String, String>) -> Self {
        Self { index, cells }
    }

    /// 1-based row number used in error messages.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Trimmed value of a column, `None` when the column is absent or blank.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Columns from `required` that have no value in this row.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|column| self.value(column).is_none())
            .collect()
    }

    pub fn cells(&self) -> &BTreeMap<String, String> {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::new(
            2,
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn blank_values_are_missing() {
        let row = row(&[("name", "  Teff "), ("category", "   ")]);
        assert_eq!(row.number(), 3);
        assert_eq!(row.value("name"), Some("Teff"));
        assert_eq!(row.value("category"), None);
        assert_eq!(
            row.missing(&["name", "category", "currentStock"]),
            vec!["category", "currentStock"]
        );
    }
}
