#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Product identifier as shown in the inventory list.
///
/// Uploaded rows either carry their own id or get one synthesized from the
/// upload timestamp and row index, see [`ProductId::synthesized`].
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ProductId(pub(crate) String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyProductId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// `CSV-<upload millis>-<row index>`, unique within one upload batch.
    pub fn synthesized(upload_millis: i64, row_index: usize) -> Self {
        Self(format!("CSV-{upload_millis}-{row_index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(ProductId::new("  INV-001 ").unwrap().as_str(), "INV-001");
        assert!(matches!(
            ProductId::new("   "),
            Err(ModelError::EmptyProductId)
        ));
    }

    #[test]
    fn synthesized_ids_differ_by_row() {
        let a = ProductId::synthesized(1_700_000_000_000, 0);
        let b = ProductId::synthesized(1_700_000_000_000, 1);
        assert_eq!(a.as_str(), "CSV-1700000000000-0");
        assert_ne!(a, b);
    }
}
