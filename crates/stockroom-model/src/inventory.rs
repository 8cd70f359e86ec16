//! The product list shown by the inventory view.
//!
//! Uploaded batches are appended as-is: there is no deduplication by
//! identifier, so merging the same file twice lists its products twice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::StockStatus;
use crate::ids::ProductId;
use crate::product::{EXPIRY_NOT_APPLICABLE, ProductRecord};

/// Counters for the overview cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_items: usize,
    pub critical_items: usize,
    pub low_stock_items: usize,
    pub expiring_items: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    products: Vec<ProductRecord>,
}

impl Inventory {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// The fixed product list displayed when no inventory data is available.
    pub fn fallback() -> Self {
        Self::new(vec![
            fallback_product(
                "INV-001",
                "Ethiopian Coffee Premium",
                "Beverages",
                (1250, 500, 2000),
                "Warehouse A",
                "2024-06-15",
                StockStatus::InStock,
                "2024-01-10",
            ),
            fallback_product(
                "INV-002",
                "Organic Teff Grain",
                "Grains",
                (180, 200, 1000),
                "Warehouse B",
                "2024-08-20",
                StockStatus::LowStock,
                "2024-01-08",
            ),
            fallback_product(
                "INV-003",
                "Honey Processing Kit",
                "Equipment",
                (45, 100, 300),
                "Warehouse C",
                EXPIRY_NOT_APPLICABLE,
                StockStatus::Critical,
                "2024-01-05",
            ),
            fallback_product(
                "INV-004",
                "Organic Spice Mix",
                "Spices",
                (890, 300, 1200),
                "Warehouse A",
                "2024-04-30",
                StockStatus::InStock,
                "2024-01-12",
            ),
        ])
    }

    /// Appends a batch and returns how many records were added.
    pub fn merge(&mut self, batch: Vec<ProductRecord>) -> usize {
        let added = batch.len();
        self.products.extend(batch);
        added
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.iter()
    }

    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }

    /// Case-insensitive match on name, id or category. An empty term matches
    /// everything.
    pub fn search(&self, term: &str) -> Vec<&ProductRecord> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.id.as_str().to_lowercase().contains(&needle)
                    || product.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Products flagged Low Stock or Critical.
    pub fn needing_restock(&self) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|product| product.status.needs_restock())
            .collect()
    }

    pub fn expiring(&self, today: NaiveDate, window_days: i64) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|product| product.is_expiring_soon(today, window_days))
            .collect()
    }

    pub fn summary(&self, today: NaiveDate, window_days: i64) -> InventorySummary {
        let mut summary = InventorySummary {
            total_items: self.products.len(),
            ..InventorySummary::default()
        };
        for product in &self.products {
            match product.status {
                StockStatus::Critical => summary.critical_items += 1,
                StockStatus::LowStock => summary.low_stock_items += 1,
                StockStatus::InStock => {}
            }
            if product.is_expiring_soon(today, window_days) {
                summary.expiring_items += 1;
            }
        }
        summary
    }
}

impl Extend<ProductRecord> for Inventory {
    fn extend<I: IntoIterator<Item = ProductRecord>>(&mut self, iter: I) {
        self.products.extend(iter);
    }
}

#[allow(clippy::too_many_arguments)]
fn fallback_product(
    id: &str,
    name: &str,
    category: &str,
    (current_stock, minimum_stock, max_stock): (u32, u32, u32),
    location: &str,
    expiry_date: &str,
    status: StockStatus,
    last_restocked: &str,
) -> ProductRecord {
    ProductRecord {
        id: ProductId(id.to_string()),
        name: name.to_string(),
        category: category.to_string(),
        current_stock,
        minimum_stock,
        max_stock,
        location: location.to_string(),
        expiry_date: expiry_date.to_string(),
        status,
        last_restocked: last_restocked.to_string(),
        details: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_four_products() {
        let inventory = Inventory::fallback();
        assert_eq!(inventory.len(), 4);
        assert_eq!(inventory.needing_restock().len(), 2);
    }

    #[test]
    fn merge_appends_without_dedup() {
        let mut inventory = Inventory::fallback();
        let batch = Inventory::fallback().into_products();
        assert_eq!(inventory.merge(batch), 4);
        assert_eq!(inventory.len(), 8);
        assert_eq!(inventory.products()[0].id, inventory.products()[4].id);
    }

    #[test]
    fn search_is_case_insensitive() {
        let inventory = Inventory::fallback();
        assert_eq!(inventory.search("ORGANIC").len(), 2);
        assert_eq!(inventory.search("inv-003").len(), 1);
        assert_eq!(inventory.search("grains").len(), 1);
        assert_eq!(inventory.search("").len(), 4);
        assert!(inventory.search("pallet").is_empty());
    }

    #[test]
    fn summary_counts_statuses_and_expiry() {
        let inventory = Inventory::fallback();
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let summary = inventory.summary(today, 30);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.critical_items, 1);
        assert_eq!(summary.low_stock_items, 1);
        // 2024-04-30 is 20 days out; 2024-06-15 and 2024-08-20 are not.
        assert_eq!(summary.expiring_items, 1);
    }
}
