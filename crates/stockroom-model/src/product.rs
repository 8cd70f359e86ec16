use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::StockStatus;
use crate::ids::ProductId;

/// Placeholder for products without an expiry date.
pub const EXPIRY_NOT_APPLICABLE: &str = "N/A";

/// Default window, in days, for the "Expires Soon" badge.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Calendar date format used for every date field.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One normalized product entry in the inventory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub max_stock: u32,
    pub location: String,
    /// ISO calendar date or [`EXPIRY_NOT_APPLICABLE`].
    pub expiry_date: String,
    pub status: StockStatus,
    pub last_restocked: String,
    /// Registration details carried by product-registry uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
}

/// Extra fields from the product-registry CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub package_registration_date: String,
}

impl ProductRecord {
    /// Fill level for the stock bar, capped at 100.
    pub fn stock_level_percent(&self) -> f64 {
        if self.max_stock == 0 {
            return 0.0;
        }
        (f64::from(self.current_stock) / f64::from(self.max_stock) * 100.0).min(100.0)
    }

    /// Suggested quick-restock quantity (fill up to capacity) for low or
    /// critical products.
    pub fn restock_quantity(&self) -> Option<u32> {
        if !self.status.needs_restock() {
            return None;
        }
        Some(self.max_stock.saturating_sub(self.current_stock))
    }

    pub fn is_expiring_soon(&self, today: NaiveDate, window_days: i64) -> bool {
        is_expiring_soon(&self.expiry_date, today, window_days)
    }
}

/// Returns true when `expiry` falls within `window_days` of `today`.
///
/// Already expired products count as expiring. The sentinel and anything that
/// is not an ISO calendar date never do.
pub fn is_expiring_soon(expiry: &str, today: NaiveDate, window_days: i64) -> bool {
    let expiry = expiry.trim();
    if expiry == EXPIRY_NOT_APPLICABLE {
        return false;
    }
    match NaiveDate::parse_from_str(expiry, ISO_DATE_FORMAT) {
        Ok(date) => (date - today).num_days() <= window_days,
        Err(_) => false,
    }
}

/// Formats a date the way every record field stores it.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current: u32, max: u32, status: StockStatus) -> ProductRecord {
        ProductRecord {
            id: ProductId::new("INV-900").unwrap(),
            name: "Test".to_string(),
            category: "Test".to_string(),
            current_stock: current,
            minimum_stock: 0,
            max_stock: max,
            location: "Warehouse A".to_string(),
            expiry_date: EXPIRY_NOT_APPLICABLE.to_string(),
            status,
            last_restocked: "2024-01-01".to_string(),
            details: None,
        }
    }

    #[test]
    fn stock_level_is_capped() {
        let half = record(500, 1000, StockStatus::InStock).stock_level_percent();
        assert!((half - 50.0).abs() < 1e-9);
        let over = record(3000, 1000, StockStatus::InStock).stock_level_percent();
        assert!((over - 100.0).abs() < 1e-9);
        assert_eq!(record(10, 0, StockStatus::Critical).stock_level_percent(), 0.0);
    }

    #[test]
    fn restock_only_for_low_or_critical() {
        assert_eq!(record(180, 1000, StockStatus::LowStock).restock_quantity(), Some(820));
        assert_eq!(record(45, 300, StockStatus::Critical).restock_quantity(), Some(255));
        assert_eq!(record(1250, 2000, StockStatus::InStock).restock_quantity(), None);
    }

    #[test]
    fn expiry_window_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(is_expiring_soon("2024-03-31", today, 30));
        assert!(!is_expiring_soon("2024-04-01", today, 30));
        assert!(is_expiring_soon("2024-02-01", today, 30));
        assert!(!is_expiring_soon("N/A", today, 30));
        assert!(!is_expiring_soon("soon", today, 30));
    }
}
