//! Type-safe enumerations for inventory concepts.
//!
//! These values travel as display strings in CSV files and JSON payloads
//! (`"Low Stock"`, `"manager"`), so each enum parses leniently and
//! serializes back to its canonical spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Quantities above this are comfortably stocked.
pub const IN_STOCK_ABOVE: u32 = 100;

/// Quantities above this (and up to [`IN_STOCK_ABOVE`]) are low; anything at
/// or below it is critical.
pub const LOW_STOCK_ABOVE: u32 = 20;

/// Stock status badge for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Critical")]
    Critical,
}

impl StockStatus {
    /// Returns the label as it appears in CSV files and the inventory list.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::Critical => "Critical",
        }
    }

    /// Derives a status purely from a stock quantity.
    ///
    /// - `> 100`: In Stock
    /// - `21..=100`: Low Stock
    /// - `<= 20`: Critical
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity > IN_STOCK_ABOVE {
            StockStatus::InStock
        } else if quantity > LOW_STOCK_ABOVE {
            StockStatus::LowStock
        } else {
            StockStatus::Critical
        }
    }

    /// Returns true for statuses that offer a quick restock.
    pub fn needs_restock(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::Critical)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ModelError;

    /// Case-insensitive; inner whitespace, `_` and `-` are interchangeable
    /// (`"low stock"`, `"LOW_STOCK"`, `"Low-Stock"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !(ch.is_whitespace() || *ch == '_' || *ch == '-'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "INSTOCK" => Ok(StockStatus::InStock),
            "LOWSTOCK" => Ok(StockStatus::LowStock),
            "CRITICAL" => Ok(StockStatus::Critical),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Role selected on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Operator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Operator => "operator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "operator" => Ok(UserRole::Operator),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(StockStatus::from_quantity(101), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(100), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(21), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(20), StockStatus::Critical);
        assert_eq!(StockStatus::from_quantity(0), StockStatus::Critical);
    }

    #[test]
    fn status_parses_loose_spellings() {
        assert_eq!("In Stock".parse::<StockStatus>().unwrap(), StockStatus::InStock);
        assert_eq!("low_stock".parse::<StockStatus>().unwrap(), StockStatus::LowStock);
        assert_eq!(" CRITICAL ".parse::<StockStatus>().unwrap(), StockStatus::Critical);
        assert!("Discontinued".parse::<StockStatus>().is_err());
    }

    #[test]
    fn status_round_trips_display() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::Critical,
        ] {
            assert_eq!(status.to_string().parse::<StockStatus>().unwrap(), status);
        }
    }

    #[test]
    fn role_parses() {
        assert_eq!("Manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert!("guest".parse::<UserRole>().is_err());
    }
}
