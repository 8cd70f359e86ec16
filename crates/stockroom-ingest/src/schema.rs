//! Upload layouts and how to tell them apart.
//!
//! Two CSV layouts are accepted for the same upload:
//!
//! - **Inventory** (`name, category, currentStock, ...`): stock figures and
//!   status are supplied directly.
//! - **Product registry** (`productId, productName, categoryName,
//!   holdingCapacity, ...`): stock figures and status are derived from the
//!   holding capacity.
//!
//! A header containing `productId` selects the registry layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::csv::CsvHeaders;

/// Column names of the inventory layout.
pub mod inventory_columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const CURRENT_STOCK: &str = "currentStock";
    pub const MINIMUM_STOCK: &str = "minimumStock";
    pub const MAX_STOCK: &str = "maxStock";
    pub const LOCATION: &str = "location";
    pub const EXPIRY_DATE: &str = "expiryDate";
    pub const STATUS: &str = "status";
    pub const LAST_RESTOCKED: &str = "lastRestocked";
}

/// Column names of the product registry layout.
pub mod registry_columns {
    pub const CATEGORY_NAME: &str = "categoryName";
    pub const PRODUCT_ID: &str = "productId";
    pub const PRODUCT_NAME: &str = "productName";
    pub const HOLDING_CAPACITY: &str = "holdingCapacity";
    pub const PACKAGE_REGISTRATION_DATE: &str = "packageRegistrationDate";
    pub const PRODUCT_BARCODE: &str = "product_barcode";
    pub const REGISTRATION_DATE: &str = "registrationDate";
    pub const LOCATION: &str = "location";
    pub const LOCATION_ID: &str = "locationId";
    pub const EXPIRY_DATE: &str = "expiryDate";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvSchema {
    /// Inventory layout with explicit stock figures.
    #[default]
    Simple,
    /// Product registry layout keyed by `productId`.
    Extended,
}

impl CsvSchema {
    pub fn detect(headers: &CsvHeaders) -> Self {
        if headers.contains(registry_columns::PRODUCT_ID) {
            CsvSchema::Extended
        } else {
            CsvSchema::Simple
        }
    }

    /// Columns every data row must fill.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            CsvSchema::Simple => &[
                inventory_columns::NAME,
                inventory_columns::CATEGORY,
                inventory_columns::CURRENT_STOCK,
            ],
            CsvSchema::Extended => &[
                registry_columns::PRODUCT_ID,
                registry_columns::PRODUCT_NAME,
                registry_columns::CATEGORY_NAME,
            ],
        }
    }

    /// Every column the layout understands, in template order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            CsvSchema::Simple => &[
                inventory_columns::NAME,
                inventory_columns::CATEGORY,
                inventory_columns::CURRENT_STOCK,
                inventory_columns::MINIMUM_STOCK,
                inventory_columns::MAX_STOCK,
                inventory_columns::LOCATION,
                inventory_columns::EXPIRY_DATE,
                inventory_columns::STATUS,
                inventory_columns::LAST_RESTOCKED,
            ],
            CsvSchema::Extended => &[
                registry_columns::CATEGORY_NAME,
                registry_columns::PRODUCT_ID,
                registry_columns::PRODUCT_NAME,
                registry_columns::HOLDING_CAPACITY,
                registry_columns::PACKAGE_REGISTRATION_DATE,
                registry_columns::PRODUCT_BARCODE,
                registry_columns::REGISTRATION_DATE,
                registry_columns::LOCATION,
                registry_columns::LOCATION_ID,
                registry_columns::EXPIRY_DATE,
            ],
        }
    }

    /// Placeholder location for rows that leave it blank.
    pub fn default_location(&self) -> &'static str {
        match self {
            CsvSchema::Simple => "Warehouse A",
            CsvSchema::Extended => "Unknown Location",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CsvSchema::Simple => "simple",
            CsvSchema::Extended => "extended",
        }
    }
}

impl fmt::Display for CsvSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CsvSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "inventory" => Ok(CsvSchema::Simple),
            "extended" | "product" | "registry" => Ok(CsvSchema::Extended),
            _ => Err(format!("Unknown CSV schema: {s}")),
        }
    }
}
