//! Turning raw rows into product records.

use stockroom_model::{EXPIRY_NOT_APPLICABLE, ProductDetails, ProductId, ProductRecord, StockStatus};

use crate::coerce::{max_stock_or_default, minimum_stock_for_capacity, stock_or_zero};
use crate::csv::RawRow;
use crate::error::{IngestError, Result};
use crate::pipeline::UploadContext;
use crate::schema::{CsvSchema, inventory_columns as inv, registry_columns as reg};

/// Builds one record, or fails naming the row.
pub fn normalize_row(
    schema: CsvSchema,
    row: &RawRow,
    ctx: &UploadContext,
) -> Result<ProductRecord> {
    let missing = row.missing(schema.required_columns());
    if !missing.is_empty() {
        return Err(IngestError::MissingRequiredField {
            row: row.number(),
            fields: missing.into_iter().map(str::to_string).collect(),
        });
    }
    match schema {
        CsvSchema::Simple => normalize_inventory_row(row, ctx),
        CsvSchema::Extended => Ok(normalize_registry_row(row, ctx)),
    }
}

fn normalize_inventory_row(row: &RawRow, ctx: &UploadContext) -> Result<ProductRecord> {
    let status = match row.value(inv::STATUS) {
        Some(value) => value
            .parse::<StockStatus>()
            .map_err(|_| IngestError::InvalidStatus {
                row: row.number(),
                value: value.to_string(),
            })?,
        None => StockStatus::InStock,
    };

    Ok(ProductRecord {
        id: row_id(row.value(inv::ID), row, ctx),
        name: text(row, inv::NAME),
        category: text(row, inv::CATEGORY),
        current_stock: stock_or_zero(row.value(inv::CURRENT_STOCK)),
        minimum_stock: stock_or_zero(row.value(inv::MINIMUM_STOCK)),
        max_stock: max_stock_or_default(row.value(inv::MAX_STOCK)),
        location: text_or(row, inv::LOCATION, CsvSchema::Simple.default_location()),
        expiry_date: text_or(row, inv::EXPIRY_DATE, EXPIRY_NOT_APPLICABLE),
        status,
        last_restocked: date_or_today(row, inv::LAST_RESTOCKED, ctx),
        details: None,
    })
}

fn normalize_registry_row(row: &RawRow, ctx: &UploadContext) -> ProductRecord {
    let capacity = stock_or_zero(row.value(reg::HOLDING_CAPACITY));
    let barcode = row
        .value(reg::PRODUCT_BARCODE)
        .map(str::to_string)
        .unwrap_or_else(|| synthesized_barcode(ctx, row.index));

    ProductRecord {
        id: row_id(row.value(reg::PRODUCT_ID), row, ctx),
        name: text(row, reg::PRODUCT_NAME),
        category: text(row, reg::CATEGORY_NAME),
        current_stock: capacity,
        minimum_stock: minimum_stock_for_capacity(capacity),
        max_stock: capacity.max(1),
        location: text_or(row, reg::LOCATION, CsvSchema::Extended.default_location()),
        expiry_date: text_or(row, reg::EXPIRY_DATE, EXPIRY_NOT_APPLICABLE),
        status: StockStatus::from_quantity(capacity),
        last_restocked: date_or_today(row, reg::REGISTRATION_DATE, ctx),
        details: Some(ProductDetails {
            barcode,
            location_id: row.value(reg::LOCATION_ID).map(str::to_string),
            package_registration_date: date_or_today(row, reg::PACKAGE_REGISTRATION_DATE, ctx),
        }),
    }
}

fn row_id(value: Option<&str>, row: &RawRow, ctx: &UploadContext) -> ProductId {
    value
        .and_then(|id| ProductId::new(id).ok())
        .unwrap_or_else(|| ProductId::synthesized(ctx.upload_millis, row.index))
}

/// `<upload millis><row index, 3 digits>`, digits only like scanned codes.
fn synthesized_barcode(ctx: &UploadContext, index: usize) -> String {
    format!("{}{index:03}", ctx.upload_millis)
}

fn text(row: &RawRow, column: &str) -> String {
    row.value(column).unwrap_or_default().to_string()
}

fn text_or(row: &RawRow, column: &str, default: &str) -> String {
    row.value(column).unwrap_or(default).to_string()
}

fn date_or_today(row: &RawRow, column: &str, ctx: &UploadContext) -> String {
    row.value(column)
        .map(str::to_string)
        .unwrap_or_else(|| ctx.today_iso())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn ctx() -> UploadContext {
        UploadContext::new(1_700_000_000_000, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    fn row(index: usize, pairs: &[(&str, &str)]) -> RawRow {
        let cells: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        RawRow::new(index, cells)
    }

    #[test]
    fn inventory_row_defaults() {
        let record = normalize_row(
            CsvSchema::Simple,
            &row(3, &[("name", "Teff"), ("category", "Grains"), ("currentStock", "180")]),
            &ctx(),
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "CSV-1700000000000-3");
        assert_eq!(record.current_stock, 180);
        assert_eq!(record.minimum_stock, 0);
        assert_eq!(record.max_stock, 1000);
        assert_eq!(record.location, "Warehouse A");
        assert_eq!(record.expiry_date, "N/A");
        assert_eq!(record.status, StockStatus::InStock);
        assert_eq!(record.last_restocked, "2024-05-02");
        assert!(record.details.is_none());
    }

    #[test]
    fn inventory_row_keeps_supplied_values() {
        let record = normalize_row(
            CsvSchema::Simple,
            &row(
                0,
                &[
                    ("id", "INV-010"),
                    ("name", "Teff"),
                    ("category", "Grains"),
                    ("currentStock", "180"),
                    ("minimumStock", "200"),
                    ("maxStock", "900"),
                    ("location", "Warehouse B"),
                    ("expiryDate", "2024-08-20"),
                    ("status", "low stock"),
                    ("lastRestocked", "2024-01-08"),
                ],
            ),
            &ctx(),
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "INV-010");
        assert_eq!(record.minimum_stock, 200);
        assert_eq!(record.max_stock, 900);
        assert_eq!(record.location, "Warehouse B");
        assert_eq!(record.status, StockStatus::LowStock);
        assert_eq!(record.last_restocked, "2024-01-08");
    }

    #[test]
    fn inventory_row_rejects_unknown_status() {
        let err = normalize_row(
            CsvSchema::Simple,
            &row(
                1,
                &[
                    ("name", "Teff"),
                    ("category", "Grains"),
                    ("currentStock", "1"),
                    ("status", "Gone"),
                ],
            ),
            &ctx(),
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::InvalidStatus { row: 2, .. }));
    }

    #[test]
    fn missing_required_names_row_and_fields() {
        let err = normalize_row(
            CsvSchema::Simple,
            &row(0, &[("name", "Teff"), ("currentStock", "")]),
            &ctx(),
        )
        .unwrap_err();
        match err {
            IngestError::MissingRequiredField { row, fields } => {
                assert_eq!(row, 1);
                assert_eq!(fields, vec!["category", "currentStock"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn registry_row_derives_stock_figures() {
        let record = normalize_row(
            CsvSchema::Extended,
            &row(
                4,
                &[
                    ("productId", "PRD-7"),
                    ("productName", "Honey"),
                    ("categoryName", "Food"),
                    ("holdingCapacity", "99"),
                ],
            ),
            &ctx(),
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "PRD-7");
        assert_eq!(record.current_stock, 99);
        assert_eq!(record.minimum_stock, 19);
        assert_eq!(record.max_stock, 99);
        assert_eq!(record.status, StockStatus::LowStock);
        assert_eq!(record.location, "Unknown Location");
        assert_eq!(record.last_restocked, "2024-05-02");
        let details = record.details.unwrap();
        assert_eq!(details.barcode, "1700000000000004");
        assert_eq!(details.location_id, None);
        assert_eq!(details.package_registration_date, "2024-05-02");
    }

    #[test]
    fn registry_row_without_capacity_is_critical() {
        let record = normalize_row(
            CsvSchema::Extended,
            &row(
                0,
                &[("productId", "PRD-8"), ("productName", "Kit"), ("categoryName", "Equipment")],
            ),
            &ctx(),
        )
        .unwrap();
        assert_eq!(record.current_stock, 0);
        assert_eq!(record.max_stock, 1);
        assert_eq!(record.status, StockStatus::Critical);
    }
}
