//! Downloadable example files for each upload layout.

use crate::file::{CSV_MEDIA_TYPE, UploadFile};
use crate::schema::CsvSchema;

const INVENTORY_TEMPLATE: &str = "\
name,category,currentStock,minimumStock,maxStock,location,expiryDate,status,lastRestocked
Ethiopian Coffee Premium,Beverages,1250,500,2000,Warehouse A,2024-06-15,In Stock,2024-01-10
Organic Teff Grain,Grains,180,200,1000,Warehouse B,2024-08-20,Low Stock,2024-01-08";

const PRODUCT_TEMPLATE: &str = "\
categoryName,productId,productName,holdingCapacity,packageRegistrationDate,product_barcode,registrationDate,location,locationId,expiryDate
Beverages,PRD-1001,Ethiopian Coffee Premium,1250,2024-01-05,123456789012,2024-01-10,Warehouse A,LOC-A1,2024-06-15
Grains,PRD-1002,Organic Teff Grain,80,2024-01-02,123456789013,2024-01-08,Warehouse B,LOC-B2,2024-08-20";

/// Fixed template text for a layout.
pub fn template_csv(schema: CsvSchema) -> &'static str {
    match schema {
        CsvSchema::Simple => INVENTORY_TEMPLATE,
        CsvSchema::Extended => PRODUCT_TEMPLATE,
    }
}

pub fn template_file_name(schema: CsvSchema) -> &'static str {
    match schema {
        CsvSchema::Simple => "inventory_template.csv",
        CsvSchema::Extended => "product_template.csv",
    }
}

/// The template as a ready-to-save `text/csv` file.
pub fn template_file(schema: CsvSchema) -> UploadFile {
    UploadFile::new(template_file_name(schema), template_csv(schema))
        .with_media_type(CSV_MEDIA_TYPE)
}
