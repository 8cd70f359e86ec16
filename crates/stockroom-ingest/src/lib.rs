//! CSV bulk upload for the inventory list.
//!
//! This crate turns a user-selected CSV file into normalized
//! [`ProductRecord`](stockroom_model::ProductRecord)s.
//!
//! # Features
//!
//! - **File checks**: reject non-CSV files before reading a byte of content
//! - **CSV Loading**: header line plus non-empty data rows, UTF-8 only
//! - **Layout Detection**: inventory layout or product registry layout
//! - **Coercion**: stock figures, derived status and minimum stock, defaults
//! - **Upload Control**: idle/uploading/success/error with notifications
//! - **Templates**: fixed example files for each layout
//!
//! # Example
//!
//! ```ignore
//! use stockroom_ingest::{CsvUploader, UploadContext, UploadFile};
//! use stockroom_model::Inventory;
//!
//! let mut inventory = Inventory::fallback();
//! let mut uploader = CsvUploader::new(Vec::new());
//! let file = UploadFile::from_path("stock.csv".as_ref())?;
//! uploader.upload(&file, &UploadContext::now(), |records| {
//!     inventory.merge(records);
//! });
//! ```

mod coerce;
mod csv;
mod error;
mod file;
mod normalize;
mod pipeline;
mod schema;
mod template;
mod upload;

// === Error Types ===
pub use error::{IngestError, IngestErrorKind, Result};

// === CSV Reading ===
pub use self::csv::{
    CsvHeaders, CsvTable, MAX_UPLOAD_FILE_SIZE, RawRow, check_file_size,
    check_file_size_with_limit, normalize_header, read_csv_table, validate_encoding,
};

// === Files ===
pub use file::{CSV_MEDIA_TYPE, UploadFile, check_file_type, check_path_type};

// === Layouts and Coercion ===
pub use coerce::{
    DEFAULT_MAX_STOCK, max_stock_or_default, minimum_stock_for_capacity, parse_stock,
    stock_or_zero,
};
pub use normalize::normalize_row;
pub use schema::{CsvSchema, inventory_columns, registry_columns};

// === Pipeline ===
pub use pipeline::{Batch, UploadContext, ingest_csv, ingest_csv_file, normalize_rows};

// === Upload Control ===
pub use upload::{CsvUploader, UploadOutcome, UploadState};

// === Templates ===
pub use template::{template_csv, template_file, template_file_name};
