//! The upload pipeline: type check, tokenize, detect layout, normalize.

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info_span};

use stockroom_model::{ProductRecord, format_iso_date};

use crate::csv::{RawRow, read_csv_table};
use crate::error::{IngestError, Result};
use crate::file::{UploadFile, check_file_type};
use crate::normalize::normalize_row;
use crate::schema::CsvSchema;

/// Clock readings taken once per upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadContext {
    /// Milliseconds since the Unix epoch, used for synthesized ids and barcodes.
    pub upload_millis: i64,
    /// Default for missing dates.
    pub today: NaiveDate,
}

impl UploadContext {
    pub fn new(upload_millis: i64, today: NaiveDate) -> Self {
        Self {
            upload_millis,
            today,
        }
    }

    /// Current UTC time.
    pub fn now() -> Self {
        let now = Utc::now();
        Self::new(now.timestamp_millis(), now.date_naive())
    }

    pub fn today_iso(&self) -> String {
        format_iso_date(self.today)
    }
}

/// Records produced by a single upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub schema: CsvSchema,
    pub records: Vec<ProductRecord>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

/// Ingests one uploaded file into a batch.
///
/// All or nothing: the first failing row aborts the whole file and no records
/// are returned.
pub fn ingest_csv(file: &UploadFile, ctx: &UploadContext) -> Result<Batch> {
    check_file_type(file)?;
    ingest_checked(file, ctx)
}

/// Reads `path` from disk and ingests it.
pub fn ingest_csv_file(path: &Path, ctx: &UploadContext) -> Result<Batch> {
    let file = UploadFile::from_path(path)?;
    ingest_checked(&file, ctx)
}

/// Tokenize, detect and normalize a file whose type was already accepted.
pub(crate) fn ingest_checked(file: &UploadFile, ctx: &UploadContext) -> Result<Batch> {
    let span = info_span!("ingest", file = %file.name, bytes = file.contents.len());
    let _guard = span.enter();

    let table = read_csv_table(&file.contents)?;
    let schema = CsvSchema::detect(&table.headers);
    debug!(%schema, rows = table.len(), "detected csv layout");

    let records = normalize_rows(schema, &table.rows, ctx)?;
    Ok(Batch { schema, records })
}

/// Normalizes rows of a known layout, enforcing unique ids within the batch.
pub fn normalize_rows(
    schema: CsvSchema,
    rows: &[RawRow],
    ctx: &UploadContext,
) -> Result<Vec<ProductRecord>> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let record = normalize_row(schema, row, ctx)?;
        if !seen.insert(record.id.clone()) {
            return Err(IngestError::DuplicateId {
                row: row.number(),
                id: record.id.to_string(),
            });
        }
        records.push(record);
    }
    Ok(records)
}
