//! CSV tokenizing for uploaded files.

use std::collections::BTreeMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;
use super::row::RawRow;

/// Maximum file size accepted for upload (50 MB).
pub const MAX_UPLOAD_FILE_SIZE: u64 = 50 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header plus non-empty data rows of an upload.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: CsvHeaders,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_UPLOAD_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 input, which would otherwise tokenize into garbage.
///
/// A UTF-8 BOM is fine and is stripped by [`read_csv_table`].
pub fn validate_encoding(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        });
    }
    Ok(())
}

/// Tokenizes comma-separated text into a header and keyed data rows.
///
/// - The first line names the columns.
/// - Lines whose cells are all blank are skipped and do not get a row number.
/// - Short rows are padded with blanks; rows with more cells than the header
///   are a structural error.
pub fn read_csv_table(bytes: &[u8]) -> Result<CsvTable> {
    validate_encoding(bytes)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = CsvHeaders::new(reader.headers()?.iter());
    if headers.is_blank() {
        return Err(IngestError::csv_parse("missing header row"));
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::csv_parse(format!(
                "line {line} has {} fields but the header has {}",
                record.len(),
                headers.len()
            )));
        }
        rows.push(keyed_row(rows.len(), &headers, &record));
    }

    tracing::trace!(columns = headers.len(), rows = rows.len(), "tokenized csv");
    Ok(CsvTable { headers, rows })
}

fn keyed_row(index: usize, headers: &CsvHeaders, record: &StringRecord) -> RawRow {
    let mut cells = BTreeMap::new();
    for (idx, column) in headers.columns.iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        let value = record.get(idx).unwrap_or("");
        // First occurrence wins for duplicated column names.
        cells
            .entry(column.clone())
            .or_insert_with(|| value.to_string());
    }
    RawRow::new(index, cells)
}
