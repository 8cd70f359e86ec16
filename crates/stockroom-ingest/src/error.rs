//! Error types for CSV bulk uploads.

use std::path::PathBuf;
use thiserror::Error;

/// The three ways an upload attempt can fail.
///
/// Every kind is terminal for the attempt and leaves the inventory untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestErrorKind {
    /// The selected file is not a CSV file.
    FileType,
    /// The file could not be read or tokenized.
    Parse,
    /// Well-formed rows with missing or invalid values.
    Validation,
}

/// Errors that can occur while ingesting an uploaded CSV file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File Selection Errors ===
    /// Neither the media type nor the file name says CSV.
    #[error("invalid file type: {name} is not a CSV file")]
    InvalidFileType {
        name: String,
        media_type: Option<String>,
    },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the maximum upload size.
    #[error("file {path} is too large ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// The delimited text could not be tokenized.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Byte order mark of an encoding other than UTF-8.
    #[error("unsupported encoding {encoding}, expected UTF-8")]
    UnsupportedEncoding { encoding: &'static str },

    // === Validation Errors ===
    /// A row lacks a value for one or more required columns.
    #[error("Missing required fields in row {row}: {}", fields.join(", "))]
    MissingRequiredField { row: usize, fields: Vec<String> },

    /// A row names a status outside In Stock / Low Stock / Critical.
    #[error("Invalid status '{value}' in row {row}")]
    InvalidStatus { row: usize, value: String },

    /// A row repeats an identifier already used earlier in the same file.
    #[error("Duplicate product id '{id}' in row {row}")]
    DuplicateId { row: usize, id: String },
}

impl IngestError {
    pub fn kind(&self) -> IngestErrorKind {
        match self {
            IngestError::InvalidFileType { .. } => IngestErrorKind::FileType,
            IngestError::FileNotFound { .. }
            | IngestError::FileRead { .. }
            | IngestError::FileTooLarge { .. }
            | IngestError::CsvParse { .. }
            | IngestError::UnsupportedEncoding { .. } => IngestErrorKind::Parse,
            IngestError::MissingRequiredField { .. }
            | IngestError::InvalidStatus { .. }
            | IngestError::DuplicateId { .. } => IngestErrorKind::Validation,
        }
    }

    /// 1-based data row the error refers to, for validation failures.
    pub fn row(&self) -> Option<usize> {
        match self {
            IngestError::MissingRequiredField { row, .. }
            | IngestError::InvalidStatus { row, .. }
            | IngestError::DuplicateId { row, .. } => Some(*row),
            _ => None,
        }
    }

    pub(crate) fn csv_parse(message: impl Into<String>) -> Self {
        IngestError::CsvParse {
            message: message.into(),
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::csv_parse(err.to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
