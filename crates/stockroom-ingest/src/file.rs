//! The file handed over by the file picker.

use std::path::Path;

use crate::csv::check_file_size;
use crate::error::{IngestError, Result};

pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// A user-selected file: its name, declared media type and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub media_type: Option<String>,
    pub contents: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Reads a file from disk. The name is the final path component; no media
    /// type is declared.
    ///
    /// The name is checked with [`check_path_type`] before the file system is
    /// touched, so a non-CSV path fails as a file type error even when it
    /// does not exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = check_path_type(path)?;
        check_file_size(path)?;
        let contents = std::fs::read(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(name, contents))
    }

    /// True when the media type essence is `text/csv` or the name ends in
    /// `.csv` (both case-insensitive).
    pub fn is_csv(&self) -> bool {
        let declared = self.media_type.as_deref().is_some_and(|media_type| {
            media_type
                .split(';')
                .next()
                .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(CSV_MEDIA_TYPE))
        });
        declared || has_csv_extension(&self.name)
    }
}

fn has_csv_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Rejects anything that is not declared or named as CSV, before parsing.
pub fn check_file_type(file: &UploadFile) -> Result<()> {
    if file.is_csv() {
        return Ok(());
    }
    Err(IngestError::InvalidFileType {
        name: file.name.clone(),
        media_type: file.media_type.clone(),
    })
}

/// Rejects a path whose file name is not `.csv`, without reading it.
/// Returns the file name on success.
pub fn check_path_type(path: &Path) -> Result<String> {
    let name = display_name(path);
    if has_csv_extension(&name) {
        return Ok(name);
    }
    Err(IngestError::InvalidFileType {
        name,
        media_type: None,
    })
}
