//! The bulk-upload control.
//!
//! State machine: `Idle -> Uploading -> {Success, Error}`. Selecting another
//! file returns to `Idle` before the next attempt starts. Uploads run to
//! completion inside [`CsvUploader::upload`], and the `&mut self` receiver
//! keeps a second upload from starting while one is in flight.

use std::path::Path;

use tracing::{info, warn};

use stockroom_model::{Notification, Notifier, ProductRecord};

use crate::error::{IngestError, IngestErrorKind};
use crate::file::{UploadFile, check_file_type};
use crate::pipeline::{UploadContext, ingest_checked};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Success {
        count: usize,
    },
    Error {
        message: String,
    },
}

/// What happened to one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { count: usize },
    Failed { kind: IngestErrorKind, message: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

pub struct CsvUploader<N: Notifier> {
    notifier: N,
    state: UploadState,
    selection: Option<String>,
}

impl<N: Notifier> CsvUploader<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            state: UploadState::Idle,
            selection: None,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// True while [`upload`](Self::upload) is running. Between calls the
    /// state is always settled, so callers holding the uploader see `false`.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, UploadState::Uploading)
    }

    /// Name of the file still shown in the picker. Cleared after a successful
    /// upload so the same file can be selected again.
    pub fn selected_file(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Runs one upload attempt.
    ///
    /// On success `on_uploaded` receives the whole batch exactly once. On any
    /// failure it is not called and one destructive notification is emitted.
    pub fn upload<F>(
        &mut self,
        file: &UploadFile,
        ctx: &UploadContext,
        on_uploaded: F,
    ) -> UploadOutcome
    where
        F: FnOnce(Vec<ProductRecord>),
    {
        self.selection = Some(file.name.clone());
        self.state = UploadState::Idle;

        if let Err(err) = check_file_type(file) {
            warn!(file = %file.name, media_type = ?file.media_type, "rejected non-CSV upload");
            return self.reject(&err);
        }

        self.state = UploadState::Uploading;
        match ingest_checked(file, ctx) {
            Ok(batch) => {
                let count = batch.len();
                info!(file = %file.name, schema = %batch.schema, count, "csv upload succeeded");
                on_uploaded(batch.into_records());
                self.notifier.notify(Notification::success(
                    "Success",
                    format!("{count} products uploaded successfully"),
                ));
                self.selection = None;
                self.state = UploadState::Success { count };
                UploadOutcome::Uploaded { count }
            }
            Err(err) => {
                warn!(file = %file.name, error = %err, "csv upload failed");
                self.fail(&err)
            }
        }
    }

    /// Reads `path` from disk and uploads it. A path not named `.csv` is
    /// rejected without being read; a file that cannot be read fails like a
    /// file that cannot be parsed.
    pub fn upload_path<F>(
        &mut self,
        path: &Path,
        ctx: &UploadContext,
        on_uploaded: F,
    ) -> UploadOutcome
    where
        F: FnOnce(Vec<ProductRecord>),
    {
        match UploadFile::from_path(path) {
            Ok(file) => self.upload(&file, ctx, on_uploaded),
            Err(err) => {
                self.selection = Some(path.display().to_string());
                self.state = UploadState::Idle;
                if err.kind() == IngestErrorKind::FileType {
                    warn!(path = %path.display(), "rejected non-CSV upload");
                    return self.reject(&err);
                }
                warn!(path = %path.display(), error = %err, "could not read upload");
                self.fail(&err)
            }
        }
    }

    /// Wrong file type: notify and stay idle with the selection kept.
    fn reject(&mut self, err: &IngestError) -> UploadOutcome {
        self.notifier.notify(failure_notification(err));
        failed(err)
    }

    fn fail(&mut self, err: &IngestError) -> UploadOutcome {
        self.notifier.notify(failure_notification(err));
        self.state = UploadState::Error {
            message: err.to_string(),
        };
        failed(err)
    }
}

fn failed(err: &IngestError) -> UploadOutcome {
    UploadOutcome::Failed {
        kind: err.kind(),
        message: err.to_string(),
    }
}

fn failure_notification(err: &IngestError) -> Notification {
    match err.kind() {
        IngestErrorKind::FileType => {
            Notification::error("Invalid file type", "Please upload a CSV file")
        }
        IngestErrorKind::Parse => {
            Notification::error("Parse Error", format!("Failed to parse CSV file ({err})"))
        }
        IngestErrorKind::Validation => Notification::error("Upload Error", err.to_string()),
    }
}
