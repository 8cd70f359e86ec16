//! Inventory loading and the multi-file upload run behind the commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, error, info, info_span, trace};

use stockroom_ingest::{
    CsvSchema, CsvUploader, UploadContext, UploadOutcome, template_csv, template_file_name,
};
use stockroom_model::{FetchState, Inventory, Notification, NotificationKind, Notifier};

use crate::logging::redact_value;

/// Notifier that logs every notification and keeps it for the summary.
#[derive(Debug, Default)]
pub struct LogNotifier {
    notifications: Vec<Notification>,
}

impl LogNotifier {
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
    }
}

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => error!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            NotificationKind::Success | NotificationKind::Info => info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
        self.notifications.push(notification);
    }
}

/// Read a JSON product list. Failures become [`FetchState::Error`].
pub fn load_inventory(path: &Path) -> FetchState<Inventory> {
    let result = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))
        .and_then(|content| {
            serde_json::from_str::<Inventory>(&content)
                .with_context(|| format!("parse {}", path.display()))
        });
    FetchState::from_result(result.map_err(|error| format!("{error:#}")))
}

/// The product list to start from.
///
/// Loaded data is used as is. With no data yet, the sample products (or an
/// empty list, with `use_fallback` off) stand in. A source that failed to
/// load is an error so that nothing is merged into, or written over, it.
pub fn resolve_inventory(state: FetchState<Inventory>, use_fallback: bool) -> Result<Inventory> {
    match state {
        FetchState::Ready(inventory) => Ok(inventory),
        FetchState::Error { message } => bail!("inventory unavailable: {message}"),
        FetchState::Loading if use_fallback => {
            debug!("no inventory source, starting from sample products");
            Ok(Inventory::fallback())
        }
        FetchState::Loading => Ok(Inventory::default()),
    }
}

/// Load from `path` when given, then apply [`resolve_inventory`].
pub fn starting_inventory(path: Option<&Path>, use_fallback: bool) -> Result<Inventory> {
    let state = match path {
        Some(path) => load_inventory(path),
        None => FetchState::Loading,
    };
    resolve_inventory(state, use_fallback)
}

/// Result of one file within an upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub path: PathBuf,
    pub outcome: UploadOutcome,
}

/// Result of uploading several files into one inventory.
#[derive(Debug)]
pub struct UploadRun {
    pub inventory: Inventory,
    pub files: Vec<FileUpload>,
    pub notifications: Vec<Notification>,
    pub has_errors: bool,
}

impl UploadRun {
    pub fn uploaded_records(&self) -> usize {
        self.files
            .iter()
            .map(|file| match file.outcome {
                UploadOutcome::Uploaded { count } => count,
                UploadOutcome::Failed { .. } => 0,
            })
            .sum()
    }
}

/// Upload `paths` in order, merging each successful batch into `inventory`.
///
/// A failed file leaves the inventory as it was and the run continues with
/// the next file.
pub fn upload_files(inventory: Inventory, paths: &[PathBuf], ctx: &UploadContext) -> UploadRun {
    let mut inventory = inventory;
    let mut uploader = CsvUploader::new(LogNotifier::default());
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let span = info_span!("upload", file = %path.display());
        let _guard = span.enter();
        let outcome = uploader.upload_path(path, ctx, |records| {
            for record in &records {
                trace!(
                    id = redact_value(record.id.as_str()),
                    name = redact_value(&record.name),
                    status = %record.status,
                    "merging record"
                );
            }
            let merged = inventory.merge(records);
            info!(merged, total = inventory.len(), "merged batch");
        });
        files.push(FileUpload {
            path: path.clone(),
            outcome,
        });
    }

    let has_errors = files.iter().any(|file| !file.outcome.is_success());
    UploadRun {
        inventory,
        files,
        notifications: uploader.into_notifier().into_notifications(),
        has_errors,
    }
}

/// Write the product list as pretty JSON.
pub fn write_inventory(inventory: &Inventory, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(inventory).context("serialize inventory")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), products = inventory.len(), "wrote inventory");
    Ok(())
}

/// Write the template for `schema` into `dir` under its fixed file name.
pub fn write_template(schema: CsvSchema, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(template_file_name(schema));
    fs::write(&path, template_csv(schema))
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), %schema, "wrote template");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_inventory_file_is_an_error_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_inventory(&dir.path().join("absent.json"));
        assert!(state.error_message().is_some_and(|m| m.contains("absent.json")));
    }

    #[test]
    fn error_state_never_falls_back() {
        for use_fallback in [true, false] {
            let err = resolve_inventory(FetchState::error("offline"), use_fallback).unwrap_err();
            assert!(err.to_string().contains("offline"), "{err}");
        }
    }

    #[test]
    fn loading_state_uses_fallback_setting() {
        let samples = resolve_inventory(FetchState::Loading, true).unwrap();
        assert_eq!(samples, Inventory::fallback());
        assert!(resolve_inventory(FetchState::Loading, false).unwrap().is_empty());
    }

    #[test]
    fn ready_state_wins_over_fallback() {
        let inventory = resolve_inventory(FetchState::Ready(Inventory::default()), true).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn log_notifier_keeps_notifications() {
        let mut notifier = LogNotifier::default();
        notifier.notify(Notification::info("Heads up", "Nothing to do"));
        assert_eq!(notifier.notifications().len(), 1);
        assert_eq!(notifier.into_notifications()[0].title, "Heads up");
    }
}
