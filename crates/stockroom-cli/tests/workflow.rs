//! Integration tests for multi-file uploads into one inventory.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use stockroom_cli::workflow::{
    load_inventory, starting_inventory, upload_files, write_inventory, write_template,
};
use stockroom_ingest::{CsvSchema, IngestErrorKind, UploadContext, UploadOutcome};
use stockroom_model::{Inventory, StockStatus};

fn ctx() -> UploadContext {
    UploadContext::new(
        1_714_608_000_000,
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
    )
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn uploads_merge_in_order_and_failures_leave_inventory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(
        &dir,
        "stock.csv",
        "name,category,currentStock\nTeff,Grains,180\nHoney,Food,5\n",
    );
    let invalid = write(&dir, "broken.csv", "name,category,currentStock\nSpice,,40\n");
    let wrong_type = write(&dir, "notes.txt", "name,category,currentStock\nA,B,1\n");
    let registry = write(
        &dir,
        "registry.csv",
        "productId,productName,categoryName,holdingCapacity\nPRD-9,Barley,Grains,250\n",
    );

    let paths = vec![good, invalid, wrong_type, registry];
    let run = upload_files(Inventory::default(), &paths, &ctx());

    assert!(run.has_errors);
    assert_eq!(run.uploaded_records(), 3);
    let names: Vec<&str> = run.inventory.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Teff", "Honey", "Barley"]);
    assert_eq!(run.inventory.products()[2].status, StockStatus::InStock);

    assert_eq!(run.files[0].outcome, UploadOutcome::Uploaded { count: 2 });
    assert!(matches!(
        run.files[1].outcome,
        UploadOutcome::Failed {
            kind: IngestErrorKind::Validation,
            ..
        }
    ));
    assert!(matches!(
        run.files[2].outcome,
        UploadOutcome::Failed {
            kind: IngestErrorKind::FileType,
            ..
        }
    ));

    let titles: Vec<&str> = run.notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Success", "Upload Error", "Invalid file type", "Success"]
    );
}

#[test]
fn clean_run_has_no_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "stock.csv", "name,category,currentStock\nTeff,Grains,180\n");
    let run = upload_files(Inventory::fallback(), &[path], &ctx());
    assert!(!run.has_errors);
    assert_eq!(run.inventory.len(), Inventory::fallback().len() + 1);
}

#[test]
fn merged_inventory_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(
        &dir,
        "registry.csv",
        "productId,productName,categoryName,holdingCapacity,product_barcode\n\
         PRD-1,Coffee,Beverages,1250,123456789012\n",
    );
    let run = upload_files(Inventory::fallback(), &[csv], &ctx());
    let json = dir.path().join("inventory.json");
    write_inventory(&run.inventory, &json).unwrap();

    let reloaded = load_inventory(&json).ready_or(Inventory::default());
    assert_eq!(reloaded, run.inventory);
    let details = reloaded.products().last().unwrap().details.as_ref().unwrap();
    assert_eq!(details.barcode, "123456789012");
}

#[test]
fn starting_inventory_honours_source_and_fallback() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(starting_inventory(None, true).unwrap(), Inventory::fallback());
    assert!(starting_inventory(None, false).unwrap().is_empty());

    let empty = write(&dir, "empty.json", "[]");
    assert!(starting_inventory(Some(&empty), true).unwrap().is_empty());
}

#[test]
fn unreadable_inventory_source_is_an_error_and_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "[{\"id\": \"INV-001\"},]";
    let broken = write(&dir, "inventory.json", contents);

    for use_fallback in [true, false] {
        let err = starting_inventory(Some(&broken), use_fallback).unwrap_err();
        assert!(format!("{err:#}").contains("inventory.json"), "{err:#}");
    }
    let missing = dir.path().join("absent.json");
    assert!(starting_inventory(Some(&missing), true).is_err());

    assert_eq!(fs::read_to_string(&broken).unwrap(), contents);
    assert!(!missing.exists());
}

#[test]
fn templates_are_written_under_fixed_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("templates");
    let simple = write_template(CsvSchema::Simple, &out).unwrap();
    let extended = write_template(CsvSchema::Extended, &out).unwrap();
    assert_eq!(simple.file_name().unwrap(), "inventory_template.csv");
    assert_eq!(extended.file_name().unwrap(), "product_template.csv");

    let run = upload_files(Inventory::default(), &[simple, extended], &ctx());
    assert!(!run.has_errors);
    assert_eq!(run.inventory.len(), 4);
}
