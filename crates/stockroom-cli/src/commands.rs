use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use stockroom_cli::logging::REDACTED_VALUE;
use stockroom_cli::settings::{Settings, resolve_settings_path, write_default_settings};
use stockroom_cli::workflow::{
    UploadRun, starting_inventory, upload_files, write_inventory, write_template,
};
use stockroom_ingest::{CsvSchema, UploadContext, template_csv};
use stockroom_model::Inventory;

use crate::cli::{ConfigArgs, InventoryArgs, InventorySourceArgs, TemplateArgs, UploadArgs};
use crate::summary::apply_table_style;

pub fn run_upload(args: &UploadArgs, settings: &Settings) -> Result<UploadRun> {
    let span = info_span!("upload_run", files = args.files.len());
    let _guard = span.enter();
    let inventory = source_inventory(&args.source, settings)?;
    let ctx = UploadContext::now();
    let run = upload_files(inventory, &args.files, &ctx);
    info!(
        uploaded = run.uploaded_records(),
        total = run.inventory.len(),
        has_errors = run.has_errors,
        "upload run finished"
    );
    if let Some(path) = &args.output {
        write_inventory(&run.inventory, path)
            .with_context(|| format!("save inventory to {}", path.display()))?;
    }
    Ok(run)
}

/// Writes the template and returns where it went (`None` for stdout).
pub fn run_template(args: &TemplateArgs, settings: &Settings) -> Result<Option<PathBuf>> {
    let schema: CsvSchema = args
        .schema
        .map_or(settings.inventory.default_template, CsvSchema::from);
    if args.stdout {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", template_csv(schema)).context("write template to stdout")?;
        return Ok(None);
    }
    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let path = write_template(schema, &dir).context("write template")?;
    Ok(Some(path))
}

pub fn run_inventory(args: &InventoryArgs, settings: &Settings) -> Result<Inventory> {
    source_inventory(&args.source, settings)
}

pub fn run_config(args: &ConfigArgs, settings: &Settings, explicit: Option<&Path>) -> Result<()> {
    if args.write_defaults {
        let (path, written) = write_default_settings(explicit).context("write settings")?;
        if written {
            println!("Wrote default settings to {}", path.display());
        } else {
            println!("Settings file already exists at {}", path.display());
        }
    }
    let path = resolve_settings_path(explicit)
        .map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string());
    let session = &settings.session;
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    apply_table_style(&mut table);
    table.add_row(vec!["settings file".to_string(), path]);
    table.add_row(vec!["api base url".to_string(), session.api_base_url.clone()]);
    table.add_row(vec![
        "token".to_string(),
        if session.is_authenticated() {
            REDACTED_VALUE.to_string()
        } else {
            "(not logged in)".to_string()
        },
    ]);
    table.add_row(vec![
        "role".to_string(),
        match session.role {
            Some(role) => role.to_string(),
            None => "-".to_string(),
        },
    ]);
    table.add_row(vec![
        "email".to_string(),
        session.email.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "expiry window (days)".to_string(),
        settings.inventory.expiry_window_days.to_string(),
    ]);
    table.add_row(vec![
        "sample products".to_string(),
        settings.inventory.use_fallback.to_string(),
    ]);
    table.add_row(vec![
        "default template".to_string(),
        settings.inventory.default_template.to_string(),
    ]);
    println!("{table}");
    Ok(())
}

fn source_inventory(source: &InventorySourceArgs, settings: &Settings) -> Result<Inventory> {
    let use_fallback = settings.inventory.use_fallback && !source.no_fallback;
    starting_inventory(source.inventory.as_deref(), use_fallback).context("load inventory")
}
