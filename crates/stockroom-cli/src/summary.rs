use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use stockroom_cli::workflow::{FileUpload, UploadRun};
use stockroom_ingest::{IngestErrorKind, UploadOutcome};
use stockroom_model::{
    EXPIRY_NOT_APPLICABLE, Inventory, InventorySummary, ProductRecord, StockStatus,
};

/// What to show of an inventory and how to judge expiry.
pub struct InventoryView<'a> {
    pub today: NaiveDate,
    pub expiry_window_days: i64,
    pub search: Option<&'a str>,
}

pub fn print_upload_summary(run: &UploadRun, view: &InventoryView<'_>) {
    println!("{}", upload_table(&run.files));
    println!(
        "Uploaded {} products from {} of {} files",
        run.uploaded_records(),
        run.files.iter().filter(|f| f.outcome.is_success()).count(),
        run.files.len()
    );
    println!();
    print_inventory(&run.inventory, view);
}

pub fn print_inventory(inventory: &Inventory, view: &InventoryView<'_>) {
    let summary = inventory.summary(view.today, view.expiry_window_days);
    println!("{}", overview_table(&summary));
    let products = match view.search {
        Some(term) => inventory.search(term),
        None => inventory.iter().collect(),
    };
    if let Some(term) = view.search {
        println!("{} of {} products match \"{term}\"", products.len(), inventory.len());
    }
    if products.is_empty() {
        println!("No products to show.");
        return;
    }
    println!("{}", inventory_table(&products, view));
}

fn upload_table(files: &[FileUpload]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Result"),
        header_cell("Products"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in files {
        let name = file.path.display().to_string();
        let row = match &file.outcome {
            UploadOutcome::Uploaded { count } => vec![
                Cell::new(name),
                Cell::new("uploaded")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                Cell::new(count),
                dim_cell("-"),
            ],
            UploadOutcome::Failed { kind, message } => vec![
                Cell::new(name),
                Cell::new(failure_label(*kind))
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                Cell::new(message),
            ],
        };
        table.add_row(row);
    }
    table
}

fn failure_label(kind: IngestErrorKind) -> &'static str {
    match kind {
        IngestErrorKind::FileType => "wrong file type",
        IngestErrorKind::Parse => "parse error",
        IngestErrorKind::Validation => "invalid rows",
    }
}

fn overview_table(summary: &InventorySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Items"),
        header_cell("Critical"),
        header_cell("Low Stock"),
        header_cell("Expiring Soon"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_items).add_attribute(Attribute::Bold),
        count_cell(summary.critical_items, Color::Red),
        count_cell(summary.low_stock_items, Color::Yellow),
        count_cell(summary.expiring_items, Color::Magenta),
    ]);
    table
}

fn inventory_table(products: &[&ProductRecord], view: &InventoryView<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Product"),
        header_cell("Category"),
        header_cell("Stock"),
        header_cell("Level"),
        header_cell("Location"),
        header_cell("Expiry"),
        header_cell("Status"),
        header_cell("Restock"),
    ]);
    apply_inventory_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 8, CellAlignment::Right);
    for product in products {
        table.add_row(vec![
            Cell::new(product.id.as_str()),
            Cell::new(&product.name),
            Cell::new(&product.category),
            Cell::new(format!(
                "{} / {} (min {})",
                product.current_stock, product.max_stock, product.minimum_stock
            )),
            Cell::new(format!("{:.0}%", product.stock_level_percent())),
            Cell::new(&product.location),
            expiry_cell(product, view),
            status_cell(product.status),
            match product.restock_quantity() {
                Some(quantity) => Cell::new(format!("+{quantity}")).fg(Color::Yellow),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

fn expiry_cell(product: &ProductRecord, view: &InventoryView<'_>) -> Cell {
    if product.expiry_date == EXPIRY_NOT_APPLICABLE {
        return dim_cell(EXPIRY_NOT_APPLICABLE);
    }
    if product.is_expiring_soon(view.today, view.expiry_window_days) {
        Cell::new(&product.expiry_date)
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(&product.expiry_date)
    }
}

fn status_cell(status: StockStatus) -> Cell {
    match status {
        StockStatus::InStock => Cell::new(status).fg(Color::Green),
        StockStatus::LowStock => Cell::new(status).fg(Color::Yellow),
        StockStatus::Critical => Cell::new(status)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_inventory_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 9 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> InventoryView<'static> {
        InventoryView {
            today: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            expiry_window_days: 30,
            search: None,
        }
    }

    #[test]
    fn inventory_table_lists_every_product() {
        let inventory = Inventory::fallback();
        let products: Vec<&ProductRecord> = inventory.iter().collect();
        let rendered = inventory_table(&products, &view()).to_string();
        for product in &products {
            assert!(rendered.contains(product.id.as_str()), "{rendered}");
        }
        assert!(rendered.contains("Critical"));
    }

    #[test]
    fn overview_shows_counts() {
        let summary = InventorySummary {
            total_items: 4,
            critical_items: 1,
            low_stock_items: 1,
            expiring_items: 2,
        };
        let rendered = overview_table(&summary).to_string();
        assert!(rendered.contains("Total Items"));
        assert!(rendered.contains('4'));
    }
}
