//! CSV reading utilities.

mod header;
mod reader;
mod row;

pub use header::{CsvHeaders, normalize_header};
pub use reader::{
    CsvTable, MAX_UPLOAD_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_encoding,
};
pub use row::RawRow;
