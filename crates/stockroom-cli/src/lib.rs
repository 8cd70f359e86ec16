//! Library side of the `stockroom` command-line tool.

pub mod logging;
pub mod settings;
pub mod workflow;
