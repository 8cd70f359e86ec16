//! Logging goes to the configured writer and redacts values by default.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use stockroom_cli::logging::{LogConfig, LogFormat, init_logging_with_writer, redact_value};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn json_logs_redact_product_values() {
    let captured = Captured::default();
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_log_file(None)
        .with_log_data(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, captured.clone());

    tracing::info!(target: "stockroom_cli", name = redact_value("Ethiopian Coffee"), "merging");
    tracing::debug!(target: "stockroom_cli", "hidden at info");

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("[REDACTED]"), "{output}");
    assert!(!output.contains("Ethiopian Coffee"));
    assert!(!output.contains("hidden at info"));
}
