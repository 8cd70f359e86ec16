//! Logging setup on top of `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: uploads that could not be merged
//! - `warn`: rejected files, unreadable inventory sources, settings problems
//! - `info`: upload progress and merged record counts
//! - `debug`: detected layouts, settings paths
//! - `trace`: per-record values (names and ids only with `--log-data`)
//!
//! # Usage
//!
//! ```ignore
//! use stockroom_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default().with_log_data(true);
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged in place of product values and credentials.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const WORKSPACE_TARGETS: [&str; 3] = ["stockroom_cli", "stockroom_ingest", "stockroom_model"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Returns true if product values may appear in logs.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the value when `--log-data` is on, otherwise [`REDACTED_VALUE`].
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// What the global flags ask of the log output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may replace the level filter.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Whether product values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    /// One JSON object per event, plus span close events with timings.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Install the global subscriber writing to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    tracing_subscriber::registry()
        .with(output_layer(config, writer))
        .with(build_env_filter(config.level_filter, config.use_env_filter))
        .init();
}

/// Formatting layer for `config.format`. Events carry no timestamp or
/// module path.
fn output_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer().with_writer(writer).with_target(false);
    match config.format {
        LogFormat::Json => base.json().with_span_events(FmtSpan::CLOSE).boxed(),
        LogFormat::Compact => base
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty => base.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

fn build_env_filter(level_filter: LevelFilter, use_env_filter: bool) -> EnvFilter {
    if use_env_filter && let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(default_directives(level_filter))
}

/// Workspace crates at `level_filter`, everything else at warn.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = String::from("warn");
    for target in WORKSPACE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn compact_output_is_plain_without_target() {
        let buffer = Buffer::default();
        let config = LogConfig::default()
            .with_format(LogFormat::Compact)
            .with_ansi(false);
        let subscriber = tracing_subscriber::registry().with(output_layer(&config, buffer.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(count = 3, "rejected upload");
        });

        let output = buffer.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("rejected upload"), "{output}");
        assert!(output.contains("count=3"), "{output}");
        assert!(!output.contains("stockroom_cli"), "{output}");
        assert!(!output.contains('\u{1b}'), "{output}");
    }

    #[test]
    fn log_file_receives_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        let config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_log_file(Some(path.clone()));
        let subscriber =
            tracing_subscriber::registry().with(output_layer(&config, Mutex::new(file)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(merged = 2, "merged batch");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        let first_line = written.lines().next().unwrap();
        let event: serde_json::Value = serde_json::from_str(first_line).unwrap();
        assert_eq!(event["fields"]["message"], "merged batch");
        assert_eq!(event["fields"]["merged"], 2);
    }

    #[test]
    fn directives_cover_workspace_crates() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,stockroom_cli=debug,stockroom_ingest=debug,stockroom_model=debug"
        );
        assert_eq!(
            default_directives(LevelFilter::OFF),
            "warn,stockroom_cli=off,stockroom_ingest=off,stockroom_model=off"
        );
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("Ethiopian Coffee"), REDACTED_VALUE);
    }
}
