use crate::config::LoggingConfig;
use std::{
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

// -------- level helpers --------
fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

// -------- rotating writer for files --------
#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

#[derive(Clone)]
struct RotWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

/// Create a rotating writer for log files, ensuring the parent directory exists.
fn create_rotating_writer(
    log_path: &Path,
    max_backups: usize,
    max_bytes: usize,
) -> Result<RotWriter, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(FileLimit::MaxFiles(max_backups)),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

// -------- public init --------

/// Initialize logging from a configuration: a console layer plus an
/// optional rotating-file layer. Safe to call more than once; only the
/// first call installs the global subscriber.
pub fn init_logging(cfg: &LoggingConfig) {
    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    let console_layer = parse_tracing_level(&cfg.console_level).map(|lvl| {
        fmt::layer()
            .with_target(true)
            .with_filter(LevelFilter::from_level(lvl))
    });

    let file_layer = if cfg.file.is_empty() {
        None
    } else {
        let level_str = if cfg.file_level.is_empty() {
            &cfg.console_level
        } else {
            &cfg.file_level
        };
        let max_backups = cfg.max_backups.unwrap_or(10);
        let max_bytes = (cfg.max_size_mb.unwrap_or(10) as usize) * 1024 * 1024;

        match parse_tracing_level(level_str) {
            None => None,
            Some(lvl) => match create_rotating_writer(Path::new(&cfg.file), max_backups, max_bytes)
            {
                Ok(writer) => Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer)
                        .with_filter(LevelFilter::from_level(lvl)),
                ),
                Err(e) => {
                    eprintln!("Failed to open log file '{}': {}", cfg.file, e);
                    None
                }
            },
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("info"), Some(Level::INFO));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("error"), Some(Level::ERROR));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        // Unknown strings fall back to info
        assert_eq!(parse_tracing_level("verbose"), Some(Level::INFO));
    }

    #[test]
    fn rotating_writer_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let log_path = tmp.path().join("logs").join("app.log");
        let writer = create_rotating_writer(&log_path, 3, 1024).unwrap();
        drop(writer);
        assert!(log_path.parent().unwrap().exists());
    }
}
