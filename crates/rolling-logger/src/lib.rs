//! Rolling Logger
//!
//! Process-wide file logging for Tauri apps, built on `tracing`.
//! Records from both `tracing` and `log` macros end up in
//! `<log_dir>/<app_name>.log`, which rolls over to `<app_name>.log.1`
//! past a size limit. The latest lines are also kept in memory.

mod sink;

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

pub use sink::RollingSink;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Size at which the log file is rolled over
    pub max_file_bytes: u64,
    /// Number of recent lines kept in memory
    pub ring_capacity: usize,
    /// Most verbose level recorded
    pub level: log::LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            ring_capacity: 500,
            level: log::LevelFilter::Info,
        }
    }
}

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    AlreadyInitialized,
    NotInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(err) => write!(f, "Failed to open log file: {}", err),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::Io(err)
    }
}

/// Local wall-clock timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

static SINK: OnceLock<RollingSink> = OnceLock::new();

/// Initialize with default settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

/// Install the global subscriber writing to `<log_dir>/<app_name>.log`
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    if SINK.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let path = log_dir.as_ref().join(format!("{}.log", app_name));
    let sink = RollingSink::open(path.clone(), &config)?;

    tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_timer(LocalTimer)
        .with_max_level(to_level_filter(config.level))
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let _ = SINK.set(sink);
    tracing::info!("{} logging to {}", app_name, path.display());
    Ok(())
}

fn to_level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn ensure_init() -> Result<(), LoggerError> {
    SINK.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::error!("{}", message);
    Ok(())
}
