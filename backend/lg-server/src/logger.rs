//! Process-wide `log` backend built on fern.
//!
//! One line per record: `[{rfc3339} - {LEVEL}] {message} [{file}:{line}]`.
//! Colors are only applied on stdout; files always get plain text.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record};

/// sqlx reports every statement at info
const SQLX_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the global logger. `log_file = None` writes to stdout.
pub fn initialize(
    log_level: lg_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = log_level.0;
    let root = Dispatch::new()
        .level(level)
        .level_for("sqlx", SQLX_LEVEL);

    let sink = match &log_file {
        Some(path) => plain_dispatch().chain(open_log_file(path)?),
        None if colored => colored_dispatch().chain(std::io::stdout()),
        None => plain_dispatch().chain(std::io::stdout()),
    };

    root.chain(sink).apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to install logger: {e}"),
    })?;

    let target = log_file
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    log::info!("Logging at {} to {}", level, target);

    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| ServerError::Logger {
            message: format!("Cannot create log directory {}: {}", dir.display(), e),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Cannot open log file {}: {}", path.display(), e),
        })
}

fn plain_dispatch() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!("{}", line(record.level(), message, record)))
    })
}

fn colored_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new().format(move |out, message, record| {
        out.finish(format_args!(
            "{}",
            line(colors.color(record.level()), message, record)
        ))
    })
}

fn line(level: impl Display, message: &std::fmt::Arguments<'_>, record: &Record<'_>) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    )
}
