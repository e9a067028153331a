use crate::error::{Result as ServerErrorResult, ServerError};

use aw_config::LogLevel;

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Where log lines go
enum Sink {
    /// Append to a file; lines carry the source location
    File(PathBuf, File),
    /// Standard output, optionally with ANSI level colors
    Stdout { colored: bool },
}

impl Sink {
    fn open(log_file: Option<PathBuf>, colored: bool) -> ServerErrorResult<Self> {
        let Some(path) = log_file else {
            return Ok(Sink::Stdout { colored });
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

        Ok(Sink::File(path, file))
    }

    fn describe(&self) -> String {
        match self {
            Sink::File(path, _) => format!("file={}", path.display()),
            Sink::Stdout { colored: true } => "stdout (colored)".to_string(),
            Sink::Stdout { colored: false } => "stdout".to_string(),
        }
    }

    fn into_dispatch(self) -> Dispatch {
        match self {
            Sink::File(_, file) => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}:{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0),
                    ))
                })
                .chain(file),
            Sink::Stdout { colored: true } => {
                let colors = ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red);

                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!(
                            "[{} - {}] {} [{}]",
                            humantime::format_rfc3339(SystemTime::now()),
                            colors.color(record.level()),
                            message,
                            record.target(),
                        ))
                    })
                    .chain(std::io::stdout())
            }
            Sink::Stdout { colored: false } => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.target(),
                    ))
                })
                .chain(std::io::stdout()),
        }
    }
}

/// Install the global `log` backend.
///
/// `log_file` of `None` writes to stdout; `colored` only applies there.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = log_level.0;
    let sink = Sink::open(log_file, colored)?;
    let description = sink.describe();

    Dispatch::new()
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn.min(level))
        .level_for("hyper", LevelFilter::Warn.min(level))
        .chain(sink.into_dispatch())
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={:?}, {}", level, description);
    Ok(())
}
