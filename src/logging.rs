//! Logger setup
//!
//! The TUI owns the terminal, so its log records go to a file. The one-shot
//! lookup command logs to stderr. `RUST_LOG` selects the filter.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};

use crate::error::SuggestError;

const LOG_DIR: &str = "lawgg-suggest";
const LOG_FILE: &str = "lawgg-suggest.log";
const DEFAULT_FILTER: &str = "info";

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Append log records to `path`, creating its directory if needed
pub fn init_file_logger(path: &Path) -> Result<(), SuggestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    init(Target::Pipe(Box::new(file)))
}

pub fn init_stderr_logger() -> Result<(), SuggestError> {
    init(Target::Stderr)
}

fn init(target: Target) -> Result<(), SuggestError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(Local::now(), record.level(), record.target(), record.args())
            )
        })
        .target(target)
        .try_init()
        .map_err(|e| SuggestError::Config(format!("logger already initialised: {}", e)))
}

fn format_line(
    time: DateTime<Local>,
    level: log::Level,
    target: &str,
    message: &fmt::Arguments<'_>,
) -> String {
    format!(
        "{} {:<5} {}: {}",
        time.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        message
    )
}
