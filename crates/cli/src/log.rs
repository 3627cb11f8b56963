use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Entry {
    fn new(record: &Record) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }

    #[must_use]
    pub fn render(&self, style: Style) -> String {
        match style {
            Style::Plain => self.plain(),
            Style::Json => serde_json::to_string(self).unwrap_or_else(|_| self.plain()),
        }
    }

    fn plain(&self) -> String {
        format!("{} {:<5} {}", self.time, self.level, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Json,
}

static PLAIN_LOGGER: Logger = Logger {
    style: Style::Plain,
};
static JSON_LOGGER: Logger = Logger { style: Style::Json };

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(style: Style, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = match style {
        Style::Plain => &PLAIN_LOGGER,
        Style::Json => &JSON_LOGGER,
    };
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

struct Logger {
    style: Style,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Entry::new(record).render(self.style);
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
