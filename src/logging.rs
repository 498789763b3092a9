//! Bridges the `log` facade to the Workers console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use worker::{console_debug, console_error, console_log, console_warn};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error => console_error!("[{}] {}", record.target(), record.args()),
            Level::Warn => console_warn!("[{}] {}", record.target(), record.args()),
            Level::Info => console_log!("[{}] {}", record.target(), record.args()),
            Level::Debug | Level::Trace => {
                console_debug!("[{}] {}", record.target(), record.args())
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Isolates are reused across requests, so
/// later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
