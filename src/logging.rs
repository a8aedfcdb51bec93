#![cfg(feature = "std")]

use std::env;
use log::{self, Level, LevelFilter, Metadata, Record};

/// Writes `mnk: <level>: <message>` lines to stderr, below the board.
struct TerminalLogger;

impl log::Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: TerminalLogger = TerminalLogger;

/// Environment variable holding the log level (`error` .. `trace`, or `quiet`).
pub const LOG_ENV: &str = "MNK_LOG";

/// Map a `MNK_LOG` value to a filter. `quiet` and `off` silence everything;
/// unset or unrecognised values fall back to `info`.
pub(crate) fn level_from(value: Option<&str>) -> LevelFilter {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("quiet") => LevelFilter::Off,
        Some(v) => v.parse().unwrap_or(LevelFilter::Info),
        None => LevelFilter::Info,
    }
}

/// The module path only shows up at `debug` and `trace`, where it helps to
/// tell board records from engine records.
pub(crate) fn format_record(level: Level, target: &str, args: impl std::fmt::Display) -> String {
    let tag = level.as_str().to_ascii_lowercase();
    match level {
        Level::Debug | Level::Trace => format!("mnk: {tag}: [{target}] {args}"),
        _ => format!("mnk: {tag}: {args}"),
    }
}

/// Install the stderr logger at the level named by `MNK_LOG`. Calling it twice
/// keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
