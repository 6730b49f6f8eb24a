#![cfg(feature = "std")]

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "SEABATTLE_LOG";

/// Writes `LEVEL module: message` lines to stdout, with the crate prefix
/// trimmed from the target.
struct BoardLogger;

impl Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target
            .strip_prefix("seabattle::")
            .unwrap_or(target);
        // A closed stdout must not take the game down with it.
        let _ = writeln!(
            io::stdout().lock(),
            "{:<5} {}: {}",
            record.level(),
            module,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: BoardLogger = BoardLogger;

/// Parse a `SEABATTLE_LOG` value. Level names are case-insensitive and may
/// carry surrounding whitespace; anything unset or unrecognised means `info`.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stdout logger at the level named by `SEABATTLE_LOG`.
///
/// Returns `true` if this call installed it. Later calls leave the first
/// logger and its level in place and return `false`.
pub fn init_logging() -> bool {
    let level = log_level(env::var(LEVEL_VAR).ok().as_deref());
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}
