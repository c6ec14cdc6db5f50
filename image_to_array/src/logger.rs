/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::{IsTerminal, Write};
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub mod color {
    pub const RESET: &str = "\x1b[0m";

    pub const GRAY: &str = "\x1b[38;5;243m";
    pub const RED: &str = "\x1b[38;5;1m";
    pub const GREEN: &str = "\x1b[38;5;46m";
    pub const YELLOW: &str = "\x1b[38;5;226m";
    pub const CYAN: &str = "\x1b[38;5;51m";
    pub const PURPLE: &str = "\x1b[38;5;91m";
}

/// Colored, timestamped log lines on stderr. Stdout is left for the output.
pub struct StderrLogger {
    start: Instant,
    colored: bool,
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        start: Instant::now(),
        colored: std::io::stderr().is_terminal(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Maps the number of `-v` flags to a level, starting from `warn`.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn level_tag(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::Error => ("erro", color::RED),
        Level::Warn => ("warn", color::YELLOW),
        Level::Info => ("info", color::GREEN),
        Level::Debug => ("dbug", color::CYAN),
        Level::Trace => ("trce", color::PURPLE),
    }
}

impl StderrLogger {
    fn format_line(&self, record: &Record) -> String {
        let module_path = record
            .module_path()
            .and_then(|p| p.rsplit("::").next())
            .unwrap_or(record.target());

        let digits = 5;

        let elapsed = self.start.elapsed();
        let subsecond = elapsed.subsec_nanos() / 10u32.pow(9 - digits);

        let seconds_total = elapsed.as_secs();
        let seconds = seconds_total % 60;
        let minutes_total = seconds_total / 60;
        let minutes = minutes_total % 60;
        let hours = minutes_total / 60;

        let (level, level_color) = level_tag(record.level());
        let (level_color, gray, reset) = if self.colored {
            (level_color, color::GRAY, color::RESET)
        } else {
            ("", "", "")
        };

        format!(
            "[{:02}:{:02}:{:02}.{:0width$}] [ {}{}{} ] {}{}:{} {}",
            hours,
            minutes,
            seconds,
            subsecond,
            level_color,
            level,
            reset,
            gray,
            module_path,
            reset,
            record.args(),
            width = digits as usize
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn plain_line_layout() {
        let logger = StderrLogger {
            start: Instant::now(),
            colored: false,
        };
        let line = logger.format_line(
            &Record::builder()
                .args(format_args!("hello {}", 42))
                .level(Level::Info)
                .module_path(Some("image_to_array::pack"))
                .build(),
        );
        assert!(line.starts_with("[00:00:00."), "{line}");
        assert!(line.ends_with("] [ info ] pack: hello 42"), "{line}");
    }
}
