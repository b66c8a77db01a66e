//! Contains the logger implementation of spacename.
//!
//! The logger implementation is responsible to manage all the calls to error!, warn!,
//! info! and the other logging macros. These calls are mapped to the standard error so the
//! standard output stays free for the rename report.

use atty::Stream;
use env_logger::{Builder, Env, DEFAULT_FILTER_ENV};
use log::Level;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use yansi::{Color, Paint};

/// Constructs the logger for spacename. This is an instance of env_logger + a yansi check
/// to see if it should color important elements displayed in the log. Elements will only
/// be colored if the error stream is an ansi tty.
///
/// The given filter level is used unless the RUST_LOG variable says otherwise.
pub fn init(filter_level: &str) -> Result<(), log::SetLoggerError> {
    if !atty::is(Stream::Stderr) || cfg!(windows) && !Paint::enable_windows_ascii() {
        Paint::disable();
    }

    let mut builder = Builder::from_env(Env::default().filter_or(DEFAULT_FILTER_ENV, filter_level));
    builder.format(|buf, record| writeln!(buf, "{}: {}", style_level(record.level()), record.args()));
    builder.try_init()
}

/// Highlights an important piece of information to make easier to spot important elements
/// on the log. Only works if the error stream is a tty and is ansi compliant.
pub fn highlight<M: Display>(input: M) -> Paint<M> {
    Color::Cyan.paint(input).bold()
}

/// Highlights an imporant path, this is simply an alias to the highlight function designed to
/// work with paths
pub fn pathlight<P: AsRef<Path>>(path: P) -> Paint<String> {
    highlight(path.as_ref().display().to_string())
}

fn style_level(level: Level) -> Paint<String> {
    let string = level.to_string().to_lowercase();
    match level {
        Level::Trace => Color::White.paint(string).bold(),
        Level::Debug => Color::Cyan.paint(string).bold(),
        Level::Info => Color::Green.paint(string).bold(),
        Level::Warn => Color::Yellow.paint(string).bold(),
        Level::Error => Color::Red.paint(string).bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::{pathlight, style_level};
    use log::Level;
    use yansi::Paint;

    #[test]
    fn test_style_level_names() {
        Paint::disable();
        assert_eq!(style_level(Level::Info).to_string(), "info");
        assert_eq!(style_level(Level::Error).to_string(), "error");
    }

    #[test]
    fn test_pathlight_plain() {
        Paint::disable();
        assert_eq!(pathlight("hall/hall1.jpg").to_string(), "hall/hall1.jpg");
    }
}
