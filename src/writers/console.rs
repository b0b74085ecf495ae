//! Console writer implementation

use super::timestamp;
use crate::core::{LogLevel, LogWriter};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Writes `timestamp LEVEL text` lines to stderr.
pub struct ConsoleWriter {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    show_timestamp: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            show_timestamp: true,
        }
    }

    pub fn plain() -> Self {
        Self::with_colors(false)
    }

    /// Colors need the `console` feature; without it output is always plain.
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            show_timestamp: true,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, show_timestamp: bool) -> Self {
        self.show_timestamp = show_timestamp;
        self
    }

    fn tag(&self, level: LogLevel) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.to_str().color(level.color_code()).to_string();
        }
        level.to_str().to_string()
    }

    pub(crate) fn format_line(&self, level: LogLevel, text: &str) -> String {
        if self.show_timestamp {
            format!("{} {} {}", timestamp(), self.tag(level), text)
        } else {
            format!("{} {}", self.tag(level), text)
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, level: LogLevel, text: &str) {
        let line = self.format_line(level, text);
        // A closed stderr just loses the line.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }

    fn name(&self) -> &str {
        "console"
    }
}
