//! Log entry structure

use super::log_level::LogLevel;
use std::fmt::{self, Write};

/// One accepted, already formatted message.
///
/// Entries are built once a message passes the threshold and are never
/// mutated afterwards; the queue slot holding one is its only owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: LogLevel,
    text: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Render `args` into an entry.
    ///
    /// A `Display` impl that reports an error leaves whatever was written so
    /// far; formatting never panics here.
    pub fn from_args(level: LogLevel, args: fmt::Arguments<'_>) -> Self {
        let text = match args.as_str() {
            Some(literal) => literal.to_owned(),
            None => {
                let mut text = String::new();
                let _ = text.write_fmt(args);
                text
            }
        };
        Self { level, text }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}
