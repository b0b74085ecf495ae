//! Writer that discards everything

use crate::core::{LogLevel, LogWriter};

/// Stand-in for a writer that could not be constructed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullWriter;

impl LogWriter for NullWriter {
    fn write(&self, _level: LogLevel, _text: &str) {}

    fn name(&self) -> &str {
        "null"
    }
}
