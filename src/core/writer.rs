//! Writer trait for log output destinations

use super::log_level::LogLevel;

/// A sink that receives every accepted entry.
///
/// Writers are only ever called from the dispatch thread, one entry at a
/// time and in registration order. There is no error channel back to the
/// manager: a writer that fails must swallow the failure itself.
///
/// A writer must not call back into the manager that owns it.
pub trait LogWriter: Send + Sync {
    fn write(&self, level: LogLevel, text: &str);

    /// Called by the dispatch thread whenever the queue drains.
    fn flush(&self) {}

    fn name(&self) -> &str {
        "writer"
    }
}

impl<F> LogWriter for F
where
    F: Fn(LogLevel, &str) + Send + Sync,
{
    fn write(&self, level: LogLevel, text: &str) {
        self(level, text)
    }

    fn name(&self) -> &str {
        "closure"
    }
}
