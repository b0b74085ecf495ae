//! Logging macros for ergonomic message formatting.
//!
//! The format string is rendered on the calling thread, before the entry is
//! queued. Pass any expression that derefs to a [`LogManager`](crate::LogManager),
//! such as `manager`, `&manager` or `global::default_manager()`.
//!
//! # Examples
//!
//! ```
//! use log_manager::prelude::*;
//! use log_manager::{info, warning};
//!
//! let manager = LogManager::new();
//!
//! info!(manager, "Server started");
//!
//! let port = 8080;
//! info!(manager, "Server listening on port {}", port);
//! warning!(manager, "Retry attempt {} of {}", 3, 5);
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use log_manager::prelude::*;
/// # let manager = LogManager::new();
/// use log_manager::log;
/// log!(manager, LogLevel::Info, "Simple message");
/// log!(manager, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($manager:expr, $level:expr, $($arg:tt)+) => {
        $manager.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a message at `TRACE2`, the most verbose level.
#[macro_export]
macro_rules! trace2 {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Trace2, $($arg)+)
    };
}

/// Log a message at `TRACE1`.
#[macro_export]
macro_rules! trace1 {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Trace1, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use log_manager::prelude::*;
/// # let manager = LogManager::new();
/// use log_manager::info;
/// info!(manager, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($manager:expr, $($arg:tt)+) => {
        $crate::log!($manager, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at `ERROR`, drain the queue and exit the process with status 1.
///
/// ```no_run
/// # use log_manager::prelude::*;
/// # let manager = LogManager::new();
/// use log_manager::fatal;
/// fatal!(manager, "Unable to open {}", "config.toml");
/// ```
#[macro_export]
macro_rules! fatal {
    ($manager:expr, $($arg:tt)+) => {
        $manager.fatal_fmt(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LogManager};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recording_manager() -> (LogManager, Arc<Mutex<Vec<(LogLevel, String)>>>) {
        let manager = LogManager::new();
        manager.set_level(LogLevel::Trace2);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        manager.add_writer(Arc::new(move |level: LogLevel, text: &str| {
            sink.lock().push((level, text.to_string()));
        }));
        (manager, seen)
    }

    #[test]
    fn test_level_macros() {
        let (manager, seen) = recording_manager();

        trace2!(manager, "t2 {}", 0);
        trace1!(manager, "t1 {}", 1);
        debug!(manager, "debug {}", 2);
        info!(manager, "info {}", 3);
        warning!(manager, "warning {}", 4);
        error!(manager, "error {}", 5);
        log!(manager, LogLevel::Info, "plain");
        manager.sync();

        let levels: Vec<LogLevel> = seen.lock().iter().map(|(level, _)| *level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Trace2,
                LogLevel::Trace1,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warning,
                LogLevel::Error,
                LogLevel::Info,
            ]
        );
        assert_eq!(seen.lock()[2].1, "debug 2");
        assert_eq!(seen.lock()[6].1, "plain");
    }

    #[test]
    fn test_macros_accept_references() {
        let (manager, seen) = recording_manager();
        let by_ref = &manager;

        info!(by_ref, "via reference");
        manager.sync();

        assert_eq!(seen.lock().len(), 1);
    }
}
