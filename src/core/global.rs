//! Process-wide default manager
//!
//! A convenience for programs that want one shared log manager without
//! threading a reference through every component. The instance is created
//! on first use with [`LogManager::new`] and lives until the process exits;
//! it is never dropped, so nothing queued on it is flushed except through
//! [`sync`], [`terminate`] or [`fatal`].
//!
//! Components that can take a `&LogManager` should prefer that.

use super::{
    error::Result, log_level::LogLevel, manager::LogManager, metrics::ManagerMetrics,
    writer::LogWriter,
};
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

static DEFAULT_MANAGER: OnceLock<LogManager> = OnceLock::new();

pub fn default_manager() -> &'static LogManager {
    DEFAULT_MANAGER.get_or_init(LogManager::new)
}

pub fn start() -> Result<bool> {
    default_manager().start()
}

pub fn is_started() -> bool {
    default_manager().is_started()
}

pub fn add_writer(writer: Arc<dyn LogWriter>) {
    default_manager().add_writer(writer);
}

pub fn writer_count() -> usize {
    default_manager().writer_count()
}

pub fn queue_capacity() -> usize {
    default_manager().queue_capacity()
}

pub fn in_flight() -> usize {
    default_manager().in_flight()
}

pub fn metrics() -> &'static ManagerMetrics {
    default_manager().metrics()
}

pub fn set_level(level: LogLevel) {
    default_manager().set_level(level);
}

pub fn level() -> LogLevel {
    default_manager().level()
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    default_manager().log(level, message);
}

pub fn log_fmt(level: LogLevel, args: fmt::Arguments<'_>) {
    default_manager().log_fmt(level, args);
}

pub fn trace2(message: impl Into<String>) {
    default_manager().trace2(message);
}

pub fn trace1(message: impl Into<String>) {
    default_manager().trace1(message);
}

pub fn debug(message: impl Into<String>) {
    default_manager().debug(message);
}

pub fn info(message: impl Into<String>) {
    default_manager().info(message);
}

pub fn warning(message: impl Into<String>) {
    default_manager().warning(message);
}

pub fn error(message: impl Into<String>) {
    default_manager().error(message);
}

pub fn sync() {
    default_manager().sync();
}

pub fn sync_timeout(timeout: Duration) -> bool {
    default_manager().sync_timeout(timeout)
}

pub fn terminate(exit_code: i32) -> ! {
    default_manager().terminate(exit_code)
}

pub fn fatal(message: impl Into<String>) -> ! {
    default_manager().fatal(message)
}

pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    default_manager().fatal_fmt(args)
}
