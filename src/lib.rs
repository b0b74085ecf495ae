//! # Log Manager
//!
//! An in-process, asynchronous, leveled logging facility. Callers submit
//! leveled, formatted messages; a background dispatch thread forwards each
//! accepted message to every registered writer, in registration order,
//! without blocking the caller beyond the time needed to enqueue.
//!
//! ## Features
//!
//! - **Non-blocking producers**: formatting happens on the caller, delivery on one dispatch thread
//! - **Ordered fan-out**: every writer sees every accepted entry in acceptance order
//! - **Backpressure**: a bounded queue makes producers wait instead of dropping
//! - **Explicit drain**: `sync` waits until every accepted entry has been delivered
//!
//! ```
//! use log_manager::prelude::*;
//! use log_manager::info;
//! use std::sync::Arc;
//!
//! let manager = LogManager::new();
//! manager.add_writer(Arc::new(ConsoleWriter::plain()));
//! manager.set_level(LogLevel::Debug);
//!
//! info!(manager, "listening on port {}", 8080);
//! manager.sync();
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub use crate::core::global;

pub mod prelude {
    pub use crate::core::{
        LogEntry, LogLevel, LogManager, LogManagerBuilder, LogManagerError, LogWriter,
        ManagerMetrics, Result, DEFAULT_QUEUE_CAPACITY,
    };
    pub use crate::writers::{ConsoleWriter, FileWriter, NullWriter};
}

pub use crate::core::{
    LogEntry, LogLevel, LogManager, LogManagerBuilder, LogManagerError, LogWriter,
    ManagerMetrics, Result, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use writers::{ConsoleWriter, FileWriter, NullWriter};
