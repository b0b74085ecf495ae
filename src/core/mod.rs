//! Core log manager types and traits

pub mod error;
pub mod global;
pub mod in_flight;
pub mod log_entry;
pub mod log_level;
pub mod manager;
pub mod metrics;
pub mod registry;
pub mod writer;

pub use error::{LogManagerError, Result};
pub use in_flight::InFlight;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use manager::{LogManager, LogManagerBuilder, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::ManagerMetrics;
pub use registry::WriterRegistry;
pub use writer::LogWriter;
