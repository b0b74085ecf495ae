//! Writer implementations

pub mod console;
pub mod file;
pub mod null;

pub use console::ConsoleWriter;
pub use file::FileWriter;
pub use null::NullWriter;

pub use crate::core::LogWriter;

/// Timestamp prefix shared by the bundled writers: `2024/03/09 14:05:59`
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}
