//! Basic log manager usage
//!
//! Registers a colored console writer on the default manager, logs one
//! message per level and terminates, draining the queue first.
//!
//! Run with: cargo run --example basic_usage

use log_manager::global;
use log_manager::prelude::*;
use std::sync::Arc;

fn main() {
    global::add_writer(Arc::new(ConsoleWriter::new()));
    global::set_level(LogLevel::Trace2);

    global::log(LogLevel::Trace2, "0");
    global::log(LogLevel::Trace1, "1");
    global::log(LogLevel::Debug, "2");
    global::log(LogLevel::Info, "3");
    global::log(LogLevel::Warning, "4");
    global::log(LogLevel::Error, "5");

    global::terminate(0);
}
