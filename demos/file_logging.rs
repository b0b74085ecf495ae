//! File logging example
//!
//! Writes to both the console and a file. A file that cannot be created is
//! replaced by a null writer instead of stopping the program.
//!
//! Run with: cargo run --example file_logging

use log_manager::prelude::*;
use log_manager::{debug, error, info};
use std::sync::Arc;

fn main() -> Result<()> {
    let manager = LogManager::new();
    manager.set_level("DEBUG".parse()?);

    manager.add_writer(Arc::new(ConsoleWriter::plain()));
    match FileWriter::create("file_logging.log") {
        Ok(writer) => manager.add_writer(Arc::new(writer)),
        Err(e) => {
            eprintln!("file output disabled: {}", e);
            manager.add_writer(Arc::new(NullWriter));
        }
    }

    info!(manager, "Application started");
    debug!(manager, "Loaded {} settings", 12);
    error!(manager, "Could not reach {}", "db.internal:5432");

    manager.sync();
    println!("Check 'file_logging.log' for file output");

    Ok(())
}
