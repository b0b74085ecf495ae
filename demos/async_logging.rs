//! Multi-threaded logging example
//!
//! Several producer threads share one manager; a slow writer shows that
//! producers block once the queue is full and `sync` waits for delivery.
//!
//! Run with: cargo run --example async_logging

use log_manager::prelude::*;
use log_manager::{info, warning};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Log Manager - Multi-threaded Example ===\n");

    let manager = Arc::new(
        LogManager::builder()
            .level(LogLevel::Debug)
            .queue_capacity(8)
            .writer(ConsoleWriter::new())
            .writer(|_level: LogLevel, _text: &str| thread::sleep(Duration::from_millis(2)))
            .build()?,
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for i in 0..20 {
                    info!(manager, "Thread {} - Message {}", thread_id, i);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
    warning!(manager, "producers done after {:?}", start.elapsed());

    manager.sync();
    println!("\nAll entries delivered after {:?}", start.elapsed());
    println!(
        "Producers blocked on a full queue {} time(s)",
        manager.metrics().block_events()
    );

    Ok(())
}
