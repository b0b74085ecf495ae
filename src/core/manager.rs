//! Log manager implementation
//!
//! Producers filter and format on their own thread, then push entries onto a
//! bounded queue. A single dispatch thread per manager drains the queue and
//! hands every entry to every registered writer, in registration order.

use super::{
    error::{LogManagerError, Result},
    in_flight::InFlight,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::ManagerMetrics,
    registry::{WriterRegistry, WriterSnapshot},
    writer::LogWriter,
};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Number of entries that may wait in the queue before producers block
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// How long dropping a manager waits for the dispatch thread to drain
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

thread_local! {
    /// Address of the `Shared` whose dispatch loop runs on this thread, or 0.
    static DISPATCHING: Cell<usize> = const { Cell::new(0) };
}

#[inline]
fn dispatching(shared: &Shared) -> bool {
    DISPATCHING.with(Cell::get) == shared as *const Shared as usize
}

/// State shared between the manager and its dispatch thread.
struct Shared {
    writers: WriterRegistry,
    in_flight: InFlight,
    metrics: ManagerMetrics,
    running: AtomicBool,
    reentrant_calls: AtomicU64,
}

pub struct LogManager {
    threshold: AtomicU8,
    capacity: usize,
    auto_start: bool,
    shared: Arc<Shared>,
    sender: OnceLock<Sender<LogEntry>>,
    dispatch_handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl LogManager {
    /// A manager at `INFO` with the default queue capacity that starts
    /// dispatching as soon as its first writer is registered.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogLevel::Info, DEFAULT_QUEUE_CAPACITY, true)
    }

    fn with_config(level: LogLevel, capacity: usize, auto_start: bool) -> Self {
        Self {
            threshold: AtomicU8::new(level.rank()),
            capacity,
            auto_start,
            shared: Arc::new(Shared {
                writers: WriterRegistry::new(),
                in_flight: InFlight::new(),
                metrics: ManagerMetrics::new(),
                running: AtomicBool::new(false),
                reentrant_calls: AtomicU64::new(0),
            }),
            sender: OnceLock::new(),
            dispatch_handle: Mutex::new(None),
        }
    }

    /// Create the queue and the dispatch thread.
    ///
    /// Returns `Ok(true)` if this call started dispatching and `Ok(false)`
    /// if the manager was already started. Until a manager is started every
    /// message is discarded.
    pub fn start(&self) -> Result<bool> {
        let mut handle = self.dispatch_handle.lock();
        if self.sender.get().is_some() {
            return Ok(false);
        }

        let (sender, receiver) = bounded(self.capacity);
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("log-dispatch".to_string())
            .spawn(move || Self::dispatch_loop(&shared, receiver))
            .map_err(|e| {
                LogManagerError::io_operation("starting dispatch thread", "spawn failed", e)
            })?;

        *handle = Some(spawned);
        // The thread exists before any producer can observe the sender.
        let _ = self.sender.set(sender);
        Ok(true)
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.sender.get().is_some()
    }

    /// Register a writer after all previously registered ones.
    ///
    /// The writer receives every entry dispatched after this call returns.
    /// With auto-start enabled, the first registration starts the manager.
    pub fn add_writer(&self, writer: Arc<dyn LogWriter>) {
        let count = self.shared.writers.push(writer);
        if count == 1 && self.auto_start {
            if let Err(e) = self.start() {
                eprintln!("[LOGGER ERROR] Failed to start log manager: {}", e);
            }
        }
    }

    #[inline]
    pub fn writer_count(&self) -> usize {
        self.shared.writers.len()
    }

    /// Change the threshold for every subsequent log call.
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.rank(), Ordering::Relaxed);
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_rank(self.threshold.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn queue_capacity(&self) -> usize {
        self.capacity
    }

    /// Entries accepted but not yet handed to every writer.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.shared.in_flight.count()
    }

    pub fn metrics(&self) -> &ManagerMetrics {
        &self.shared.metrics
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if let Some(sender) = self.admit(level) {
            self.enqueue(sender, LogEntry::new(level, message));
        }
    }

    /// Log pre-built format arguments, usually through the crate macros.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if let Some(sender) = self.admit(level) {
            self.enqueue(sender, LogEntry::from_args(level, args));
        }
    }

    /// Return the queue to use if a message at `level` should be delivered.
    fn admit(&self, level: LogLevel) -> Option<&Sender<LogEntry>> {
        let metrics = &self.shared.metrics;

        if level == LogLevel::None || !level.admits(self.level()) {
            metrics.record_filtered();
            return None;
        }

        if self.shared.writers.is_empty() {
            metrics.record_discarded();
            return None;
        }

        let Some(sender) = self.sender.get() else {
            metrics.record_discarded();
            return None;
        };

        if dispatching(&self.shared) {
            // A writer logging back into its own manager could fill the
            // queue that only this thread drains.
            metrics.record_discarded();
            let calls = self.shared.reentrant_calls.fetch_add(1, Ordering::Relaxed);
            if calls == 0 || (calls + 1) % 1000 == 0 {
                eprintln!(
                    "[LOGGER WARNING] Writer logged from the dispatch thread, {} message(s) discarded.",
                    calls + 1
                );
            }
            return None;
        }

        Some(sender)
    }

    /// Queue an accepted entry, blocking while the queue is full.
    fn enqueue(&self, sender: &Sender<LogEntry>, entry: LogEntry) {
        let shared = &self.shared;
        shared.in_flight.acquire();

        let entry = match sender.try_send(entry) {
            Ok(()) => {
                shared.metrics.record_accepted();
                return;
            }
            Err(TrySendError::Full(entry)) => {
                shared.metrics.record_block();
                entry
            }
            Err(TrySendError::Disconnected(_)) => {
                shared.in_flight.release();
                shared.metrics.record_discarded();
                return;
            }
        };

        if sender.send(entry).is_ok() {
            shared.metrics.record_accepted();
        } else {
            shared.in_flight.release();
            shared.metrics.record_discarded();
        }
    }

    #[inline]
    pub fn trace2(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace2, message);
    }

    #[inline]
    pub fn trace1(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace1, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Block until every entry accepted so far has reached every writer.
    ///
    /// Entries accepted concurrently with this call may or may not be
    /// waited for. Called from a writer, this returns immediately.
    pub fn sync(&self) {
        if dispatching(&self.shared) {
            return;
        }
        self.shared.in_flight.wait();
    }

    /// Like [`sync`](Self::sync), giving up after `timeout`.
    ///
    /// Returns `true` if nothing was left in flight.
    pub fn sync_timeout(&self, timeout: Duration) -> bool {
        if dispatching(&self.shared) {
            return self.in_flight() == 0;
        }
        self.shared.in_flight.wait_timeout(timeout)
    }

    /// Log a final trace entry, drain the queue and exit the process.
    pub fn terminate(&self, exit_code: i32) -> ! {
        self.trace2("Terminating.");
        self.sync();
        std::process::exit(exit_code)
    }

    /// Log `message` at `ERROR`, then [`terminate`](Self::terminate) with status 1.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.error(message);
        self.terminate(1)
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_fmt(LogLevel::Error, args);
        self.terminate(1)
    }

    fn dispatch_loop(shared: &Shared, receiver: Receiver<LogEntry>) {
        // `start` already admits only one loop per manager; this guards the
        // invariant should that ever change.
        if shared.running.swap(true, Ordering::AcqRel) {
            eprintln!("[LOGGER CRITICAL] Log manager dispatch loop already running, aborting.");
            std::process::abort();
        }
        DISPATCHING.with(|current| current.set(shared as *const Shared as usize));

        // Ends once the manager drops its sender.
        for entry in receiver.iter() {
            let writers = shared.writers.snapshot();
            Self::deliver(&writers, &entry, &shared.metrics);

            if receiver.is_empty() {
                Self::flush_writers(&writers, &shared.metrics);
            }

            drop(entry);
            shared.metrics.record_delivered();
            shared.in_flight.release();
        }
    }

    /// Hand one entry to every writer, isolating panics per writer.
    fn deliver(writers: &WriterSnapshot, entry: &LogEntry, metrics: &ManagerMetrics) {
        for (idx, writer) in writers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| {
                writer.write(entry.level(), entry.text())
            }));

            if let Err(panic_info) = result {
                metrics.record_writer_panic();
                eprintln!(
                    "[LOGGER CRITICAL] Writer #{} ({}) panicked: {}. \
                     Other writers continue to function.",
                    idx,
                    writer.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    fn flush_writers(writers: &WriterSnapshot, metrics: &ManagerMetrics) {
        for (idx, writer) in writers.iter().enumerate() {
            if let Err(panic_info) = catch_unwind(AssertUnwindSafe(|| writer.flush())) {
                metrics.record_writer_panic();
                eprintln!(
                    "[LOGGER CRITICAL] Writer #{} ({}) panicked during flush: {}",
                    idx,
                    writer.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("level", &self.level())
            .field("capacity", &self.capacity)
            .field("writers", &self.writer_count())
            .field("started", &self.is_started())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

impl Drop for LogManager {
    fn drop(&mut self) {
        // Closing the queue lets the dispatch thread drain and exit.
        drop(self.sender.take());

        let Some(handle) = self.dispatch_handle.get_mut().take() else {
            return;
        };
        if dispatching(&self.shared) {
            return;
        }

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Dispatch thread panicked during shutdown: {:?}", e);
                }
                break;
            }

            if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                eprintln!(
                    "[LOGGER WARNING] Dispatch thread did not finish within {:?} timeout. \
                     Some logs may be lost.",
                    DEFAULT_SHUTDOWN_TIMEOUT
                );
                break;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

/// Builder for constructing a [`LogManager`] with a fluent API
///
/// # Example
/// ```
/// use log_manager::prelude::*;
///
/// let manager = LogManager::builder()
///     .level(LogLevel::Debug)
///     .queue_capacity(64)
///     .writer(NullWriter)
///     .build()
///     .unwrap();
///
/// assert!(manager.is_started());
/// ```
pub struct LogManagerBuilder {
    level: LogLevel,
    queue_capacity: usize,
    writers: Vec<Arc<dyn LogWriter>>,
    auto_start: bool,
}

impl LogManagerBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            writers: Vec::new(),
            auto_start: true,
        }
    }

    /// Set the minimum level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set how many entries may wait before producers block
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Add a writer owned by the manager
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Arc::new(writer));
        self
    }

    /// Add a writer that is also referenced elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_writer(mut self, writer: Arc<dyn LogWriter>) -> Self {
        self.writers.push(writer);
        self
    }

    /// Whether the first registered writer starts dispatching.
    ///
    /// When disabled, messages are discarded until [`LogManager::start`] is called.
    #[must_use = "builder methods return a new value"]
    pub fn auto_start(mut self, enabled: bool) -> Self {
        self.auto_start = enabled;
        self
    }

    pub fn build(self) -> Result<LogManager> {
        if self.queue_capacity == 0 {
            return Err(LogManagerError::config(
                "LogManager",
                "queue capacity must be at least 1",
            ));
        }

        let manager = LogManager::with_config(self.level, self.queue_capacity, self.auto_start);
        for writer in self.writers {
            manager.add_writer(writer);
        }
        Ok(manager)
    }
}

impl Default for LogManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogManager {
    #[must_use]
    pub fn builder() -> LogManagerBuilder {
        LogManagerBuilder::new()
    }
}
