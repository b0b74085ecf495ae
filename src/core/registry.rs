//! Insertion-ordered writer registry
//!
//! Registration replaces the whole writer list with a new snapshot, so the
//! dispatch thread can iterate a stable list without holding the lock while
//! writers run.

use super::writer::LogWriter;
use parking_lot::RwLock;
use std::sync::Arc;

pub type WriterSnapshot = Arc<[Arc<dyn LogWriter>]>;

pub struct WriterRegistry {
    writers: RwLock<WriterSnapshot>,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self {
            writers: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Append a writer and return the number of registered writers.
    pub fn push(&self, writer: Arc<dyn LogWriter>) -> usize {
        let mut writers = self.writers.write();
        let mut next: Vec<Arc<dyn LogWriter>> = writers.iter().cloned().collect();
        next.push(writer);
        let len = next.len();
        *writers = Arc::from(next);
        len
    }

    /// Current writers, in registration order.
    #[inline]
    pub fn snapshot(&self) -> WriterSnapshot {
        Arc::clone(&self.writers.read())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.writers.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
