//! Counter of accepted entries not yet delivered to every writer
//!
//! Producers increment before enqueueing; the dispatch thread decrements
//! only after the last writer has seen the entry. Waiters block on a
//! condition variable that is signalled when the count returns to zero.

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct InFlight {
    pending: AtomicUsize,
    lock: Mutex<()>,
    drained: Condvar,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn acquire(&self) {
        self.pending.fetch_add(1, Ordering::AcqRel);
    }

    /// Mark one entry as fully dispatched.
    pub fn release(&self) {
        let previous = self.pending.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "in-flight counter underflow");
        if previous == 1 {
            // Taking the lock orders this notify after any waiter's check.
            let _guard = self.lock.lock();
            self.drained.notify_all();
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut guard = self.lock.lock();
        while self.count() > 0 {
            self.drained.wait(&mut guard);
        }
    }

    /// Block until the count reaches zero or `timeout` elapses.
    ///
    /// Returns `true` if the count reached zero.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut guard = self.lock.lock();
        while self.count() > 0 {
            if self.drained.wait_until(&mut guard, deadline).timed_out() {
                return self.count() == 0;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_wait_returns_immediately_when_idle() {
        let in_flight = InFlight::new();
        in_flight.wait();
        assert!(in_flight.wait_timeout(Duration::from_millis(1)));
    }

    #[test]
    fn test_wait_timeout_expires_while_pending() {
        let in_flight = InFlight::new();
        in_flight.acquire();
        assert!(!in_flight.wait_timeout(Duration::from_millis(20)));
        assert_eq!(in_flight.count(), 1);
    }

    #[test]
    fn test_release_wakes_waiter() {
        let in_flight = Arc::new(InFlight::new());
        for _ in 0..3 {
            in_flight.acquire();
        }

        let releaser = Arc::clone(&in_flight);
        let handle = thread::spawn(move || {
            for _ in 0..3 {
                thread::sleep(Duration::from_millis(5));
                releaser.release();
            }
        });

        in_flight.wait();
        assert_eq!(in_flight.count(), 0);
        handle.join().unwrap();
    }
}
