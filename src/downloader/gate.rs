//! Concurrency gate for transfers.
//!
//! The gate hands out a fixed number of permits. A permit is released when it
//! is dropped, so a transfer that fails or panics still gives its slot back.
//! The counters let callers check the bound after a batch.

use crate::error::{Error, Result};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Default)]
struct Counters {
    acquired: AtomicUsize,
    released: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

/// Snapshot of the gate counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateStats {
    /// Number of permits.
    pub capacity: usize,
    /// Permits handed out so far.
    pub acquired: usize,
    /// Permits given back so far.
    pub released: usize,
    /// Permits currently held.
    pub in_flight: usize,
    /// Highest number of permits held at once.
    pub peak: usize,
}

/// Bounded pool of transfer slots.
#[derive(Debug, Clone)]
pub struct DownloadGate {
    capacity: usize,
    semaphore: Arc<Semaphore>,
    counters: Arc<Counters>,
}

impl DownloadGate {
    /// Creates a gate with `capacity` slots. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            semaphore: Arc::new(Semaphore::new(capacity)),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Wait for a free slot.
    pub async fn acquire(&self) -> Result<GatePermit> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| Error::Internal(format!("download gate closed: {}", e)))?;

        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.peak.fetch_max(in_flight, Ordering::SeqCst);

        Ok(GatePermit {
            counters: self.counters.clone(),
            _permit: permit,
        })
    }

    /// Current counters.
    pub fn stats(&self) -> GateStats {
        GateStats {
            capacity: self.capacity,
            acquired: self.counters.acquired.load(Ordering::SeqCst),
            released: self.counters.released.load(Ordering::SeqCst),
            in_flight: self.counters.in_flight.load(Ordering::SeqCst),
            peak: self.counters.peak.load(Ordering::SeqCst),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A held slot. Dropping it frees the slot.
#[derive(Debug)]
pub struct GatePermit {
    counters: Arc<Counters>,
    _permit: OwnedSemaphorePermit,
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.counters.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
