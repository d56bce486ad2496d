//! The host-reported heap usage signal.
//!
//! The engine itself has no platform introspection: the embedding
//! application implements [`HeapProbe`] with whatever its runtime exposes
//! (an allocator hook, a container limit, a browser heap API behind FFI).
//! Absence of the signal degrades gracefully — stats read as unavailable
//! and the pressure check reads as false.

use serde::Serialize;

/// A point-in-time snapshot of host heap usage, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryStats {
    /// Bytes currently in use.
    pub used_bytes: u64,
    /// Bytes currently allocated from the OS.
    pub total_bytes: u64,
    /// Hard ceiling the host may grow to.
    pub limit_bytes: u64,
}

impl MemoryStats {
    /// Used-over-limit ratio; 0.0 when the limit is unknown (zero).
    pub fn usage_ratio(&self) -> f64 {
        if self.limit_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.limit_bytes as f64
        }
    }
}

/// Source of the host heap signal.
///
/// Implementations must be cheap to sample; the cache consults the probe on
/// every pressure check.
pub trait HeapProbe: Send + Sync {
    /// The current heap snapshot, or `None` when the host cannot report one.
    fn sample(&self) -> Option<MemoryStats>;
}

/// The default probe: no heap signal available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl HeapProbe for NullProbe {
    fn sample(&self) -> Option<MemoryStats> {
        None
    }
}

/// A settable probe for tests and simulations.
#[cfg(test)]
pub(crate) struct FakeProbe {
    stats: std::sync::Mutex<Option<MemoryStats>>,
}

#[cfg(test)]
impl FakeProbe {
    pub(crate) fn new(stats: Option<MemoryStats>) -> Self {
        Self {
            stats: std::sync::Mutex::new(stats),
        }
    }

    pub(crate) fn set(&self, stats: Option<MemoryStats>) {
        *self.stats.lock().unwrap() = stats;
    }
}

#[cfg(test)]
impl HeapProbe for FakeProbe {
    fn sample(&self) -> Option<MemoryStats> {
        *self.stats.lock().unwrap()
    }
}
