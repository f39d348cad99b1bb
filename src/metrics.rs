//! Observability hook for identifier generation.
//!
//! The generator keeps no call state of its own. Callers that want counts
//! inject a [`GenerationObserver`], typically a [`CallCounter`].

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::GenerateError;

/// Where the entropy for a generated identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entropy {
    /// The source's ready-made identifier primitive.
    FastPath,
    /// Caller-supplied bytes (`V4Options::random`).
    Explicit,
    /// Caller-supplied capability (`V4Options::rng`).
    Supplier,
    /// The generator's randomness source.
    Source,
}

/// Receives one notification per generation call.
pub trait GenerationObserver: Send + Sync {
    /// Called after an identifier was produced.
    fn on_generated(&self, entropy: Entropy);

    /// Called when a generation call fails.
    fn on_failed(&self, error: &GenerateError);
}

/// Point-in-time copy of a [`CallCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallStats {
    /// Identifiers produced.
    pub generated: u64,
    /// Calls that returned an error.
    pub failed: u64,
    /// Identifiers produced through the fast path.
    pub fast_path: u64,
}

/// Atomic call counter usable from any number of threads.
#[derive(Debug, Default)]
pub struct CallCounter {
    generated: AtomicU64,
    failed: AtomicU64,
    fast_path: AtomicU64,
}

impl CallCounter {
    /// Creates a counter with every count at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counts.
    #[must_use]
    pub fn snapshot(&self) -> CallStats {
        CallStats {
            generated: self.generated.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            fast_path: self.fast_path.load(Ordering::Relaxed),
        }
    }
}

impl GenerationObserver for CallCounter {
    fn on_generated(&self, entropy: Entropy) {
        self.generated.fetch_add(1, Ordering::Relaxed);
        if entropy == Entropy::FastPath {
            self.fast_path.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn on_failed(&self, _error: &GenerateError) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}
