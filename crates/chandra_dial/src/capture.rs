//! Scoped pointer capture.
//!
//! While a drag is active the host routes every pointer move/up to the dial,
//! not just those over the disc. A [`CaptureGuard`] represents that routing;
//! dropping it releases the capture, so every exit path (pointer-up,
//! dispose, drop of the dial) deregisters it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts live pointer captures. Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct CaptureRegistry {
    live: Arc<AtomicUsize>,
}

impl CaptureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capture; it is released when the guard drops.
    pub fn capture(&self) -> CaptureGuard {
        self.live.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(live = self.active(), "pointer capture acquired");
        CaptureGuard {
            live: Arc::clone(&self.live),
        }
    }

    /// Number of captures currently held.
    pub fn active(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn is_captured(&self) -> bool {
        self.active() > 0
    }
}

/// A live pointer capture.
#[derive(Debug)]
#[must_use = "dropping the guard releases the capture immediately"]
pub struct CaptureGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::trace!("pointer capture released");
    }
}
