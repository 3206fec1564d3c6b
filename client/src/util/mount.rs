//! Mount-scoped lifetime for async work started by a component.
//!
//! DESIGN
//! ======
//! A component body runs once per mount, so work spawned from it starts once
//! per mount. The component creates one `MountScope`, hands a clone to the
//! task it spawns and releases it from `on_cleanup`. The task checks
//! `is_active` before touching reactive state, so a response that lands after
//! unmount is dropped.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared handle tied to one mounted component instance.
#[derive(Clone, Debug)]
pub struct MountScope {
    alive: Arc<AtomicBool>,
}

impl MountScope {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Whether the owning component is still mounted.
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the owning component as unmounted. Idempotent.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}
