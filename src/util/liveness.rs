//! Mount-scoped liveness flag for async work started by a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submit cycles suspend on timers and network calls. A page creates one
//! [`Liveness`] on mount and ends it from `on_cleanup`; tasks check it after
//! every suspension point and drop their result once the page is gone.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning view as torn down. Irreversible.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a [`Liveness`] that ends when the current reactive owner is cleaned up.
pub fn scoped() -> Liveness {
    let liveness = Liveness::new();
    let on_drop = liveness.clone();
    leptos::prelude::on_cleanup(move || on_drop.end());
    liveness
}
