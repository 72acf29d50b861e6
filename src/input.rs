//! Lift input signal
//!
//! The only externally-triggered mutation of the core: a shared boolean
//! toggled by the host's key/pointer/touch events and sampled exactly once
//! at the start of each tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle to the shared lift flag
///
/// All clones observe the same flag. Press and release are idempotent, so
/// key auto-repeat and duplicate pointer events are harmless.
#[derive(Debug, Clone, Default)]
pub struct LiftSignal {
    active: Arc<AtomicBool>,
}

impl LiftSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down / pointer-down / touch-start
    pub fn press(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    /// Key-up / pointer-up / touch-end
    pub fn release(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    /// Pointer left the surface or the window lost focus; lift defaults to
    /// inactive
    pub fn focus_lost(&self) {
        self.release();
    }

    /// Read the flag; call once at the start of each tick
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}
