//! Mount Guard
//!
//! Ties async continuations to a component's mount lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared liveness flag, released when the owning component unmounts.
///
/// Clones observe the same flag, so a spawned task can hold one and check
/// it before touching component state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.live.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_until_released() {
        let guard = MountGuard::new();
        assert!(guard.is_live());
        guard.release();
        assert!(!guard.is_live());
    }

    #[test]
    fn test_release_seen_by_clones() {
        let guard = MountGuard::new();
        let task_handle = guard.clone();
        guard.release();
        assert!(!task_handle.is_live());

        // Releasing twice is harmless
        task_handle.release();
        assert!(!guard.is_live());
    }
}
