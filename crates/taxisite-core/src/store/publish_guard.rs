//! RAII guard for the in-flight publish counter.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Increments on creation, decrements on drop (including cancellation).
pub(super) struct PublishGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> PublishGuard<'a> {
    pub(super) fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for PublishGuard<'_> {
    fn drop(&mut self) {
        let _ = self.counter.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| {
            if v > 0 {
                Some(v - 1)
            } else {
                None
            }
        });
    }
}
