//! Bind-parameter sequence numbering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out the `N` in `pN` for every bind parameter of one statement.
///
/// Create one per statement build and pass it to every renderer for that
/// statement so parameter keys never collide. `next` is a single atomic
/// read-and-increment, so a counter may also be shared across threads behind
/// an `Arc`. The counter never wraps: once it reaches `usize::MAX` it is
/// exhausted and stops handing out numbers.
#[derive(Debug)]
pub struct SequenceCounter {
    next: AtomicUsize,
}

impl SequenceCounter {
    /// Start counting at `start`.
    pub fn new(start: usize) -> Self {
        Self {
            next: AtomicUsize::new(start),
        }
    }

    /// Return the current value and advance by one.
    ///
    /// # Panics
    /// Panics if the counter is exhausted, rather than reissuing a number.
    pub fn next(&self) -> usize {
        match self.try_next() {
            Some(n) => n,
            None => panic!("sequence counter exhausted at {}", usize::MAX),
        }
    }

    /// Like [`next`](Self::next), but returns `None` once the counter is
    /// exhausted. An exhausted counter is left unchanged.
    pub fn try_next(&self) -> Option<usize> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
    }

    /// The value the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequenceCounter {
    /// Parameters are numbered from 1.
    fn default() -> Self {
        Self::new(1)
    }
}
