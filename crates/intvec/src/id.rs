//! Buffer identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`BufferId`] allocation. Zero is reserved for
/// [`BufferId::EMPTY`].
static BUFFER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a single buffer allocation.
///
/// Every allocation receives a fresh id from a monotonic atomic counter,
/// so an id is never reused within a process even if the allocator hands
/// back the same address. Cursors record the id of the buffer they were
/// created against; comparing it with the array's current id is an O(1)
/// staleness check.
///
/// The id follows the allocation, not the array: moving or swapping arrays
/// carries the id along with the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    /// The id of the unallocated (capacity 0) buffer.
    pub const EMPTY: BufferId = BufferId(0);

    /// Allocate a fresh, unique id. Thread-safe.
    pub fn next() -> Self {
        Self(BUFFER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Whether this is the id of the unallocated buffer.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_never_repeats() {
        let a = BufferId::next();
        let b = BufferId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn next_is_never_empty() {
        assert!(!BufferId::next().is_empty());
        assert!(BufferId::EMPTY.is_empty());
    }
}
