//! Owned slot storage.
//!
//! A [`Buffer`] is a boxed `[i32]` of fixed length (its capacity) tagged
//! with a [`BufferId`]. It never grows in place: a larger buffer is a new
//! allocation with a new id, and the old one is released when dropped.
//! Every slot is initialised; slots past the array's live length simply
//! hold stale or zero values.

use crate::error::ArrayError;
use crate::id::BufferId;

/// Fixed-capacity, zero-initialised storage owned by one array.
pub(crate) struct Buffer {
    /// Backing storage. `slots.len()` is the capacity.
    slots: Box<[i32]>,
    /// Identity of this allocation; `BufferId::EMPTY` when `slots` is empty.
    id: BufferId,
}

impl Buffer {
    /// The unallocated buffer. Performs no allocation.
    pub(crate) fn empty() -> Self {
        Self {
            slots: Box::default(),
            id: BufferId::EMPTY,
        }
    }

    /// Allocate `capacity` zeroed slots.
    ///
    /// Allocation failure is handled by the global allocator (abort).
    pub(crate) fn zeroed(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::empty();
        }
        Self::from_slots(vec![0; capacity].into_boxed_slice())
    }

    /// Fallible counterpart of [`zeroed`](Self::zeroed).
    pub(crate) fn try_zeroed(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                requested: capacity,
            })?;
        slots.resize(capacity, 0);
        Ok(Self::from_slots(slots.into_boxed_slice()))
    }

    /// Allocate `capacity` slots and copy `live` into the front.
    ///
    /// # Panics
    ///
    /// Panics if `live.len() > capacity`.
    pub(crate) fn with_live(live: &[i32], capacity: usize) -> Self {
        assert!(
            live.len() <= capacity,
            "live elements ({}) exceed capacity ({capacity})",
            live.len()
        );
        let mut buffer = Self::zeroed(capacity);
        buffer.slots[..live.len()].copy_from_slice(live);
        buffer
    }

    /// Take ownership of already-filled slots under a fresh id.
    pub(crate) fn from_slots(slots: Box<[i32]>) -> Self {
        if slots.is_empty() {
            return Self::empty();
        }
        let id = BufferId::next();
        tracing::trace!(id = %id, capacity = slots.len(), "allocate buffer");
        Self { slots, id }
    }

    /// Number of slots (the array's capacity).
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Identity of this allocation.
    pub(crate) fn id(&self) -> BufferId {
        self.id
    }

    /// All slots, live or not.
    pub(crate) fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// All slots, live or not.
    pub(crate) fn slots_mut(&mut self) -> &mut [i32] {
        &mut self.slots
    }

    /// Memory usage of the slots in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<i32>()
    }

    /// Convert into a `Vec` holding the first `len` slots, reusing the
    /// allocation.
    pub(crate) fn into_vec(mut self, len: usize) -> Vec<i32> {
        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.truncate(len);
        slots
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if !self.slots.is_empty() {
            tracing::trace!(id = %self.id, capacity = self.slots.len(), "release buffer");
        }
    }
}
