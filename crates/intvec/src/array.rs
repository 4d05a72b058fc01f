//! The growable integer array.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::cursor::Cursor;
use crate::error::ArrayError;
use crate::id::BufferId;

/// An owning, contiguous, growable array of `i32`.
///
/// Elements `[0, len)` are live; slots `[len, capacity)` are allocated but
/// hold no meaningful value. Appending to a full array reallocates
/// according to its [`GrowthPolicy`] (1, 2, 4, 8, ... by default) and
/// capacity never shrinks.
///
/// Three access paths are offered:
///
/// - `array[i]` panics when `i >= len`.
/// - [`get`](Self::get) / [`set`](Self::set) return
///   [`ArrayError::IndexOutOfBounds`] instead.
/// - [`get_unchecked`](Self::get_unchecked) skips the check entirely
///   (`unsafe`).
///
/// The array dereferences to `[i32]` over its live elements, so slice
/// algorithms (`sort`, `binary_search`, `copy_from_slice`, ...) work on it
/// directly and use the bounds-checked path.
///
/// ```
/// use intvec::DynamicArray;
///
/// let mut a = DynamicArray::from_values(&[3, 1, 2]);
/// a.push_back(9);
/// assert_eq!(a.as_slice(), &[3, 1, 2, 9]);
/// assert_eq!(a.capacity(), 6);
///
/// a.sort();
/// assert_eq!(a.as_slice(), &[1, 2, 3, 9]);
/// ```
pub struct DynamicArray {
    buffer: Buffer,
    len: usize,
    policy: GrowthPolicy,
}

impl DynamicArray {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Create an empty array that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            buffer: Buffer::empty(),
            len: 0,
            policy,
        }
    }

    /// Create an empty array with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::zeroed(capacity),
            len: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Create an array of `len` zeros; capacity equals `len`.
    ///
    /// ```
    /// use intvec::DynamicArray;
    ///
    /// let a = DynamicArray::sized(5);
    /// assert_eq!(a.as_slice(), &[0; 5]);
    /// assert_eq!(a.capacity(), 5);
    /// ```
    pub fn sized(len: usize) -> Self {
        Self {
            buffer: Buffer::zeroed(len),
            len,
            policy: GrowthPolicy::default(),
        }
    }

    /// Create an array holding a copy of `values`; capacity equals
    /// `values.len()`.
    pub fn from_values(values: &[i32]) -> Self {
        Self {
            buffer: Buffer::with_live(values, values.len()),
            len: values.len(),
            policy: GrowthPolicy::default(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots that can be filled before the next reallocation.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Memory held by the buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// Identity of the current buffer. Changes on every reallocation.
    pub fn buffer_id(&self) -> BufferId {
        self.buffer.id()
    }

    /// The growth policy applied when the array is full.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Read the element at `index`.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32, ArrayError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index as isize))
    }

    /// Overwrite the element at `index`.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= len`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        let len = self.len;
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds {
                index: index as isize,
                len,
            })?;
        *slot = value;
        Ok(())
    }

    /// Append `value` at index `len`, growing the buffer first if full.
    ///
    /// # Panics
    ///
    /// Panics if the next capacity under the growth policy overflows
    /// `usize`.
    pub fn push_back(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buffer.slots_mut()[self.len] = value;
        self.len += 1;
    }

    /// Remove the last element and return it, or `None` if empty.
    ///
    /// Capacity is unchanged and the vacated slot keeps its value.
    pub fn pop_back(&mut self) -> Option<i32> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buffer.slots()[self.len])
    }

    /// Drop all live elements. Capacity, buffer and slot contents are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensure capacity is at least `capacity`, reallocating to exactly
    /// `capacity` slots if it is currently smaller. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.relocate(capacity);
        }
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// On `Err(ArrayError::AllocationFailed)` the array is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let mut next = Buffer::try_zeroed(capacity)?;
        next.slots_mut()[..self.len].copy_from_slice(self.as_slice());
        self.replace_buffer(next);
        Ok(())
    }

    /// Exchange the full state of two arrays without allocating.
    ///
    /// Buffers keep their ids, so cursors follow their buffer to its new
    /// owner.
    pub fn swap(&mut self, other: &mut DynamicArray) {
        std::mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// The buffer is transferred without copying. `self` keeps its growth
    /// policy and is otherwise indistinguishable from a fresh empty array.
    ///
    /// ```
    /// use intvec::DynamicArray;
    ///
    /// let mut a = DynamicArray::from_values(&[1, 2]);
    /// let b = a.take();
    /// assert_eq!(b.as_slice(), &[1, 2]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// ```
    pub fn take(&mut self) -> DynamicArray {
        let policy = self.policy;
        std::mem::replace(self, Self::with_policy(policy))
    }

    /// Replace the contents with a deep copy of `source`.
    ///
    /// Same as [`Clone::clone_from`].
    pub fn assign_copy(&mut self, source: &DynamicArray) {
        self.clone_from(source);
    }

    /// Release the current buffer and adopt `source`'s, leaving `source`
    /// empty.
    pub fn assign_move(&mut self, source: &mut DynamicArray) {
        *self = source.take();
    }

    /// Cursor at index 0 of the current buffer.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.buffer.id(), 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.buffer.id(), self.len as isize)
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer.slots()[..self.len]
    }

    /// The live elements.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        let len = self.len;
        &mut self.buffer.slots_mut()[..len]
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.as_mut_slice().iter_mut()
    }

    /// The live elements in `[first, last)`.
    ///
    /// Both cursors must belong to the current buffer and satisfy
    /// `0 <= first <= last <= len`.
    ///
    /// ```
    /// use intvec::DynamicArray;
    ///
    /// let mut a = DynamicArray::from_values(&[5, 4, 3, 2, 1]);
    /// let (first, last) = (a.begin() + 1, a.end() - 1);
    /// a.range_mut(first, last).unwrap().sort();
    /// assert_eq!(a.as_slice(), &[5, 2, 3, 4, 1]);
    /// ```
    pub fn range(&self, first: Cursor, last: Cursor) -> Result<&[i32], ArrayError> {
        let (start, end) = self.resolve_range(first, last)?;
        Ok(&self.as_slice()[start..end])
    }

    /// Mutable counterpart of [`range`](Self::range).
    pub fn range_mut(&mut self, first: Cursor, last: Cursor) -> Result<&mut [i32], ArrayError> {
        let (start, end) = self.resolve_range(first, last)?;
        Ok(&mut self.as_mut_slice()[start..end])
    }

    /// Resolve `cursor + offset` to a live index.
    pub(crate) fn resolve(&self, cursor: Cursor, offset: isize) -> Result<usize, ArrayError> {
        self.check_bound(cursor)?;
        let position = cursor
            .index()
            .checked_add(offset)
            .ok_or_else(|| self.out_of_bounds(isize::MAX))?;
        match usize::try_from(position) {
            Ok(index) if index < self.len => Ok(index),
            _ => Err(self.out_of_bounds(position)),
        }
    }

    fn resolve_range(&self, first: Cursor, last: Cursor) -> Result<(usize, usize), ArrayError> {
        self.check_bound(first)?;
        self.check_bound(last)?;
        let start = usize::try_from(first.index())
            .ok()
            .filter(|&start| start <= self.len)
            .ok_or_else(|| self.out_of_bounds(first.index()))?;
        let end = usize::try_from(last.index())
            .ok()
            .filter(|&end| start <= end && end <= self.len)
            .ok_or_else(|| self.out_of_bounds(last.index()))?;
        Ok((start, end))
    }

    fn check_bound(&self, cursor: Cursor) -> Result<(), ArrayError> {
        if cursor.buffer_id() != self.buffer.id() {
            return Err(ArrayError::StaleCursor {
                cursor: cursor.buffer_id(),
                current: self.buffer.id(),
            });
        }
        Ok(())
    }

    fn out_of_bounds(&self, index: isize) -> ArrayError {
        ArrayError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    fn grow(&mut self) {
        let capacity = match self.policy.next_capacity(self.capacity()) {
            Ok(capacity) => capacity,
            Err(err) => panic!("{err}"),
        };
        self.relocate(capacity);
    }

    /// Copy the live elements into a fresh buffer of `capacity` slots.
    fn relocate(&mut self, capacity: usize) {
        let next = Buffer::with_live(self.as_slice(), capacity);
        self.replace_buffer(next);
    }

    fn replace_buffer(&mut self, next: Buffer) {
        tracing::trace!(
            old = %self.buffer.id(),
            new = %next.id(),
            old_capacity = self.capacity(),
            new_capacity = next.capacity(),
            len = self.len,
            "reallocate"
        );
        self.buffer = next;
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynamicArray {
    /// Deep copy into a fresh buffer of the same capacity.
    fn clone(&self) -> Self {
        Self {
            buffer: Buffer::with_live(self.as_slice(), self.capacity()),
            len: self.len,
            policy: self.policy,
        }
    }

    /// Deep copy `source` into `self`.
    ///
    /// The current buffer is reused when its capacity already equals
    /// `source.capacity()`; otherwise it is released and replaced.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() == source.capacity() {
            self.buffer.slots_mut()[..source.len].copy_from_slice(source.as_slice());
        } else {
            self.replace_buffer(Buffer::with_live(source.as_slice(), source.capacity()));
        }
        self.len = source.len;
        self.policy = source.policy;
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl Deref for DynamicArray {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl DerefMut for DynamicArray {
    fn deref_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl AsRef<[i32]> for DynamicArray {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for DynamicArray {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Index<usize> for DynamicArray {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => panic!("{}", self.out_of_bounds(index as isize)),
        }
    }
}

impl IndexMut<usize> for DynamicArray {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                ArrayError::IndexOutOfBounds {
                    index: index as isize,
                    len,
                }
            ),
        }
    }
}

impl Index<Cursor> for DynamicArray {
    type Output = i32;

    fn index(&self, cursor: Cursor) -> &i32 {
        match self.resolve(cursor, 0) {
            Ok(index) => &self.as_slice()[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<Cursor> for DynamicArray {
    fn index_mut(&mut self, cursor: Cursor) -> &mut i32 {
        match self.resolve(cursor, 0) {
            Ok(index) => &mut self.as_mut_slice()[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<&[i32]> for DynamicArray {
    fn from(values: &[i32]) -> Self {
        Self::from_values(values)
    }
}

impl<const N: usize> From<[i32; N]> for DynamicArray {
    fn from(values: [i32; N]) -> Self {
        Self::from_values(&values)
    }
}

impl From<Vec<i32>> for DynamicArray {
    /// Adopts the vector's allocation; capacity becomes its length.
    fn from(values: Vec<i32>) -> Self {
        let len = values.len();
        Self {
            buffer: Buffer::from_slots(values.into_boxed_slice()),
            len,
            policy: GrowthPolicy::default(),
        }
    }
}

impl From<DynamicArray> for Vec<i32> {
    fn from(array: DynamicArray) -> Self {
        array.buffer.into_vec(array.len)
    }
}

impl FromIterator<i32> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<i32> for DynamicArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a> Extend<&'a i32> for DynamicArray {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl IntoIterator for DynamicArray {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut DynamicArray {
    type Item = &'a mut i32;
    type IntoIter = std::slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
