//! Random-access cursors.
//!
//! A [`Cursor`] is a plain `Copy` value: a signed position plus the
//! [`BufferId`] of the buffer it was created against. It borrows nothing,
//! so it survives mutation of the array, but every dereference checks the
//! id against the array's current buffer. A cursor taken before a
//! reallocation (or from another array) resolves to
//! [`ArrayError::StaleCursor`] instead of touching released memory.
//!
//! Arithmetic never dereferences and never fails; positions may wander
//! outside `[0, len]` and are only checked when read through.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::array::DynamicArray;
use crate::error::ArrayError;
use crate::id::BufferId;

/// Position within one buffer of a [`DynamicArray`].
///
/// Two cursors are equal iff they refer to the same buffer and the same
/// position. Cursors on the same buffer are ordered by position; cursors
/// on different buffers are unordered.
///
/// ```
/// use intvec::DynamicArray;
///
/// let a = DynamicArray::from_values(&[10, 20, 30, 40]);
/// let mut it = a.begin();
/// assert_eq!(it.get(&a), Ok(10));
/// it += 2;
/// assert_eq!(it.get(&a), Ok(30));
/// assert_eq!(it.at(&a, -1), Ok(20));
/// assert_eq!(a.end() - it, 2);
/// assert_eq!(a.begin() + a.len() as isize, a.end());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    buffer: BufferId,
    index: isize,
}

impl Cursor {
    pub(crate) fn new(buffer: BufferId, index: isize) -> Self {
        Self { buffer, index }
    }

    /// Position within the buffer.
    pub fn index(&self) -> isize {
        self.index
    }

    /// The buffer this cursor was created against.
    pub fn buffer_id(&self) -> BufferId {
        self.buffer
    }

    /// Whether this cursor refers to `array`'s current buffer.
    pub fn is_bound_to(&self, array: &DynamicArray) -> bool {
        self.buffer == array.buffer_id()
    }

    /// Step forward and return the new position.
    pub fn increment(&mut self) -> Cursor {
        self.index += 1;
        *self
    }

    /// Step forward and return the position before the step.
    pub fn post_increment(&mut self) -> Cursor {
        let before = *self;
        self.index += 1;
        before
    }

    /// Step backward and return the new position.
    pub fn decrement(&mut self) -> Cursor {
        self.index -= 1;
        *self
    }

    /// Step backward and return the position before the step.
    pub fn post_decrement(&mut self) -> Cursor {
        let before = *self;
        self.index -= 1;
        before
    }

    /// Read the element under the cursor.
    pub fn get(&self, array: &DynamicArray) -> Result<i32, ArrayError> {
        self.at(array, 0)
    }

    /// Mutable reference to the element under the cursor.
    pub fn get_mut<'a>(&self, array: &'a mut DynamicArray) -> Result<&'a mut i32, ArrayError> {
        self.at_mut(array, 0)
    }

    /// Read the element `offset` positions from the cursor.
    pub fn at(&self, array: &DynamicArray, offset: isize) -> Result<i32, ArrayError> {
        let index = array.resolve(*self, offset)?;
        Ok(array.as_slice()[index])
    }

    /// Mutable reference to the element `offset` positions from the cursor.
    pub fn at_mut<'a>(
        &self,
        array: &'a mut DynamicArray,
        offset: isize,
    ) -> Result<&'a mut i32, ArrayError> {
        let index = array.resolve(*self, offset)?;
        Ok(&mut array.as_mut_slice()[index])
    }
}

impl Default for Cursor {
    /// A cursor at position 0 of the empty buffer, equal to `begin()` of
    /// any unallocated array.
    fn default() -> Self {
        Self::new(BufferId::EMPTY, 0)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor(buf={}, idx={})", self.buffer, self.index)
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.buffer != other.buffer {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;

    fn add(self, offset: isize) -> Cursor {
        Cursor::new(self.buffer, self.index + offset)
    }
}

impl Add<Cursor> for isize {
    type Output = Cursor;

    fn add(self, cursor: Cursor) -> Cursor {
        cursor + self
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;

    fn sub(self, offset: isize) -> Cursor {
        Cursor::new(self.buffer, self.index - offset)
    }
}

/// Signed distance between two positions. Only meaningful when both
/// cursors refer to the same buffer.
impl Sub<Cursor> for Cursor {
    type Output = isize;

    fn sub(self, other: Cursor) -> isize {
        debug_assert_eq!(
            self.buffer, other.buffer,
            "distance between cursors on different buffers"
        );
        self.index - other.index
    }
}

impl AddAssign<isize> for Cursor {
    fn add_assign(&mut self, offset: isize) {
        self.index += offset;
    }
}

impl SubAssign<isize> for Cursor {
    fn sub_assign(&mut self, offset: isize) {
        self.index -= offset;
    }
}
