//! Unchecked element access.
//!
//! The only module allowed to contain `unsafe` code. Each block carries a
//! `// SAFETY:` comment naming the caller obligation it relies on.

#![allow(unsafe_code)]

use crate::array::DynamicArray;

impl DynamicArray {
    /// Read the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert
    /// this.
    ///
    /// ```
    /// use intvec::DynamicArray;
    ///
    /// let a = DynamicArray::from_values(&[1, 2, 3]);
    /// // SAFETY: 2 < a.len().
    /// assert_eq!(unsafe { a.get_unchecked(2) }, 3);
    /// ```
    pub unsafe fn get_unchecked(&self, index: usize) -> i32 {
        debug_assert!(index < self.len(), "get_unchecked: {index} >= {}", self.len());
        // SAFETY: the caller guarantees index < len, and the live slice
        // has exactly len elements.
        unsafe { *self.as_slice().get_unchecked(index) }
    }

    /// Mutable reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert
    /// this.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut i32 {
        debug_assert!(index < self.len(), "get_unchecked_mut: {index} >= {}", self.len());
        // SAFETY: as for `get_unchecked`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}
