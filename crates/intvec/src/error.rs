//! Container error types.

use std::error::Error;
use std::fmt;

use crate::id::BufferId;

/// Errors reported by the checked access paths of a
/// [`DynamicArray`](crate::DynamicArray) and its cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A position outside the live range `[0, len)`.
    IndexOutOfBounds {
        /// The requested position.
        index: isize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
    /// A cursor whose buffer has been reallocated, released, or belongs
    /// to a different array.
    StaleCursor {
        /// The buffer the cursor was created against.
        cursor: BufferId,
        /// The buffer currently owned by the array.
        current: BufferId,
    },
    /// The allocator could not provide the requested slots.
    AllocationFailed {
        /// Number of `i32` slots requested.
        requested: usize,
    },
    /// The next capacity under the growth policy does not fit in `usize`.
    CapacityOverflow {
        /// Capacity before the attempted growth.
        current: usize,
    },
    /// A [`GrowthPolicy`](crate::GrowthPolicy) rejected at construction.
    InvalidPolicy {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
            Self::StaleCursor { cursor, current } => {
                write!(f, "stale cursor: buffer {cursor}, current buffer {current}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::CapacityOverflow { current } => {
                write!(f, "capacity overflow: cannot grow beyond {current} slots")
            }
            Self::InvalidPolicy { reason } => write!(f, "invalid growth policy: {reason}"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = ArrayError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index out of bounds: index 7, len 3");
    }

    #[test]
    fn stale_cursor_display_mentions_both_buffers() {
        let err = ArrayError::StaleCursor {
            cursor: BufferId::EMPTY,
            current: BufferId::EMPTY,
        };
        let text = err.to_string();
        assert!(text.starts_with("stale cursor"));
        assert!(text.contains("current buffer"));
    }
}
