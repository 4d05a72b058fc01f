//! A growable, contiguous array of `i32` with generation-checked
//! random-access cursors.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray
//! ├── Buffer (Box<[i32]>, capacity = slots.len(), tagged with a BufferId)
//! ├── len (live prefix of the buffer)
//! └── GrowthPolicy (1, 2, 4, 8, ... by default)
//!
//! Cursor = (BufferId, isize position), resolved against a DynamicArray
//! ```
//!
//! Storage is owned by a boxed slice, so release happens on drop and copy
//! vs. move are explicit: [`Clone`] deep-copies into a fresh buffer,
//! [`DynamicArray::take`] transfers the buffer and leaves an empty array
//! behind.
//!
//! # Cursors
//!
//! A [`Cursor`] does not borrow the array. It records the id of the buffer
//! it was created against, and every reallocation assigns a new id, so a
//! cursor that outlives its buffer is detected on dereference and reported
//! as [`ArrayError::StaleCursor`].
//!
//! # Unsafe code
//!
//! Confined to `raw.rs` (unchecked element access). Everything else is
//! safe code over `Box<[i32]>`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod id;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::GrowthPolicy;
pub use cursor::Cursor;
pub use error::ArrayError;
pub use id::BufferId;
