//! ArraySlice: a bounds-checked, zero-copy window over a shared array.
//!
//! An [`ArraySlice`] lets a caller hand out part of an array without copying
//! it:
//! - The window (`offset`, `len`) is fixed at construction and always lies
//!   inside the backing array
//! - Elements can be read and written through the window by logical index
//! - Writes are visible through the backing [`SharedArray`] and every other
//!   slice over it
//! - Structural list operations (insert, remove, append, clear) are rejected
//!   with [`SliceError::Unsupported`]
//!
//! # Example
//!
//! ```
//! use array_slice::{ArraySlice, ErrorKind, SharedArray};
//!
//! let array = SharedArray::from([10, 20, 30, 40, 50]);
//! let slice = ArraySlice::from_range(array.clone(), 1, 3).unwrap();
//!
//! assert_eq!(slice.len(), 3);
//! assert_eq!(*slice.get(0).unwrap(), 20);
//! assert_eq!(slice.index_of(&40), Some(2));
//! assert!(!slice.contains(&99));
//!
//! let mut destination = [0; 3];
//! slice.copy_to(&mut destination, 0).unwrap();
//! assert_eq!(destination, [20, 30, 40]);
//!
//! // 5 - 4 = 1 element left, so two cannot fit.
//! let error = ArraySlice::from_range(array, 4, 2).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! # Gotchas
//!
//! - **Not thread-safe**: the backing array is `Rc`/`RefCell` based, so slices
//!   are neither `Send` nor `Sync`.
//! - **Borrow conflicts panic**: holding a [`RefMut`](core::cell::RefMut) from
//!   [`ArraySlice::get_mut`] or [`ArraySlice::borrow_mut`] while reading the
//!   same array through another handle panics, as with any `RefCell`.

#![no_std]

extern crate alloc;

mod array;
mod error;
mod iter;
mod slice;
mod view;

pub use array::SharedArray;
pub use error::{ErrorKind, Result, SliceError};
pub use iter::{IntoIter, Iter};
pub use slice::ArraySlice;
pub use view::{List, SequenceView};
