#![no_std]

//! `ErasedVec`: a growable vector of fixed-size elements whose type is only known
//! by its byte width.
//!
//! The vector owns one contiguous heap buffer of `capacity * element_size` bytes.
//! Values are written and read as byte slices; every element-level copy,
//! comparison and fill goes through the small [`byte_ops`] module. For vectors
//! of plain numbers, [`TypedVec`] puts a typed face on the same storage.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth Policy
//!
//! - A new vector has a capacity of [`DEFAULT_CAPACITY`] unless told otherwise.
//! - When the length would exceed the capacity, the buffer is reallocated to
//!   `new_length * 2 + 1` slots, so appends are amortized O(1).
//! - [`ErasedVec::shrink`] reallocates down to exactly `len()` slots.
//! - A failed allocation leaves the vector exactly as it was.
//!
//! ```
//! # use erasedvec::ErasedVec;
//! let mut v = ErasedVec::new(4).unwrap();
//! assert_eq!(v.capacity(), 1);
//!
//! v.push_back(&1u32.to_ne_bytes()).unwrap();
//! v.push_back(&2u32.to_ne_bytes()).unwrap(); // grows to 2 * 2 + 1
//! assert_eq!(v.capacity(), 5);
//!
//! v.shrink().unwrap();
//! assert_eq!(v.capacity(), 2);
//! ```
//!
//! # Borrowed Views
//!
//! [`ErasedVec::at`], [`ErasedVec::front`], [`ErasedVec::back`],
//! [`ErasedVec::pop_back`] and the iterators hand out slices that point into the
//! buffer. They borrow the vector, so the compiler rejects any use after the
//! next mutating call:
//!
//! ```compile_fail
//! # use erasedvec::ErasedVec;
//! let mut v = ErasedVec::new(1).unwrap();
//! v.push_back(&[7]).unwrap();
//! let first = v.front().unwrap();
//! v.push_back(&[8]).unwrap(); // may reallocate
//! assert_eq!(first, &[7]);
//! ```
//!
//! Copy the bytes out when they must survive a mutation:
//!
//! ```
//! # use erasedvec::ErasedVec;
//! let mut v = ErasedVec::new(1).unwrap();
//! v.push_back(&[7]).unwrap();
//! let popped = v.pop_back().map(<[u8]>::to_vec);
//! v.push_back(&[8]).unwrap();
//! assert_eq!(popped.as_deref(), Some(&[7u8][..]));
//! ```
//!
//! # Lifecycle
//!
//! [`ErasedVec::free`] consumes the vector and releases its buffer. The returned
//! [`FreedVec`] remembers only the element size; nothing can be read through it
//! until [`FreedVec::reinit`] allocates a fresh, empty buffer.
//!
//! ```
//! # use erasedvec::{ErasedVec, DEFAULT_CAPACITY};
//! let mut v = ErasedVec::new(2).unwrap();
//! v.push_back(&[1, 2]).unwrap();
//!
//! let freed = v.free();
//! let v = freed.reinit(0, 0).unwrap();
//! assert!(v.is_empty());
//! assert_eq!(v.capacity(), DEFAULT_CAPACITY);
//! ```
//!
//! # Typed Front End
//!
//! ```
//! # use erasedvec::TypedVec;
//! let mut v: TypedVec<i32> = [3, 4, 5, 6].into_iter().collect();
//! assert_eq!(v.pop_back(), Some(6));
//!
//! v.insert(104, 0).unwrap();
//! assert_eq!(v.find(4), Some(2));
//!
//! let removed = v.remove_if(0, v.len(), 4, |a, b| a == b).unwrap();
//! assert_eq!(removed, 1);
//! assert_eq!(v.iter().collect::<Vec<_>>(), vec![104, 3, 5]);
//! ```

extern crate alloc;

pub mod byte_ops;
mod core;
mod element;
mod error;
mod iter;
mod typed;

// Re-export public types and traits
pub use crate::core::{ErasedVec, FreedVec, DEFAULT_CAPACITY, DEFAULT_LENGTH};
pub use element::Element;
pub use error::ErasedVecError;
pub use iter::{ErasedVecIter, ErasedVecRevIter};
pub use typed::{TypedVec, TypedVecIter};
