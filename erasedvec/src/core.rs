use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use log::{debug, trace};

use crate::byte_ops;
use crate::error::ErasedVecError;
use crate::iter::{ErasedVecIter, ErasedVecRevIter};

/// Capacity used when none (or zero) is requested at construction.
pub const DEFAULT_CAPACITY: usize = 1;
/// Number of elements a vector starts with unless told otherwise.
pub const DEFAULT_LENGTH: usize = 0;

/// A growable, contiguous vector of fixed-size elements whose type is only
/// known by its byte width.
///
/// Element values are passed in and handed out as byte slices of exactly
/// [`element_size`](Self::element_size) bytes. Slices returned by accessors
/// borrow the vector, so they cannot outlive the next mutating call.
#[derive(Clone)]
pub struct ErasedVec {
    // Always `capacity * element_size` bytes long; bytes past the live
    // region are slack and never read before being overwritten.
    storage: Vec<u8>,
    length: usize,
    capacity: usize,
    element_size: usize,
}

impl ErasedVec {
    /// Creates an empty vector with the default capacity.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::InvalidArgument` if `element_size` is 0, or
    /// `ErasedVecError::AllocationFailure` if the initial buffer cannot be allocated.
    pub fn new(element_size: usize) -> Result<Self, ErasedVecError> {
        Self::with_capacity(element_size, DEFAULT_LENGTH, DEFAULT_CAPACITY)
    }

    /// Creates a vector holding `initial_length` zeroed elements.
    ///
    /// An `initial_capacity` of 0 falls back to [`DEFAULT_CAPACITY`]. If
    /// `initial_length` exceeds the capacity, the capacity becomes
    /// `initial_length + 1` so that a non-empty vector keeps a spare slot.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::InvalidArgument` if `element_size` is 0, or
    /// `ErasedVecError::AllocationFailure` if the initial buffer cannot be allocated.
    pub fn with_capacity(
        element_size: usize,
        initial_length: usize,
        initial_capacity: usize,
    ) -> Result<Self, ErasedVecError> {
        if element_size == 0 {
            return Err(ErasedVecError::InvalidArgument {
                reason: "element size must be greater than zero",
            });
        }

        let mut capacity = if initial_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            initial_capacity
        };
        if initial_length > capacity {
            capacity = initial_length
                .checked_add(1)
                .ok_or(ErasedVecError::AllocationFailure {
                    requested_bytes: usize::MAX,
                })?;
        }

        let bytes = bytes_for(capacity, element_size)?;
        let mut storage = allocate(bytes)?;
        storage.resize(bytes, 0);

        Ok(Self {
            storage,
            length: initial_length,
            capacity,
            element_size,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of element slots currently allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte width of one element, fixed at construction.
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    fn slot(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    fn live_bytes(&self) -> usize {
        self.length * self.element_size
    }

    fn check_bounds(&self, index: usize) -> Result<(), ErasedVecError> {
        if index >= self.length {
            Err(ErasedVecError::OutOfRange {
                index,
                length: self.length,
            })
        } else {
            Ok(())
        }
    }

    fn check_value(&self, value: &[u8]) -> Result<(), ErasedVecError> {
        if value.len() == self.element_size {
            Ok(())
        } else {
            Err(ErasedVecError::ValueSizeMismatch {
                expected: self.element_size,
                provided: value.len(),
            })
        }
    }

    /// Reallocates the buffer to hold exactly `new_capacity` elements, keeping
    /// the first `min(len, new_capacity)` of them.
    ///
    /// The old buffer is only released once the new one exists, so a failed
    /// allocation leaves the vector untouched.
    fn update_capacity(&mut self, new_capacity: usize) -> Result<(), ErasedVecError> {
        let bytes = bytes_for(new_capacity, self.element_size)?;
        let kept = self.length.min(new_capacity);
        let kept_bytes = kept * self.element_size;

        let mut fresh = allocate(bytes)?;
        fresh.resize(bytes, 0);
        byte_ops::copy(&mut fresh, &self.storage, kept_bytes)?;

        trace!(
            "erasedvec: capacity {} -> {} ({} bytes per element)",
            self.capacity,
            new_capacity,
            self.element_size
        );
        self.storage = fresh;
        self.capacity = new_capacity;
        self.length = kept;
        Ok(())
    }

    /// Sets the number of elements to `new_length`.
    ///
    /// Growing past the capacity reallocates to `new_length * 2 + 1` slots.
    /// Elements exposed by growing are zeroed; shrinking keeps the capacity.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer must grow and
    /// cannot; the vector is unchanged in that case.
    pub fn resize(&mut self, new_length: usize) -> Result<(), ErasedVecError> {
        if new_length > self.capacity {
            let new_capacity = new_length
                .checked_mul(2)
                .and_then(|doubled| doubled.checked_add(1))
                .ok_or(ErasedVecError::AllocationFailure {
                    requested_bytes: usize::MAX,
                })?;
            // Slack of a fresh buffer is already zeroed.
            self.update_capacity(new_capacity)?;
        } else if new_length > self.length {
            let exposed = self.live_bytes()..new_length * self.element_size;
            self.storage[exposed].fill(0);
        }
        self.length = new_length;
        Ok(())
    }

    /// Releases unused slack so that the capacity equals the length.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the smaller buffer cannot
    /// be allocated; the vector is unchanged in that case.
    pub fn shrink(&mut self) -> Result<(), ErasedVecError> {
        self.update_capacity(self.length)
    }

    /// Ensures room for at least `additional` more elements without changing the length.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ErasedVecError> {
        let needed = self
            .length
            .checked_add(additional)
            .ok_or(ErasedVecError::AllocationFailure {
                requested_bytes: usize::MAX,
            })?;
        if needed > self.capacity {
            self.update_capacity(needed)?;
        }
        Ok(())
    }

    /// Returns the element at `index`, or `None` if the index is out of bounds.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        if index >= self.length {
            return None;
        }
        self.storage.get(self.slot(index))
    }

    /// Mutable view of the element at `index`, or `None` if out of bounds.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.length {
            return None;
        }
        let slot = self.slot(index);
        self.storage.get_mut(slot)
    }

    #[must_use]
    pub fn front(&self) -> Option<&[u8]> {
        self.at(0)
    }

    #[must_use]
    pub fn back(&self) -> Option<&[u8]> {
        self.at(self.length.checked_sub(1)?)
    }

    /// The live elements as one contiguous byte slice, `len() * element_size()` bytes long.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.live_bytes()]
    }

    /// Appends `value` to the end of the vector.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::ValueSizeMismatch` if `value` is not exactly
    /// `element_size` bytes, or `ErasedVecError::AllocationFailure` if the
    /// buffer cannot grow.
    pub fn push_back(&mut self, value: &[u8]) -> Result<(), ErasedVecError> {
        self.check_value(value)?;
        let index = self.length;
        let new_length = index.checked_add(1).ok_or(ErasedVecError::AllocationFailure {
            requested_bytes: usize::MAX,
        })?;
        self.resize(new_length)?;
        let slot = self.slot(index);
        byte_ops::copy(&mut self.storage[slot], value, self.element_size)
    }

    /// Removes the last element and returns its bytes.
    ///
    /// The returned slice borrows the vector, so it must be copied out before
    /// the next mutation. Returns `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<&[u8]> {
        let index = self.length.checked_sub(1)?;
        self.length = index;
        self.storage.get(self.slot(index))
    }

    /// Inserts `value` at `pos`, shifting the following elements one slot right.
    ///
    /// Only existing positions are accepted; use [`push_back`](Self::push_back)
    /// to append.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `pos >= len()`,
    /// `ErasedVecError::ValueSizeMismatch` for a wrongly sized value, or
    /// `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn insert(&mut self, value: &[u8], pos: usize) -> Result<(), ErasedVecError> {
        self.check_value(value)?;
        self.check_bounds(pos)?;

        let old_length = self.length;
        self.resize(old_length + 1)?;

        let tail = pos * self.element_size..old_length * self.element_size;
        byte_ops::shift_within(&mut self.storage, tail, (pos + 1) * self.element_size)?;
        let slot = self.slot(pos);
        byte_ops::copy(&mut self.storage[slot], value, self.element_size)
    }

    /// Removes the element at `pos`, shifting the following elements one slot left.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `pos >= len()`.
    pub fn erase_index(&mut self, pos: usize) -> Result<(), ErasedVecError> {
        self.check_bounds(pos)?;

        let tail = (pos + 1) * self.element_size..self.live_bytes();
        byte_ops::shift_within(&mut self.storage, tail, pos * self.element_size)?;
        self.resize(self.length - 1)
    }

    /// Removes the first element byte-equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::NotFound` if no element matches, or
    /// `ErasedVecError::ValueSizeMismatch` for a wrongly sized value.
    pub fn erase_element(&mut self, value: &[u8]) -> Result<(), ErasedVecError> {
        self.check_value(value)?;
        let index = self.find(value).ok_or(ErasedVecError::NotFound)?;
        self.erase_index(index)
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `index >= len()`, or
    /// `ErasedVecError::ValueSizeMismatch` for a wrongly sized value.
    pub fn assign(&mut self, value: &[u8], index: usize) -> Result<(), ErasedVecError> {
        self.check_value(value)?;
        self.check_bounds(index)?;
        let slot = self.slot(index);
        byte_ops::copy(&mut self.storage[slot], value, self.element_size)
    }

    /// Overwrites every element with `value`.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::EmptyVector` if there is nothing to fill, or
    /// `ErasedVecError::ValueSizeMismatch` for a wrongly sized value.
    pub fn fill(&mut self, value: &[u8]) -> Result<(), ErasedVecError> {
        self.check_value(value)?;
        if self.is_empty() {
            return Err(ErasedVecError::EmptyVector);
        }
        let live = self.live_bytes();
        byte_ops::fill_range(&mut self.storage[..live], value)
    }

    /// Drops all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Removes every element in `start..end` for which `compare_fn(element, value)`
    /// holds, and returns how many were removed.
    ///
    /// Survivors keep their relative order and everything after `end` moves
    /// left to close the gap.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` unless `start < end <= len()`, or
    /// `ErasedVecError::ValueSizeMismatch` for a wrongly sized value.
    pub fn remove_if<F>(
        &mut self,
        start: usize,
        end: usize,
        value: &[u8],
        mut compare_fn: F,
    ) -> Result<usize, ErasedVecError>
    where
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        self.check_value(value)?;
        if end > self.length {
            return Err(ErasedVecError::OutOfRange {
                index: end,
                length: self.length,
            });
        }
        if start >= end {
            return Err(ErasedVecError::OutOfRange {
                index: start,
                length: self.length,
            });
        }

        let mut write = start;
        for read in start..end {
            if compare_fn(&self.storage[self.slot(read)], value) {
                continue;
            }
            if write != read {
                let from = self.slot(read);
                byte_ops::shift_within(&mut self.storage, from, write * self.element_size)?;
            }
            write += 1;
        }

        let removed = end - write;
        if removed > 0 {
            let tail = end * self.element_size..self.live_bytes();
            byte_ops::shift_within(&mut self.storage, tail, write * self.element_size)?;
            self.resize(self.length - removed)?;
        }
        Ok(removed)
    }

    /// Index of the first element byte-equal to `value`.
    ///
    /// A value of the wrong width never matches.
    #[must_use]
    pub fn find(&self, value: &[u8]) -> Option<usize> {
        if value.len() != self.element_size {
            return None;
        }
        self.iter()
            .position(|element| byte_ops::compare(element, value, self.element_size))
    }

    /// Number of elements byte-equal to `value`.
    #[must_use]
    pub fn count(&self, value: &[u8]) -> usize {
        if value.len() != self.element_size {
            return 0;
        }
        self.iter()
            .filter(|element| byte_ops::compare(element, value, self.element_size))
            .count()
    }

    #[must_use]
    pub fn contains(&self, value: &[u8]) -> bool {
        self.find(value).is_some()
    }

    /// Returns an iterator over the elements, first to last.
    #[must_use]
    pub fn iter(&self) -> ErasedVecIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> ErasedVecRevIter<'_> {
        ErasedVecRevIter::new(self.as_bytes(), self.element_size)
    }

    /// Releases the backing buffer.
    ///
    /// The vector is consumed; the returned [`FreedVec`] only remembers the
    /// element size and can be turned back into an empty vector with
    /// [`FreedVec::reinit`].
    #[must_use]
    pub fn free(self) -> FreedVec {
        trace!(
            "erasedvec: freeing {} slots of {} bytes",
            self.capacity,
            self.element_size
        );
        FreedVec {
            element_size: self.element_size,
        }
    }
}

impl fmt::Debug for ErasedVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedVec")
            .field("len", &self.length)
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl PartialEq for ErasedVec {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ErasedVec {}

impl<'a> IntoIterator for &'a ErasedVec {
    type Item = &'a [u8];
    type IntoIter = ErasedVecIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ErasedVecIter::new(self.as_bytes(), self.element_size)
    }
}

/// A vector whose buffer has been released by [`ErasedVec::free`].
///
/// Nothing can be read from or written to it; the only way forward is
/// [`reinit`](Self::reinit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreedVec {
    element_size: usize,
}

impl FreedVec {
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Allocates a fresh buffer with the same element size.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn reinit(
        self,
        initial_length: usize,
        initial_capacity: usize,
    ) -> Result<ErasedVec, ErasedVecError> {
        ErasedVec::with_capacity(self.element_size, initial_length, initial_capacity)
    }
}

fn bytes_for(slots: usize, element_size: usize) -> Result<usize, ErasedVecError> {
    slots
        .checked_mul(element_size)
        .ok_or(ErasedVecError::AllocationFailure {
            requested_bytes: usize::MAX,
        })
}

fn allocate(bytes: usize) -> Result<Vec<u8>, ErasedVecError> {
    let mut buffer = Vec::new();
    if buffer.try_reserve_exact(bytes).is_err() {
        debug!("erasedvec: failed to allocate {} bytes", bytes);
        return Err(ErasedVecError::AllocationFailure {
            requested_bytes: bytes,
        });
    }
    Ok(buffer)
}
