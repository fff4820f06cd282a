use core::fmt;
use core::marker::PhantomData;

use crate::core::{ErasedVec, FreedVec, DEFAULT_CAPACITY, DEFAULT_LENGTH};
use crate::element::Element;
use crate::error::ErasedVecError;
use crate::iter::ErasedVecIter;

/// A growable vector of `T`, stored as `T::SIZE`-byte elements in an [`ErasedVec`].
///
/// Values go in and come out by copy; nothing borrowed from the buffer leaks
/// to the caller, so there are no element views to invalidate.
pub struct TypedVec<T: Element> {
    inner: ErasedVec,
    _marker: PhantomData<T>,
}

impl<T: Element> TypedVec<T> {
    /// Creates an empty vector with the default capacity.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the initial buffer cannot be allocated.
    pub fn new() -> Result<Self, ErasedVecError> {
        Self::with_capacity(DEFAULT_LENGTH, DEFAULT_CAPACITY)
    }

    /// Creates a vector of `initial_length` zero-encoded values.
    ///
    /// See [`ErasedVec::with_capacity`] for how the capacity is chosen.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the initial buffer cannot be allocated.
    pub fn with_capacity(
        initial_length: usize,
        initial_capacity: usize,
    ) -> Result<Self, ErasedVecError> {
        let inner = ErasedVec::with_capacity(T::SIZE, initial_length, initial_capacity)?;
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    /// Wraps an existing erased vector whose element size matches `T` and whose
    /// elements all decode as `T`.
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::ValueSizeMismatch` if the element sizes differ,
    /// or `ErasedVecError::InvalidArgument` if any stored element is not a
    /// valid encoding of `T`.
    pub fn from_erased(inner: ErasedVec) -> Result<Self, ErasedVecError> {
        if inner.element_size() != T::SIZE {
            return Err(ErasedVecError::ValueSizeMismatch {
                expected: inner.element_size(),
                provided: T::SIZE,
            });
        }
        if inner.iter().any(|element| T::from_bytes(element).is_none()) {
            return Err(ErasedVecError::InvalidArgument {
                reason: "stored element is not a valid encoding of the value type",
            });
        }
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub fn as_erased(&self) -> &ErasedVec {
        &self.inner
    }

    #[must_use]
    pub fn into_erased(self) -> ErasedVec {
        self.inner
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<T> {
        self.inner.at(index).and_then(T::from_bytes)
    }

    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.inner.front().and_then(T::from_bytes)
    }

    #[must_use]
    pub fn back(&self) -> Option<T> {
        self.inner.back().and_then(T::from_bytes)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn push_back(&mut self, value: T) -> Result<(), ErasedVecError> {
        self.inner.push_back(value.to_bytes().as_ref())
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back().and_then(T::from_bytes)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `pos >= len()`, or
    /// `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn insert(&mut self, value: T, pos: usize) -> Result<(), ErasedVecError> {
        self.inner.insert(value.to_bytes().as_ref(), pos)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `pos >= len()`.
    pub fn erase_index(&mut self, pos: usize) -> Result<(), ErasedVecError> {
        self.inner.erase_index(pos)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::NotFound` if no element equals `value`.
    pub fn erase_element(&mut self, value: T) -> Result<(), ErasedVecError> {
        self.inner.erase_element(value.to_bytes().as_ref())
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` if `index >= len()`.
    pub fn assign(&mut self, value: T, index: usize) -> Result<(), ErasedVecError> {
        self.inner.assign(value.to_bytes().as_ref(), index)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::EmptyVector` if the vector is empty.
    pub fn fill(&mut self, value: T) -> Result<(), ErasedVecError> {
        self.inner.fill(value.to_bytes().as_ref())
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn resize(&mut self, new_length: usize) -> Result<(), ErasedVecError> {
        self.inner.resize(new_length)
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the smaller buffer cannot be allocated.
    pub fn shrink(&mut self) -> Result<(), ErasedVecError> {
        self.inner.shrink()
    }

    /// # Errors
    ///
    /// Returns `ErasedVecError::AllocationFailure` if the buffer cannot grow.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ErasedVecError> {
        self.inner.reserve(additional)
    }

    /// Removes every element in `start..end` for which `predicate(element, &value)`
    /// holds; see [`ErasedVec::remove_if`].
    ///
    /// # Errors
    ///
    /// Returns `ErasedVecError::OutOfRange` unless `start < end <= len()`.
    pub fn remove_if<F>(
        &mut self,
        start: usize,
        end: usize,
        value: T,
        mut predicate: F,
    ) -> Result<usize, ErasedVecError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.inner
            .remove_if(start, end, value.to_bytes().as_ref(), |element, value| {
                match (T::from_bytes(element), T::from_bytes(value)) {
                    (Some(element), Some(value)) => predicate(&element, &value),
                    _ => false,
                }
            })
    }

    #[must_use]
    pub fn find(&self, value: T) -> Option<usize> {
        self.inner.find(value.to_bytes().as_ref())
    }

    #[must_use]
    pub fn count(&self, value: T) -> usize {
        self.inner.count(value.to_bytes().as_ref())
    }

    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.inner.contains(value.to_bytes().as_ref())
    }

    /// Returns an iterator over copies of the elements.
    #[must_use]
    pub fn iter(&self) -> TypedVecIter<'_, T> {
        TypedVecIter {
            inner: self.inner.iter(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn free(self) -> FreedVec {
        self.inner.free()
    }
}

impl<T: Element> Clone for TypedVec<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for TypedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> PartialEq for TypedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Element> Eq for TypedVec<T> {}

impl<T: Element> FromIterator<T> for TypedVec<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated, like `Vec` does.
    #[allow(clippy::expect_used)]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new().expect("allocation of the initial buffer failed");
        vec.extend(iter);
        vec
    }
}

impl<T: Element> Extend<T> for TypedVec<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot grow, like `Vec` does.
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower).expect("allocation failed while extending");
        for value in iter {
            self.push_back(value)
                .expect("allocation failed while extending");
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a TypedVec<T> {
    type Item = T;
    type IntoIter = TypedVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over copies of the elements of a `TypedVec`
///
/// Double-ended, so `.rev()` walks from the last element to the first.
#[derive(Clone, Debug)]
pub struct TypedVecIter<'a, T> {
    inner: ErasedVecIter<'a>,
    _marker: PhantomData<T>,
}

impl<T: Element> Iterator for TypedVecIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(T::from_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Element> DoubleEndedIterator for TypedVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(T::from_bytes)
    }
}

impl<T: Element> ExactSizeIterator for TypedVecIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_from_erased_checks_width() {
        let erased = ErasedVec::new(2).unwrap();
        assert_eq!(
            TypedVec::<u32>::from_erased(erased).unwrap_err(),
            ErasedVecError::ValueSizeMismatch {
                expected: 2,
                provided: 4
            }
        );

        let erased = ErasedVec::new(4).unwrap();
        assert!(TypedVec::<f32>::from_erased(erased).is_ok());
    }

    #[test]
    fn test_extend_reserves_once() {
        let mut v: TypedVec<u16> = TypedVec::new().unwrap();
        v.extend([1u16, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
