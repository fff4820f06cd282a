use core::iter::Rev;
use core::slice::ChunksExact;

/// Iterator over the elements of an `ErasedVec`, first to last
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct ErasedVecIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> ErasedVecIter<'a> {
    pub(crate) fn new(live: &'a [u8], element_size: usize) -> Self {
        Self {
            chunks: live.chunks_exact(element_size),
        }
    }
}

impl<'a> Iterator for ErasedVecIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for ErasedVecIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}

impl ExactSizeIterator for ErasedVecIter<'_> {}

/// Reverse iterator over the elements of an `ErasedVec`, last to first
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct ErasedVecRevIter<'a> {
    chunks: Rev<ChunksExact<'a, u8>>,
}

impl<'a> ErasedVecRevIter<'a> {
    pub(crate) fn new(live: &'a [u8], element_size: usize) -> Self {
        Self {
            chunks: live.chunks_exact(element_size).rev(),
        }
    }
}

impl<'a> Iterator for ErasedVecRevIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for ErasedVecRevIter<'_> {}
