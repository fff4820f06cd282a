//! Byte-level compare, copy and fill helpers.
//!
//! `ErasedVec` knows nothing about its elements beyond their width, so every
//! element-level read, write and comparison is routed through these functions.
//! None of them allocate, and none write outside the destination range.

use core::ops::Range;

use crate::error::ErasedVecError;

/// Returns `true` if the first `n` bytes of `a` and `b` are equal.
///
/// Returns `false` when `n` is zero or either slice is shorter than `n`.
#[must_use]
pub fn compare(a: &[u8], b: &[u8], n: usize) -> bool {
    if n == 0 {
        return false;
    }
    match (a.get(..n), b.get(..n)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Copies the first `n` bytes of `src` into `dst`.
///
/// # Errors
///
/// Returns `ErasedVecError::InvalidArgument` if either slice is shorter than `n`.
pub fn copy(dst: &mut [u8], src: &[u8], n: usize) -> Result<(), ErasedVecError> {
    let src = src.get(..n).ok_or(ErasedVecError::InvalidArgument {
        reason: "source shorter than copy length",
    })?;
    let dst = dst.get_mut(..n).ok_or(ErasedVecError::InvalidArgument {
        reason: "destination shorter than copy length",
    })?;
    dst.copy_from_slice(src);
    Ok(())
}

/// Tiles `value` across the whole of `dst`.
///
/// # Errors
///
/// Returns `ErasedVecError::InvalidArgument` if `value` is empty or `dst` is not
/// a whole number of `value`-sized chunks.
pub fn fill_range(dst: &mut [u8], value: &[u8]) -> Result<(), ErasedVecError> {
    if value.is_empty() {
        return Err(ErasedVecError::InvalidArgument {
            reason: "fill pattern is empty",
        });
    }
    if dst.len() % value.len() != 0 {
        return Err(ErasedVecError::InvalidArgument {
            reason: "fill range is not a multiple of the pattern length",
        });
    }
    for chunk in dst.chunks_exact_mut(value.len()) {
        chunk.copy_from_slice(value);
    }
    Ok(())
}

/// Moves `src` to start at `dst` inside the same buffer. Overlapping ranges are fine.
///
/// # Errors
///
/// Returns `ErasedVecError::InvalidArgument` if either range falls outside `buf`.
pub fn shift_within(buf: &mut [u8], src: Range<usize>, dst: usize) -> Result<(), ErasedVecError> {
    let fits = src.start <= src.end
        && src.end <= buf.len()
        && dst
            .checked_add(src.len())
            .is_some_and(|dst_end| dst_end <= buf.len());
    if !fits {
        return Err(ErasedVecError::InvalidArgument {
            reason: "shift range outside buffer",
        });
    }
    buf.copy_within(src, dst);
    Ok(())
}
