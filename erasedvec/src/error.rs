use thiserror::Error;

/// Error types for `ErasedVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ErasedVecError {
    /// An argument is malformed (zero element size, empty fill pattern, short slice)
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of why the argument was rejected
        reason: &'static str,
    },
    /// A value's byte length differs from the vector's element size
    #[error("Value size mismatch: expected {expected} bytes, got {provided} bytes")]
    ValueSizeMismatch {
        /// Element size of the vector
        expected: usize,
        /// Length of the provided value
        provided: usize,
    },
    /// Index is beyond the current vector length
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation requires at least one element
    #[error("Operation on empty vector")]
    EmptyVector,
    /// No element is byte-equal to the searched value
    #[error("Value not found")]
    NotFound,
    /// The backing buffer could not be allocated
    #[error("Allocation failure: could not allocate {requested_bytes} bytes")]
    AllocationFailure {
        /// Size of the buffer that was requested (`usize::MAX` on overflow)
        requested_bytes: usize,
    },
}
