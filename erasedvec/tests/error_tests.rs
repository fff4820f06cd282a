use erasedvec::{ErasedVec, ErasedVecError};

fn sample() -> ErasedVec {
    let mut v = ErasedVec::new(2).unwrap();
    v.push_back(&[1, 0]).unwrap();
    v.push_back(&[2, 0]).unwrap();
    v
}

#[test]
fn test_error_zero_element_size() {
    assert_eq!(
        ErasedVec::new(0).unwrap_err(),
        ErasedVecError::InvalidArgument {
            reason: "element size must be greater than zero"
        }
    );
}

#[test]
fn test_error_value_size_mismatch() {
    let mut v = sample();

    assert_eq!(
        v.push_back(&[1, 2, 3]),
        Err(ErasedVecError::ValueSizeMismatch {
            expected: 2,
            provided: 3
        })
    );
    assert_eq!(v.len(), 2);

    assert!(matches!(
        v.insert(&[1], 0),
        Err(ErasedVecError::ValueSizeMismatch { .. })
    ));
    assert!(matches!(
        v.assign(&[], 0),
        Err(ErasedVecError::ValueSizeMismatch { .. })
    ));
    assert!(matches!(
        v.fill(&[9]),
        Err(ErasedVecError::ValueSizeMismatch { .. })
    ));
    assert_eq!(v.as_bytes(), &[1, 0, 2, 0]);
}

#[test]
fn test_error_insert_at_length_rejected() {
    let mut v = sample();

    assert_eq!(
        v.insert(&[3, 0], 2),
        Err(ErasedVecError::OutOfRange {
            index: 2,
            length: 2
        })
    );
    assert_eq!(v.len(), 2);
}

#[test]
fn test_error_insert_into_empty_vector() {
    let mut v = ErasedVec::new(2).unwrap();
    assert!(matches!(
        v.insert(&[1, 1], 0),
        Err(ErasedVecError::OutOfRange { index: 0, length: 0 })
    ));
    assert!(v.is_empty());
}

#[test]
fn test_error_erase_index_out_of_range() {
    let mut v = sample();

    assert_eq!(
        v.erase_index(5),
        Err(ErasedVecError::OutOfRange {
            index: 5,
            length: 2
        })
    );
    assert_eq!(v.as_bytes(), &[1, 0, 2, 0]);
}

#[test]
fn test_error_erase_element_not_found() {
    let mut v = sample();

    assert_eq!(v.erase_element(&[9, 9]), Err(ErasedVecError::NotFound));
    assert_eq!(v.len(), 2);
}

#[test]
fn test_error_assign_out_of_range() {
    let mut v = sample();

    assert_eq!(
        v.assign(&[7, 7], 2),
        Err(ErasedVecError::OutOfRange {
            index: 2,
            length: 2
        })
    );
}

#[test]
fn test_error_fill_empty_vector() {
    let mut v = ErasedVec::new(2).unwrap();
    assert_eq!(v.fill(&[0, 0]), Err(ErasedVecError::EmptyVector));
}

#[test]
fn test_error_remove_if_bad_ranges() {
    let mut v = sample();
    let eq = |a: &[u8], b: &[u8]| a == b;

    assert_eq!(
        v.remove_if(0, 3, &[1, 0], eq),
        Err(ErasedVecError::OutOfRange {
            index: 3,
            length: 2
        })
    );
    assert_eq!(
        v.remove_if(1, 1, &[1, 0], eq),
        Err(ErasedVecError::OutOfRange {
            index: 1,
            length: 2
        })
    );
    assert_eq!(
        v.remove_if(2, 1, &[1, 0], eq),
        Err(ErasedVecError::OutOfRange {
            index: 2,
            length: 2
        })
    );
    assert_eq!(v.as_bytes(), &[1, 0, 2, 0]);
}

#[test]
fn test_error_remove_if_on_empty_vector() {
    let mut v = ErasedVec::new(2).unwrap();
    assert!(v.remove_if(0, 0, &[0, 0], |a, b| a == b).is_err());
}

#[test]
fn test_error_growth_overflow_is_atomic() {
    let mut v = sample();
    let capacity = v.capacity();

    assert!(matches!(
        v.resize(usize::MAX / 2),
        Err(ErasedVecError::AllocationFailure { .. })
    ));
    assert!(matches!(
        v.reserve(usize::MAX),
        Err(ErasedVecError::AllocationFailure { .. })
    ));

    assert_eq!(v.len(), 2);
    assert_eq!(v.capacity(), capacity);
    assert_eq!(v.as_bytes(), &[1, 0, 2, 0]);
}

#[test]
fn test_error_huge_initial_capacity() {
    assert!(matches!(
        ErasedVec::with_capacity(16, 0, usize::MAX / 4),
        Err(ErasedVecError::AllocationFailure { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ErasedVecError::ValueSizeMismatch {
            expected: 4,
            provided: 2
        }
        .to_string(),
        "Value size mismatch: expected 4 bytes, got 2 bytes"
    );
    assert_eq!(ErasedVecError::NotFound.to_string(), "Value not found");
    assert_eq!(
        ErasedVecError::AllocationFailure {
            requested_bytes: 64
        }
        .to_string(),
        "Allocation failure: could not allocate 64 bytes"
    );
}
