//! Walks through the vector operations on a vector of `i32`, printing the
//! state after each step.

use erasedvec::{ErasedVec, ErasedVecError};

fn read(bytes: Option<&[u8]>) -> Option<i32> {
    bytes
        .and_then(|b| <[u8; 4]>::try_from(b).ok())
        .map(i32::from_ne_bytes)
}

fn main() -> Result<(), ErasedVecError> {
    let mut v = ErasedVec::with_capacity(4, 0, 1)?;

    println!("Initial size:     {}", v.len());
    println!("Initial capacity: {}", v.capacity());
    println!("Empty?            {}", v.is_empty());
    println!("Element size:     {}\n", v.element_size());

    for i in 1..=6i32 {
        v.push_back(&i.to_ne_bytes())?;
        println!("v[{}] = {:?}", i - 1, read(v.at(v.len() - 1)));
    }
    println!();

    let value = 1i32.to_ne_bytes();
    println!("Find 1:           {:?}", v.find(&value));
    v.erase_element(&value)?;
    v.erase_index(2)?;
    v.assign(&42i32.to_ne_bytes(), v.len() - 1)?;

    println!("Empty?            {}", v.is_empty());
    println!("Front:            {:?}", read(v.front()));
    println!("Back:             {:?}", read(v.back()));

    v.shrink()?;
    println!("Current size:     {}", v.len());
    println!("Current capacity: {}", v.capacity());

    v.clear();
    println!("After clear:      {} elements\n", v.len());

    let freed = v.free();
    println!("Freed, element size kept: {}", freed.element_size());
    Ok(())
}
