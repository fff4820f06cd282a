/// A value that can be stored in an `ErasedVec` as a fixed number of bytes.
///
/// `SIZE` is the element width handed to the vector at construction;
/// `to_bytes` and `from_bytes` translate between the value and its stored form.
/// Two values are considered equal by searches when their encodings are
/// byte-equal, so for floats `0.0` and `-0.0` are distinct while a NaN matches
/// a NaN with the same bit pattern.
///
/// `TypedVec` zero-fills slots it exposes, so an all-zero `SIZE`-byte buffer
/// must decode to some value.
pub trait Element: Copy {
    /// Width of the encoded value in bytes. Must be non-zero.
    const SIZE: usize;

    /// Encoded form, exactly `SIZE` bytes long.
    type Bytes: AsRef<[u8]>;

    fn to_bytes(&self) -> Self::Bytes;

    /// Decodes a stored element, or `None` if `bytes` is not a valid encoding.
    fn from_bytes(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_element_ne_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = core::mem::size_of::<$t>();
                type Bytes = [u8; core::mem::size_of::<$t>()];

                fn to_bytes(&self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_bytes(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_ne_bytes)
                }
            }
        )*
    };
}

impl_element_ne_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Element for bool {
    const SIZE: usize = 1;
    type Bytes = [u8; 1];

    fn to_bytes(&self) -> Self::Bytes {
        [u8::from(*self)]
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }
}
