use std::ptr;
use std::slice;

/// Types whose values can be stored as, and read back from, their raw bytes.
///
/// # Safety
/// Implementors must contain no padding bytes and no pointers whose validity matters, and every
/// bit pattern of `size_of::<Self>()` bytes must be a valid value of the type.
pub unsafe trait Plain: Copy + 'static {
    /// Views the value as its raw bytes.
    fn as_bytes(&self) -> &[u8] {
        // SAFETY: Self has no padding, so all size_of::<Self>() bytes behind the reference are
        // initialized, and the borrow prevents mutation.
        unsafe { slice::from_raw_parts(ptr::from_ref(self).cast(), size_of::<Self>()) }
    }

    /// Views a slice of values as their raw bytes, packed in order.
    fn slice_as_bytes(values: &[Self]) -> &[u8] {
        // SAFETY: As with as_bytes, for every value. Slices never have padding between elements.
        unsafe { slice::from_raw_parts(values.as_ptr().cast(), size_of_val(values)) }
    }

    /// Reads a value back out of its raw bytes, which don't need to be aligned.
    ///
    /// # Panics
    /// Panics if `bytes` isn't exactly `size_of::<Self>()` bytes long.
    fn read_from(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), size_of::<Self>(), "byte count doesn't match the type's size");
        // SAFETY: bytes is valid for size_of::<Self>() reads and every bit pattern is a valid
        // Self. read_unaligned places no requirement on alignment.
        unsafe { ptr::read_unaligned(bytes.as_ptr().cast()) }
    }
}

macro_rules! impl_plain {
    ($($t:ty),* $(,)?) => {
        $(
            // SAFETY: Primitive numbers have no padding and every bit pattern is valid.
            unsafe impl Plain for $t {}
        )*
    };
}

impl_plain!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: An array has no padding between its elements, so it has none if T has none.
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}
