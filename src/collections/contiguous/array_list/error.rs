use std::io;

use derive_more::{Display, Error, From, IsVariant};

/// The ways in which an operation on an [`ArrayList`](super::ArrayList) can fail.
///
/// Every operation reports failure by returning one of these values; nothing in this module
/// panics or aborts on a recoverable error.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ArrayError {
    /// A destination buffer was missing the space for exactly one element.
    #[display("destination must hold exactly one element")]
    NullArgument,
    /// The list was created with a zero capacity or a zero width.
    #[display("capacity and width must be positive, got capacity {capacity} and width {width}")]
    InvalidArgument {
        /// The requested capacity.
        capacity: usize,
        /// The requested element width.
        width: usize,
    },
    /// The index lies outside the range accepted by the operation.
    #[display("index {index} out of range for list with {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list at the time.
        len: usize,
    },
    /// An element payload did not have the width of the list.
    #[display("element payload is missing or does not match the width of the list")]
    InvalidElement,
    /// The allocator could not provide `cap` slots of `width` bytes.
    #[display("unable to allocate {cap} elements of width {width}")]
    AllocationFailure {
        /// The capacity that was requested.
        cap: usize,
        /// The width of each element.
        width: usize,
    },
    /// The list has already been destroyed.
    #[display("list has been destroyed")]
    Destroyed,
}

/// The ways in which [`ArrayList::output`](super::ArrayList::output) can fail.
#[derive(Debug, Display, From, Error)]
pub enum OutputError {
    /// The list itself couldn't be traversed.
    Array(ArrayError),
    /// Writing an element failed.
    Io(io::Error),
}
