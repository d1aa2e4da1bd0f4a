//! Contiguous collection types. Namely [`ArrayList`] for type-erased elements of a fixed width and
//! [`TypedList`] for a typed view over the same storage.
#![warn(missing_docs)]

pub mod array_list;
#[cfg(feature = "typed")]
pub mod typed;

mod raw;

#[doc(inline)]
pub use array_list::{ArrayError, ArrayList, OutputError, compare};
#[cfg(feature = "typed")]
#[doc(inline)]
pub use typed::{Plain, TypedList};
