//! A module containing [`TypedList`], a typed view over an [`ArrayList`](super::ArrayList), and
//! the [`Plain`] trait for the element types it accepts.
//!
//! [`TypedList`] and [`Plain`] are also re-exported under the parent module.

mod plain;
mod tests;
mod typed_list;

pub use plain::*;
pub use typed_list::*;
