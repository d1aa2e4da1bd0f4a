//! A module containing [`ArrayList`] and its error types.
//!
//! [`ArrayList`] and [`compare`] are also re-exported under the parent module.

mod array_list;
mod error;

pub use array_list::*;
pub use error::*;
