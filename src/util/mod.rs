#![warn(missing_docs)]

pub mod panic;
#[cfg(feature = "typed")]
pub mod result;
