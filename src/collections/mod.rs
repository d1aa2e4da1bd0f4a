//! General-purpose collection types.
//!
//! # Method
//! The storage of every collection here is a single [`ArrayList`](contiguous::ArrayList), which
//! works on raw bytes of a fixed width. Typed collections are thin views over it, so the resize
//! and shift logic exists exactly once.

pub mod contiguous;
