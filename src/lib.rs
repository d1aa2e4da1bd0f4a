//! A growable array list that stores elements as raw bytes of a fixed width.
//!
//! # Purpose
//! [`ArrayList`](collections::contiguous::ArrayList) is a single, non-generic container: it owns
//! one contiguous buffer, knows the width of its elements in bytes and nothing else about them.
//! Callers supply functions to traverse, search and compare elements whose type only they know.
//! [`TypedList`](collections::contiguous::TypedList) wraps it for callers who do know the type,
//! without duplicating any of the resize or shift logic.
//!
//! # Error Handling
//! Every fallible operation returns a [`Result`] carrying an
//! [`ArrayError`](collections::contiguous::ArrayError). There are no sentinel values: a search
//! that finds nothing returns [`None`], and an allocation failure is an error value rather than an
//! abort. Using a list after it has been destroyed is a defined error too.
//!
//! The exceptions are the standard collection traits ([`Extend`] and [`FromIterator`]) on
//! `TypedList`, which have no way to return an error and panic with its message instead.
//!
//! # Features
//! - `typed` (default): [`TypedList`](collections::contiguous::TypedList) and the
//!   [`Plain`](collections::contiguous::Plain) trait.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because deriving
//! [`Display`](std::fmt::Display) and [`Error`](std::error::Error) removes some very repetitive
//! programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
