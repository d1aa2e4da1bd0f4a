//! The allocation behind [`ArrayList`](super::ArrayList).

mod raw_buffer;

pub(crate) use raw_buffer::*;
