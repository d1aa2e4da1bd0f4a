use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::slice;

use crate::collections::contiguous::array_list::ArrayError;

/// A block of `cap * width` bytes from the global allocator.
///
/// Every byte of the block is initialized at all times: fresh allocations are zeroed and so is any
/// region added by growing. This lets the block be viewed as a plain byte slice.
///
/// Allocation failure is reported as an [`ArrayError::AllocationFailure`] rather than going through
/// [`alloc::handle_alloc_error`].
pub(crate) struct RawBuffer {
    ptr: NonNull<u8>,
    cap: usize,
    width: usize,
}

impl RawBuffer {
    /// Allocates a zeroed buffer for `cap` elements of `width` bytes. Both must be non-zero.
    pub(crate) fn try_new(cap: usize, width: usize) -> Result<RawBuffer, ArrayError> {
        debug_assert!(cap != 0 && width != 0);
        let layout = RawBuffer::make_layout(cap, width)?;

        // SAFETY: cap and width are both non-zero, so the layout has a non-zero size.
        let raw_ptr = unsafe { alloc::alloc_zeroed(layout) };

        Ok(RawBuffer {
            ptr: NonNull::new(raw_ptr).ok_or(ArrayError::AllocationFailure { cap, width })?,
            cap,
            width,
        })
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Reallocates the buffer to hold `new_cap` elements, keeping the first
    /// `min(cap, new_cap) * width` bytes. If the allocator fails, the buffer is left untouched.
    pub(crate) fn try_resize(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(new_cap != 0);
        if new_cap == self.cap {
            return Ok(());
        }

        let new_layout = RawBuffer::make_layout(new_cap, self.width)?;

        // SAFETY: ptr was allocated by the global allocator with self.layout(), and the new size
        // is non-zero and no greater than isize::MAX.
        let raw_ptr = unsafe {
            alloc::realloc(self.ptr.as_ptr(), self.layout(), new_layout.size())
        };

        // A null return leaves the old block allocated and unchanged, which self still owns.
        let new_ptr = NonNull::new(raw_ptr).ok_or(ArrayError::AllocationFailure {
            cap: new_cap,
            width: self.width,
        })?;

        let old_size = self.layout().size();
        if new_layout.size() > old_size {
            // SAFETY: The new block is valid for new_layout.size() bytes, so the range from
            // old_size to the end is within it.
            unsafe {
                new_ptr.add(old_size).write_bytes(0, new_layout.size() - old_size);
            }
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    pub(crate) const fn as_slice(&self) -> &[u8] {
        // SAFETY: The buffer is valid, aligned (align 1) and fully initialized for cap * width
        // bytes, which is no greater than isize::MAX. The borrow prevents mutation meanwhile.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap * self.width) }
    }

    pub(crate) const fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: As with as_slice, with the unique borrow preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap * self.width) }
    }

    fn make_layout(cap: usize, width: usize) -> Result<Layout, ArrayError> {
        cap.checked_mul(width)
            .and_then(|size| Layout::array::<u8>(size).ok())
            .ok_or(ArrayError::AllocationFailure { cap, width })
    }

    const fn layout(&self) -> Layout {
        // SAFETY: The same size was validated by make_layout when the current block was
        // allocated, and align 1 is always a power of two.
        unsafe { Layout::from_size_align_unchecked(self.cap * self.width, 1) }
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr is always allocated in the global allocator with a non-zero sized layout
        // equal to self.layout().
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout()) }
    }
}

// SAFETY: RawBuffer uniquely owns its allocation and holds nothing but bytes.
unsafe impl Send for RawBuffer {}
// SAFETY: Shared access only hands out shared byte slices, so there is no interior mutability.
unsafe impl Sync for RawBuffer {}
