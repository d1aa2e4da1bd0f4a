use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};
use std::ops::Range;

use super::{ArrayError, OutputError};
use crate::collections::contiguous::raw::RawBuffer;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;
const SHRINK_THRESHOLD: usize = 4;

/// A growable, contiguous list of fixed-width elements whose type is known only by its size in
/// bytes.
///
/// The list never interprets the bytes it stores. Elements go in and come out as byte slices of
/// exactly [`width`](ArrayList::width) bytes, and the higher-order operations
/// ([`apply`](ArrayList::apply), [`search`](ArrayList::search) and
/// [`compare_with`](ArrayList::compare_with)) hand those slices to caller-supplied functions.
/// Anything an element's bytes refer to is the caller's to manage.
///
/// # Capacity
/// When an insertion would exceed the capacity, the capacity doubles (repeatedly, for a bulk
/// append). After a deletion leaves fewer than a quarter of the slots in use, the capacity
/// halves, once per deletion and never below 1.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the ArrayList.
/// - `i`: The index of the element in question.
/// - `m`: The number of elements being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `append_all` | `O(m)`*, `O(n+m)` |
/// | `insert` | `O(n-i)` |
/// | `delete` | `O(n-i)`, `O(n)`** |
/// | `apply` | `O(n)` |
/// | `search` | `O(n)` |
/// | `compare_with` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new elements, it is reallocated.
///
/// \** If the deletion triggers a shrink, all remaining elements are moved to a new allocation.
pub struct ArrayList {
    pub(crate) buf: Option<RawBuffer>,
    pub(crate) len: usize,
    pub(crate) width: usize,
}

impl ArrayList {
    /// Creates an empty ArrayList with room for `capacity` elements of `width` bytes each.
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidArgument`] if either value is zero, or
    /// [`ArrayError::AllocationFailure`] if the buffer can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::{ArrayError, ArrayList};
    /// let list = ArrayList::create(3, size_of::<i32>()).unwrap();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 3);
    /// assert!(ArrayList::create(0, 4).unwrap_err().is_invalid_argument());
    /// ```
    pub fn create(capacity: usize, width: usize) -> Result<ArrayList, ArrayError> {
        if capacity == 0 || width == 0 {
            return Err(ArrayError::InvalidArgument { capacity, width });
        }

        Ok(ArrayList {
            buf: Some(RawBuffer::try_new(capacity, width)?),
            len: 0,
            width,
        })
    }

    /// Releases the buffer early. Any later operation on the ArrayList, including another call to
    /// `destroy`, fails with [`ArrayError::Destroyed`].
    ///
    /// Dropping a live ArrayList releases the buffer too, so calling this is optional.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::{ArrayError, ArrayList};
    /// let mut list = ArrayList::create(1, 1).unwrap();
    /// list.destroy().unwrap();
    /// assert_eq!(list.destroy(), Err(ArrayError::Destroyed));
    /// assert_eq!(list.append(&[1]), Err(ArrayError::Destroyed));
    /// ```
    pub fn destroy(&mut self) -> Result<(), ArrayError> {
        self.buf.take().ok_or(ArrayError::Destroyed)?;
        self.len = 0;
        Ok(())
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of element slots currently allocated, or 0 once destroyed.
    pub fn cap(&self) -> usize {
        self.buf.as_ref().map_or(0, RawBuffer::cap)
    }

    /// Returns the width in bytes of every element.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns false once the ArrayList has been destroyed.
    pub const fn is_live(&self) -> bool {
        self.buf.is_some()
    }

    /// Copies `element` onto the end of the ArrayList, doubling the capacity first if it is full.
    ///
    /// # Errors
    /// Fails with [`ArrayError::InvalidElement`] if `element` isn't exactly one element wide, or
    /// [`ArrayError::AllocationFailure`] if growing fails, in which case nothing is changed.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(1, 2).unwrap();
    /// list.append(&[1, 2]).unwrap();
    /// list.append(&[3, 4]).unwrap();
    /// assert_eq!(list.cap(), 2);
    /// assert_eq!(list.as_bytes().unwrap(), &[1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, element: &[u8]) -> Result<(), ArrayError> {
        self.check_element(element)?;
        self.grow_to_fit(1)?;

        let slot = span(self.width, self.len, 1);
        self.live_mut()?.as_mut_slice()[slot].copy_from_slice(element);
        self.len += 1;
        Ok(())
    }

    /// Copies the first `count` elements of `elements` onto the end of the ArrayList with a single
    /// bulk copy. The capacity is doubled as many times as needed beforehand.
    ///
    /// # Errors
    /// Fails with [`ArrayError::InvalidElement`] if `elements` is shorter than `count` elements,
    /// or [`ArrayError::AllocationFailure`] if growing fails, in which case nothing is changed.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(1, 1).unwrap();
    /// list.append_all(b"hello", 5).unwrap();
    /// assert_eq!(list.len(), 5);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn append_all(&mut self, elements: &[u8], count: usize) -> Result<(), ArrayError> {
        self.live()?;
        let size = count.checked_mul(self.width).ok_or(ArrayError::InvalidElement)?;
        if elements.len() < size {
            return Err(ArrayError::InvalidElement);
        }
        if count == 0 {
            return Ok(());
        }

        self.grow_to_fit(count)?;

        let slots = span(self.width, self.len, count);
        self.live_mut()?.as_mut_slice()[slots].copy_from_slice(&elements[..size]);
        self.len += count;
        Ok(())
    }

    /// Inserts `element` at `index`, moving every following element up by one slot. Inserting at
    /// `index == len` is the same as [`append`](ArrayList::append).
    ///
    /// # Errors
    /// Fails with [`ArrayError::InvalidElement`] for an element of the wrong width,
    /// [`ArrayError::IndexOutOfRange`] if `index > len` or [`ArrayError::AllocationFailure`] if
    /// growing fails.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(4, 1).unwrap();
    /// list.append_all(&[1, 3], 2).unwrap();
    /// list.insert(1, &[2]).unwrap();
    /// list.insert(3, &[4]).unwrap();
    /// assert_eq!(list.as_bytes().unwrap(), &[1, 2, 3, 4]);
    /// assert!(list.insert(5, &[5]).unwrap_err().is_index_out_of_range());
    /// ```
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<(), ArrayError> {
        self.check_element(element)?;
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange { index, len: self.len });
        }

        self.grow_to_fit(1)?;

        let (len, width) = (self.len, self.width);
        let bytes = self.live_mut()?.as_mut_slice();
        bytes.copy_within(span(width, index, len - index), (index + 1) * width);
        bytes[span(width, index, 1)].copy_from_slice(element);

        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index`, moving every following element down by one slot and
    /// zeroing the slot left free at the end. If fewer than a quarter of the slots are then in
    /// use, the capacity is halved.
    ///
    /// # Errors
    /// Fails with [`ArrayError::IndexOutOfRange`] if `index >= len`, or
    /// [`ArrayError::AllocationFailure`] if shrinking fails, in which case the element is not
    /// removed.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(8, 1).unwrap();
    /// list.append_all(&[1, 2, 3], 3).unwrap();
    /// list.delete(0).unwrap();
    /// assert_eq!(list.as_bytes().unwrap(), &[2, 3]);
    /// assert_eq!(list.cap(), 8);
    /// list.delete(0).unwrap();
    /// assert_eq!(list.cap(), 4);
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<(), ArrayError> {
        self.check_index(index)?;

        let (len, width, cap) = (self.len, self.width, self.cap());
        let new_len = len - 1;

        if new_len < cap.div_ceil(SHRINK_THRESHOLD) {
            let new_cap = cmp::max(cap / GROWTH_FACTOR, MIN_CAP);
            if new_cap != cap {
                return self.relocate_without(index, new_cap);
            }
        }

        let bytes = self.live_mut()?.as_mut_slice();
        bytes.copy_within(span(width, index + 1, new_len - index), index * width);
        bytes[span(width, new_len, 1)].fill(0);

        self.len = new_len;
        Ok(())
    }

    /// Overwrites the element at `index` with `element`.
    ///
    /// # Errors
    /// Fails with [`ArrayError::InvalidElement`] for an element of the wrong width, or
    /// [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<(), ArrayError> {
        self.check_element(element)?;
        self.check_index(index)?;

        let slot = span(self.width, index, 1);
        self.live_mut()?.as_mut_slice()[slot].copy_from_slice(element);
        Ok(())
    }

    /// Copies the element at `index` into `destination`.
    ///
    /// # Errors
    /// Fails with [`ArrayError::NullArgument`] if `destination` isn't exactly one element wide, or
    /// [`ArrayError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(2, 4).unwrap();
    /// list.append(&7_i32.to_ne_bytes()).unwrap();
    ///
    /// let mut out = [0; 4];
    /// list.get(0, &mut out).unwrap();
    /// assert_eq!(i32::from_ne_bytes(out), 7);
    /// assert!(list.get(1, &mut out).unwrap_err().is_index_out_of_range());
    /// ```
    pub fn get(&self, index: usize, destination: &mut [u8]) -> Result<(), ArrayError> {
        self.live()?;
        if destination.len() != self.width {
            return Err(ArrayError::NullArgument);
        }

        destination.copy_from_slice(self.get_ref(index)?);
        Ok(())
    }

    /// Borrows the bytes of the element at `index`.
    ///
    /// # Errors
    /// Fails with [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn get_ref(&self, index: usize) -> Result<&[u8], ArrayError> {
        self.check_index(index)?;
        Ok(&self.live()?.as_slice()[span(self.width, index, 1)])
    }

    /// Borrows the bytes of every element, packed in index order.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut line = ArrayList::create(128, 1).unwrap();
    /// for byte in "a line".bytes() {
    ///     line.append(&[byte]).unwrap();
    /// }
    /// assert_eq!(std::str::from_utf8(line.as_bytes().unwrap()), Ok("a line"));
    /// ```
    pub fn as_bytes(&self) -> Result<&[u8], ArrayError> {
        Ok(&self.live()?.as_slice()[span(self.width, 0, self.len)])
    }

    /// Visits every element in index order, calling `step` with the accumulator, the index and the
    /// element. The first error returned by `step` stops the traversal and is returned.
    ///
    /// # Errors
    /// Returns the first error from `step`, or [`ArrayError::Destroyed`] converted into `E`.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::{ArrayError, ArrayList};
    /// let mut list = ArrayList::create(4, 1).unwrap();
    /// list.append_all(&[3, 9, 4], 3).unwrap();
    ///
    /// let mut max = 0;
    /// list.apply(&mut max, |max, _, element| {
    ///     *max = (*max).max(element[0]);
    ///     Ok::<_, ArrayError>(())
    /// }).unwrap();
    /// assert_eq!(max, 9);
    /// ```
    pub fn apply<A, E, F>(&self, acc: &mut A, mut step: F) -> Result<(), E>
    where
        E: From<ArrayError>,
        F: FnMut(&mut A, usize, &[u8]) -> Result<(), E>,
    {
        for (index, element) in self.as_bytes()?.chunks_exact(self.width).enumerate() {
            step(acc, index, element)?;
        }
        Ok(())
    }

    /// Returns the index of the first element for which `predicate` returns true, or [`None`] if
    /// there isn't one.
    ///
    /// # Errors
    /// Fails with [`ArrayError::Destroyed`] on a destroyed ArrayList.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::create(4, 1).unwrap();
    /// list.append_all(&[98, 65, 46, 89], 4).unwrap();
    /// assert_eq!(list.search(|e| e[0] == 46), Ok(Some(2)));
    /// assert_eq!(list.search(|e| e[0] == 47), Ok(None));
    /// ```
    pub fn search<F>(&self, predicate: F) -> Result<Option<usize>, ArrayError>
    where
        F: FnMut(&[u8]) -> bool,
    {
        Ok(self.as_bytes()?.chunks_exact(self.width).position(predicate))
    }

    /// Orders self against `other`, as [`compare`] does for two present lists.
    pub fn compare_with<F>(&self, other: &ArrayList, element_compare: F) -> Ordering
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        compare(Some(self), Some(other), element_compare)
    }

    /// Writes every element to `writer` in index order, using `print` to format each one.
    ///
    /// # Errors
    /// Returns [`OutputError::Io`] for the first failed write, or [`OutputError::Array`] if the
    /// ArrayList has been destroyed.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// # use std::io::Write;
    /// let mut list = ArrayList::create(2, 1).unwrap();
    /// list.append_all(&[10, 20], 2).unwrap();
    ///
    /// let mut out = Vec::new();
    /// list.output(&mut out, |out, index, element| writeln!(out, "{index}. {}", element[0]))
    ///     .unwrap();
    /// assert_eq!(out, b"0. 10\n1. 20\n");
    /// ```
    pub fn output<W, F>(&self, writer: &mut W, mut print: F) -> Result<(), OutputError>
    where
        W: Write,
        F: FnMut(&mut W, usize, &[u8]) -> io::Result<()>,
    {
        self.apply(writer, |writer, index, element| {
            print(writer, index, element).map_err(OutputError::from)
        })
    }
}

impl ArrayList {
    fn live(&self) -> Result<&RawBuffer, ArrayError> {
        self.buf.as_ref().ok_or(ArrayError::Destroyed)
    }

    fn live_mut(&mut self) -> Result<&mut RawBuffer, ArrayError> {
        self.buf.as_mut().ok_or(ArrayError::Destroyed)
    }

    fn check_element(&self, element: &[u8]) -> Result<(), ArrayError> {
        self.live()?;
        if element.len() != self.width {
            return Err(ArrayError::InvalidElement);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        self.live()?;
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange { index, len: self.len });
        }
        Ok(())
    }

    /// Doubles the capacity until `extra` more elements fit.
    fn grow_to_fit(&mut self, extra: usize) -> Result<(), ArrayError> {
        let width = self.width;
        let overflow = ArrayError::AllocationFailure { cap: usize::MAX, width };

        let required = self.len.checked_add(extra).ok_or(overflow)?;
        let cap = self.cap();
        if required <= cap {
            return Ok(());
        }

        let mut new_cap = cap;
        while new_cap < required {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).ok_or(overflow)?;
        }

        self.live_mut()?.try_resize(new_cap)
    }

    /// Moves every element except the one at `index` into a new buffer of `new_cap` slots. The old
    /// buffer is only released once the new one has been filled.
    fn relocate_without(&mut self, index: usize, new_cap: usize) -> Result<(), ArrayError> {
        let (len, width) = (self.len, self.width);
        let mut fresh = RawBuffer::try_new(new_cap, width)?;

        let old = self.live()?.as_slice();
        let new = fresh.as_mut_slice();
        new[span(width, 0, index)].copy_from_slice(&old[span(width, 0, index)]);
        new[span(width, index, len - index - 1)]
            .copy_from_slice(&old[span(width, index + 1, len - index - 1)]);

        self.buf = Some(fresh);
        self.len = len - 1;
        Ok(())
    }
}

/// Orders two optional lists. A missing or destroyed list is less than a live one and equal to
/// another missing one. Lists of different lengths are ordered by length alone; otherwise the
/// first pair of elements for which `element_compare` isn't [`Equal`](Ordering::Equal) decides.
///
/// # Examples
/// ```
/// # use array_list::collections::contiguous::{compare, ArrayList};
/// # use std::cmp::Ordering;
/// let mut a = ArrayList::create(4, 1).unwrap();
/// let mut b = ArrayList::create(4, 1).unwrap();
/// a.append_all(&[1, 2], 2).unwrap();
/// b.append_all(&[1, 3], 2).unwrap();
///
/// assert_eq!(compare(Some(&a), Some(&b), |x, y| x.cmp(y)), Ordering::Less);
/// assert_eq!(compare(None, Some(&b), |x, y| x.cmp(y)), Ordering::Less);
/// assert_eq!(compare(None, None, |x, y| x.cmp(y)), Ordering::Equal);
///
/// b.append(&[0]).unwrap();
/// assert_eq!(a.compare_with(&b, |x, y| x.cmp(y)), Ordering::Less);
/// ```
pub fn compare<F>(a: Option<&ArrayList>, b: Option<&ArrayList>, mut element_compare: F) -> Ordering
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let a = a.and_then(|list| list.as_bytes().ok().map(|bytes| (list, bytes)));
    let b = b.and_then(|list| list.as_bytes().ok().map(|bytes| (list, bytes)));

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((a, a_bytes)), Some((b, b_bytes))) => a.len.cmp(&b.len).then_with(|| {
            a_bytes.chunks_exact(a.width)
                .zip(b_bytes.chunks_exact(b.width))
                .map(|(x, y)| element_compare(x, y))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// The byte range covering `count` slots of `width` bytes, starting at slot `start`.
const fn span(width: usize, start: usize, count: usize) -> Range<usize> {
    start * width..(start + count) * width
}

impl Debug for ArrayList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("width", &self.width)
            .field("live", &self.is_live())
            .finish()
    }
}
