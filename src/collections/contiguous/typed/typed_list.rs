use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::Plain;
use crate::collections::contiguous::{ArrayError, ArrayList};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

/// A list of `T`, stored in an [`ArrayList`] with a width of `size_of::<T>()`.
///
/// Every operation converts between `T` and its bytes and defers to the ArrayList, so growth,
/// shrinking and the destroyed state behave exactly as they do there. Values are returned by copy;
/// nothing borrows into the buffer.
///
/// # Examples
/// ```
/// # use array_list::collections::contiguous::TypedList;
/// let mut list = TypedList::<i32>::new(3).unwrap();
/// list.extend_from_slice(&[10, 20, 30, 40, 50, 60]).unwrap();
/// list.set(2, 25).unwrap();
/// list.insert(2, 20).unwrap();
///
/// assert_eq!(list, [10, 20, 20, 25, 40, 50, 60].into_iter().collect());
/// assert_eq!(list.cap(), 12);
/// ```
pub struct TypedList<T: Plain> {
    pub(crate) inner: ArrayList,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Plain> TypedList<T> {
    /// Creates an empty TypedList with room for `cap` values.
    ///
    /// # Errors
    /// Fails with [`ArrayError::InvalidArgument`] if `cap` is zero or `T` is zero-sized, or
    /// [`ArrayError::AllocationFailure`] if the buffer can't be allocated.
    pub fn new(cap: usize) -> Result<TypedList<T>, ArrayError> {
        Ok(TypedList {
            inner: ArrayList::create(cap, size_of::<T>())?,
            _phantom: PhantomData,
        })
    }

    /// Releases the buffer early. See [`ArrayList::destroy`].
    ///
    /// # Errors
    /// Fails with [`ArrayError::Destroyed`] if already destroyed.
    pub fn destroy(&mut self) -> Result<(), ArrayError> {
        self.inner.destroy()
    }

    /// Returns the number of values in the TypedList.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the TypedList contains no values.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of value slots allocated, or 0 once destroyed.
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns false once the TypedList has been destroyed.
    pub const fn is_live(&self) -> bool {
        self.inner.is_live()
    }

    /// Pushes `value` onto the end of the TypedList.
    ///
    /// # Errors
    /// See [`ArrayList::append`].
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.inner.append(value.as_bytes())
    }

    /// Copies every value of `values` onto the end of the TypedList in one bulk copy.
    ///
    /// # Errors
    /// See [`ArrayList::append_all`].
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ArrayError> {
        self.inner.append_all(T::slice_as_bytes(values), values.len())
    }

    /// Inserts `value` at `index`, which may be equal to the length.
    ///
    /// # Errors
    /// See [`ArrayList::insert`].
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.inner.insert(index, value.as_bytes())
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    /// See [`ArrayList::delete`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::TypedList;
    /// let mut list: TypedList<u16> = (1..=4).collect();
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.get(1), Ok(3));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        let value = self.get(index)?;
        self.inner.delete(index)?;
        Ok(value)
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    /// See [`ArrayList::set`].
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.inner.set(index, value.as_bytes())
    }

    /// Returns a copy of the value at `index`.
    ///
    /// # Errors
    /// See [`ArrayList::get_ref`].
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        self.inner.get_ref(index).map(T::read_from)
    }

    /// Visits every value in index order. See [`ArrayList::apply`].
    ///
    /// # Errors
    /// Returns the first error from `step`, or [`ArrayError::Destroyed`] converted into `E`.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::{ArrayError, TypedList};
    /// let list: TypedList<f64> = [0.5, 1.5, 4.0].into_iter().collect();
    /// let mut sum = 0.0;
    /// list.apply(&mut sum, |sum, _, value| {
    ///     *sum += value;
    ///     Ok::<_, ArrayError>(())
    /// }).unwrap();
    /// assert_eq!(sum, 6.0);
    /// ```
    pub fn apply<A, E, F>(&self, acc: &mut A, mut step: F) -> Result<(), E>
    where
        E: From<ArrayError>,
        F: FnMut(&mut A, usize, T) -> Result<(), E>,
    {
        self.inner.apply(acc, |acc, index, bytes| step(acc, index, T::read_from(bytes)))
    }

    /// Returns the index of the first value satisfying `predicate`, if any.
    ///
    /// # Errors
    /// Fails with [`ArrayError::Destroyed`] on a destroyed TypedList.
    pub fn search<F>(&self, mut predicate: F) -> Result<Option<usize>, ArrayError>
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.search(|bytes| predicate(&T::read_from(bytes)))
    }

    /// Returns the index of the first value equal to `value`, if any.
    ///
    /// # Errors
    /// Fails with [`ArrayError::Destroyed`] on a destroyed TypedList.
    pub fn position(&self, value: &T) -> Result<Option<usize>, ArrayError>
    where
        T: PartialEq,
    {
        self.search(|other| other == value)
    }

    /// Orders self against `other`, deciding between values of equal lists with `compare`. See
    /// [`compare`](crate::collections::contiguous::compare).
    pub fn compare_by<F>(&self, other: &TypedList<T>, mut compare: F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.inner.compare_with(&other.inner, |a, b| {
            compare(&T::read_from(a), &T::read_from(b))
        })
    }

    /// Borrows the underlying ArrayList.
    pub const fn as_inner(&self) -> &ArrayList {
        &self.inner
    }

    /// Unwraps the underlying ArrayList.
    pub fn into_inner(self) -> ArrayList {
        self.inner
    }
}

impl<T: Plain> Extend<T> for TypedList<T> {
    /// # Panics
    /// Panics if the TypedList is destroyed or can't grow.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value).throw();
        }
    }
}

impl<T: Plain> FromIterator<T> for TypedList<T> {
    /// # Panics
    /// Panics if `T` is zero-sized or the TypedList can't grow.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = TypedList::new(iter.size_hint().0.max(MIN_CAP)).throw();
        list.extend(iter);
        list
    }
}

impl<T: Plain + PartialEq> PartialEq for TypedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_live() == other.is_live()
            && self.len() == other.len()
            && (0..self.len()).all(|i| self.get(i).ok() == other.get(i).ok())
    }
}

impl<T: Plain + Eq> Eq for TypedList<T> {}

impl<T: Plain + Ord> PartialOrd for TypedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Plain + Ord> Ord for TypedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_by(other, Ord::cmp)
    }
}

struct Contents<'a, T: Plain>(&'a TypedList<T>);

impl<T: Plain + Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.0.is_live() {
            return f.write_str("<destroyed>");
        }

        let mut list = f.debug_list();
        self.0.apply(&mut list, |list, _, value| {
            list.entry(&value);
            Ok::<_, ArrayError>(())
        }).map_err(|_| fmt::Error)?;
        list.finish()
    }
}

impl<T: Plain + Debug> Debug for TypedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
