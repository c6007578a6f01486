//! The bounds-checked view itself.

use alloc::vec::Vec;
use core::cell::{Ref, RefMut};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Range;

use crate::array::SharedArray;
use crate::error::{Result, SliceError};
use crate::iter::{IntoIter, Iter};
use crate::view::{List, SequenceView};

/// A fixed window `offset..offset + len` over a [`SharedArray`].
///
/// The window never moves or resizes once built, but the elements inside it
/// can be written, and such writes are visible through the backing array and
/// every other slice over it. All indices taken by methods on this type are
/// logical: `0` is the element at `offset`.
///
/// Equality is identity of the shape, not of the contents: two slices are
/// equal when they view the same array instance over the same range.
///
/// ```
/// use array_slice::{ArraySlice, SharedArray};
///
/// let array = SharedArray::from([10, 20, 30, 40, 50]);
/// let slice = ArraySlice::from_range(array.clone(), 1, 3).unwrap();
///
/// assert_eq!(slice.to_vec(), [20, 30, 40]);
/// slice.set(0, 21).unwrap();
/// assert_eq!(array.get(1), Some(21));
/// ```
pub struct ArraySlice<T> {
    array: SharedArray<T>,
    offset: usize,
    len: usize,
}

static_assertions::assert_eq_size!(ArraySlice<u8>, [usize; 3]);

impl<T> ArraySlice<T> {
    /// Views the whole of `array`.
    pub fn new(array: SharedArray<T>) -> Self {
        let len = array.len();
        ArraySlice {
            array,
            offset: 0,
            len,
        }
    }

    /// Allocates a fresh array of `len` default elements and views all of it.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::new(SharedArray::with_len(len))
    }

    /// Views `count` elements of `array` starting at `offset`.
    ///
    /// Fails with [`SliceError::InvalidArgument`] unless
    /// `offset + count <= array.len()`.
    pub fn from_range(array: SharedArray<T>, offset: usize, count: usize) -> Result<Self> {
        let array_len = array.len();
        if offset > array_len || array_len - offset < count {
            tracing::debug!(offset, count, array_len, "rejected slice range");
            return Err(SliceError::InvalidArgument {
                reason: "the range does not fit in the array",
            });
        }
        Ok(ArraySlice {
            array,
            offset,
            len: count,
        })
    }

    /// A new slice with the same shape as `other`.
    pub fn from_slice(other: &Self) -> Self {
        other.clone()
    }

    /// Views `count` elements of this slice starting at logical index `offset`.
    ///
    /// The result must lie inside this slice; it may not reach into parts of
    /// the backing array this slice does not show.
    pub fn reslice(&self, offset: usize, count: usize) -> Result<Self> {
        if offset > self.len || self.len - offset < count {
            tracing::debug!(
                offset,
                count,
                source_len = self.len,
                "rejected sub-slice range"
            );
            return Err(SliceError::InvalidArgument {
                reason: "slices created from other slices must be contained in the source slice",
            });
        }
        Ok(ArraySlice {
            array: self.array.clone(),
            offset: self.offset + offset,
            len: count,
        })
    }

    /// Views everything in this slice from logical index `offset` on.
    pub fn reslice_from(&self, offset: usize) -> Result<Self> {
        self.reslice(offset, self.len.saturating_sub(offset))
    }

    pub fn array(&self) -> &SharedArray<T> {
        &self.array
    }

    /// Absolute index of the first visible element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The visible window in absolute positions of the backing array.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Maps a logical index to its absolute position.
    #[inline]
    fn position(&self, index: usize) -> Result<usize> {
        if index < self.len {
            Ok(self.offset + index)
        } else {
            Err(SliceError::OutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    pub fn get(&self, index: usize) -> Result<Ref<'_, T>> {
        let position = self.position(index)?;
        Ok(Ref::map(self.array.borrow(), |values| &values[position]))
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently borrowed.
    pub fn get_mut(&self, index: usize) -> Result<RefMut<'_, T>> {
        let position = self.position(index)?;
        Ok(RefMut::map(self.array.borrow_mut(), |values| {
            &mut values[position]
        }))
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently borrowed.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Stores `value` at `index` and returns the element it displaced.
    ///
    /// # Panics
    ///
    /// Panics if the backing array is currently borrowed.
    pub fn replace(&self, index: usize, value: T) -> Result<T> {
        Ok(core::mem::replace(&mut *self.get_mut(index)?, value))
    }

    /// Borrows the visible window as a native slice without copying.
    ///
    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, [T]> {
        let range = self.range();
        Ref::map(self.array.borrow(), |values| &values[range])
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, [T]> {
        let range = self.range();
        RefMut::map(self.array.borrow_mut(), |values| &mut values[range])
    }

    /// Whether this slice covers its backing array exactly.
    pub fn is_whole(&self) -> bool {
        self.offset == 0 && self.len == self.array.len()
    }

    /// Gives back the backing array, which is only possible when the slice
    /// covers all of it.
    pub fn into_array(self) -> Result<SharedArray<T>> {
        if self.is_whole() {
            return Ok(self.array);
        }
        let error = SliceError::InvalidCast {
            offset: self.offset,
            len: self.len,
            array_len: self.array.len(),
        };
        tracing::debug!(%error, "partial slice cannot become its array");
        Err(error)
    }

    /// Logical index of the first element equal to `item`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.borrow().iter().position(|value| value == item)
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.borrow().contains(item)
    }

    /// Clones every visible element, in order, into `destination` starting at
    /// `start`.
    ///
    /// Fails with [`SliceError::OutOfBounds`] naming the first destination
    /// index that cannot be written; nothing is copied in that case. An empty
    /// slice writes nothing, so it succeeds for any `start`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed, including
    /// when `destination` is a mutable borrow of it.
    pub fn copy_to(&self, destination: &mut [T], start: usize) -> Result<()>
    where
        T: Clone,
    {
        if self.len == 0 {
            return Ok(());
        }
        let available = destination.len();
        let end = start.saturating_add(self.len);
        if end > available {
            return Err(SliceError::OutOfBounds {
                index: start.max(available),
                len: available,
            });
        }
        destination[start..end].clone_from_slice(&self.borrow());
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.borrow().to_vec()
    }

    /// Lazily yields clones of the visible elements in order.
    ///
    /// Every call starts a fresh enumeration.
    ///
    /// # Panics
    ///
    /// Each step panics if the backing array is mutably borrowed at that
    /// moment.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.array, self.range())
    }

    /// Always `false`: elements can be written even though the shape is fixed.
    pub fn is_read_only(&self) -> bool {
        false
    }
}

impl<T> Clone for ArraySlice<T> {
    fn clone(&self) -> Self {
        ArraySlice {
            array: self.array.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> PartialEq for ArraySlice<T> {
    fn eq(&self, other: &Self) -> bool {
        SharedArray::ptr_eq(&self.array, &other.array)
            && self.offset == other.offset
            && self.len == other.len
    }
}

impl<T> Eq for ArraySlice<T> {}

impl<T> Hash for ArraySlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.array.addr().hash(state);
        self.offset.hash(state);
        self.len.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ArraySlice");
        debug.field("offset", &self.offset).field("len", &self.len);
        match self.array.try_borrow() {
            Some(values) => debug.field("values", &&values[self.range()]).finish(),
            None => debug.field("values", &"<borrowed>").finish(),
        }
    }
}

impl<T> From<SharedArray<T>> for ArraySlice<T> {
    fn from(array: SharedArray<T>) -> Self {
        Self::new(array)
    }
}

impl<T> From<Vec<T>> for ArraySlice<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(SharedArray::from_vec(values))
    }
}

impl<T, const N: usize> From<[T; N]> for ArraySlice<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(SharedArray::from(values))
    }
}

impl<T> TryFrom<ArraySlice<T>> for SharedArray<T> {
    type Error = SliceError;

    fn try_from(slice: ArraySlice<T>) -> Result<Self> {
        slice.into_array()
    }
}

impl<'a, T: Clone> IntoIterator for &'a ArraySlice<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for ArraySlice<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let range = self.range();
        IntoIter::new(self.array, range)
    }
}

impl<T: Clone> SequenceView<T> for ArraySlice<T> {
    fn len(&self) -> usize {
        self.len
    }

    /// # Panics
    ///
    /// Panics if the backing array is currently mutably borrowed.
    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index).ok().map(|value| T::clone(&value))
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ArraySlice::index_of(self, item)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        ArraySlice::contains(self, item)
    }
}

/// Writes go through; every structural operation is rejected.
impl<T: Clone> List<T> for ArraySlice<T> {
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        ArraySlice::set(self, index, value)
    }

    fn insert(&mut self, _index: usize, _item: T) -> Result<()> {
        Err(SliceError::unsupported("insert"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T> {
        Err(SliceError::unsupported("remove_at"))
    }

    fn add(&mut self, _item: T) -> Result<()> {
        Err(SliceError::unsupported("add"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(SliceError::unsupported("clear"))
    }

    fn remove(&mut self, _item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Err(SliceError::unsupported("remove"))
    }
}
