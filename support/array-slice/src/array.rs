//! Fixed-size, shared backing storage for slices.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use crate::error::{Result, SliceError};
use crate::view::SequenceView;

/// A reference-counted array whose length never changes.
///
/// Cloning a `SharedArray` does not copy elements: both handles refer to the
/// same storage, and a write through one is visible through the other. Two
/// handles are the "same array" when [`SharedArray::ptr_eq`] says so; there
/// is deliberately no `PartialEq` comparing contents.
pub struct SharedArray<T> {
    inner: Rc<Storage<T>>,
}

struct Storage<T> {
    // Fixed at construction; readable without borrowing `values`.
    len: usize,
    values: RefCell<Box<[T]>>,
}

static_assertions::assert_eq_size!(SharedArray<u8>, usize);

impl<T> SharedArray<T> {
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_boxed(values.into_boxed_slice())
    }

    pub fn from_boxed(values: Box<[T]>) -> Self {
        SharedArray {
            inner: Rc::new(Storage {
                len: values.len(),
                values: RefCell::new(values),
            }),
        }
    }

    /// Allocates an array of `len` default elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        (0..len).map(|_| T::default()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when both handles refer to the same storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Borrows the whole array.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, [T]> {
        Ref::map(self.inner.values.borrow(), |values| &**values)
    }

    /// Mutably borrows the whole array.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, [T]> {
        RefMut::map(self.inner.values.borrow_mut(), |values| &mut **values)
    }

    pub(crate) fn try_borrow(&self) -> Option<Ref<'_, [T]>> {
        let values = self.inner.values.try_borrow().ok()?;
        Some(Ref::map(values, |values| &**values))
    }

    /// # Panics
    ///
    /// Panics if the array is currently mutably borrowed.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.borrow().get(index).cloned()
    }

    /// # Panics
    ///
    /// Panics if the array is currently borrowed.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut values = self.borrow_mut();
        let len = values.len();
        match values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SliceError::OutOfBounds { index, len }),
        }
    }

    /// # Panics
    ///
    /// Panics if the array is currently mutably borrowed.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.borrow().to_vec()
    }

    /// Address of the shared allocation, used for identity hashing.
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.inner).cast()
    }
}

impl<T> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        SharedArray {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> From<Vec<T>> for SharedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> From<Box<[T]>> for SharedArray<T> {
    fn from(values: Box<[T]>) -> Self {
        Self::from_boxed(values)
    }
}

impl<T, const N: usize> From<[T; N]> for SharedArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_boxed(Box::new(values))
    }
}

impl<T> FromIterator<T> for SharedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_borrow() {
            Some(values) => f.debug_tuple("SharedArray").field(&&*values).finish(),
            None => f.write_str("SharedArray(<borrowed>)"),
        }
    }
}

impl<T: Clone> SequenceView<T> for SharedArray<T> {
    fn len(&self) -> usize {
        SharedArray::len(self)
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        self.get(index)
    }

    fn is_read_only(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;

    use super::*;

    #[test]
    fn with_len_defaults() {
        let array = SharedArray::<i32>::with_len(4);
        assert_eq!(array.len(), 4);
        assert_eq!(array.to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn clone_aliases_storage() {
        let a = SharedArray::from([1, 2, 3]);
        let b = a.clone();
        b.set(1, 20).unwrap();
        assert_eq!(a.get(1), Some(20));
        assert!(SharedArray::ptr_eq(&a, &b));
    }

    #[test]
    fn equal_contents_are_distinct_arrays() {
        let a = SharedArray::from(vec![1, 2, 3]);
        let b = SharedArray::from(vec![1, 2, 3]);
        assert!(!SharedArray::ptr_eq(&a, &b));
    }

    #[test]
    fn set_out_of_bounds() {
        let a = SharedArray::from([1, 2]);
        assert_eq!(a.set(2, 9), Err(SliceError::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(a.get(2), None);
    }

    #[test]
    fn debug_while_mutably_borrowed() {
        let a = SharedArray::from([1, 2]);
        assert_eq!(format!("{a:?}"), "SharedArray([1, 2])");
        let _guard = a.borrow_mut();
        assert_eq!(format!("{a:?}"), "SharedArray(<borrowed>)");
    }
}
