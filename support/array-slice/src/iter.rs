//! Enumeration over the visible range of a slice.
//!
//! Both iterators are lazy: each step borrows the backing array just long
//! enough to clone one element, so writes made between steps through another
//! handle are observed by later steps.

use core::iter::FusedIterator;
use core::ops::Range;

use crate::array::SharedArray;

fn read<T: Clone>(array: &SharedArray<T>, position: usize) -> T {
    array.borrow()[position].clone()
}

/// Borrowing iterator returned by [`ArraySlice::iter`](crate::ArraySlice::iter).
pub struct Iter<'a, T> {
    array: &'a SharedArray<T>,
    positions: Range<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(array: &'a SharedArray<T>, positions: Range<usize>) -> Self {
        debug_assert!(positions.end <= array.len());
        Iter { array, positions }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            array: self.array,
            positions: self.positions.clone(),
        }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let position = self.positions.next()?;
        Some(read(self.array, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let position = self.positions.nth(n)?;
        Some(read(self.array, position))
    }
}

impl<T: Clone> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        let position = self.positions.next_back()?;
        Some(read(self.array, position))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}
impl<T: Clone> FusedIterator for Iter<'_, T> {}

/// Owning iterator; keeps the backing array alive while iterating.
pub struct IntoIter<T> {
    array: SharedArray<T>,
    positions: Range<usize>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: SharedArray<T>, positions: Range<usize>) -> Self {
        debug_assert!(positions.end <= array.len());
        IntoIter { array, positions }
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let position = self.positions.next()?;
        Some(read(&self.array, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let position = self.positions.next_back()?;
        Some(read(&self.array, position))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}
impl<T: Clone> FusedIterator for IntoIter<T> {}
