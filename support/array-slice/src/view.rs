//! List-like interfaces for code that should accept slices and owned lists alike.
//!
//! [`SequenceView`] is the part of the list contract a slice fully supports:
//! length, indexed reads and linear search. [`List`] adds writes, including the
//! structural operations a slice rejects with
//! [`SliceError::Unsupported`](crate::SliceError::Unsupported).

use alloc::vec::Vec;

use crate::error::{Result, SliceError};

pub trait SequenceView<T> {
    fn len(&self) -> usize;

    fn get_cloned(&self, index: usize) -> Option<T>;

    /// Whether elements can be written through this value.
    fn is_read_only(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&index| self.get_cloned(index).as_ref() == Some(item))
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }
}

pub trait List<T>: SequenceView<T> {
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<T>;

    fn add(&mut self, item: T) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Removes the first element equal to `item`, returning whether one was found.
    fn remove(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq;
}

impl<T: Clone> SequenceView<T> for Vec<T> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get_cloned(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == item)
    }
}

impl<T: Clone> List<T> for Vec<T> {
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = <[T]>::len(self);
        let slot = self
            .get_mut(index)
            .ok_or(SliceError::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = <[T]>::len(self);
        if index > len {
            return Err(SliceError::OutOfBounds { index, len });
        }
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = <[T]>::len(self);
        if index >= len {
            return Err(SliceError::OutOfBounds { index, len });
        }
        Ok(Vec::remove(self, index))
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Vec::clear(self);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        match SequenceView::index_of(&*self, item) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
