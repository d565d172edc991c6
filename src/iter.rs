//! Owning iterator over a [`Vector`]'s elements.
//!
//! [`IntoIter`] takes the vector's block and reads elements out of it,
//! front to back or back to front. Whatever is left unconsumed is dropped
//! with the iterator, then the block itself is released.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawStorage;
use crate::vector::Vector;

/// An iterator that moves elements out of a [`Vector`].
///
/// Created by [`IntoIterator::into_iter`] on a `Vector<T>` value.
///
/// # Examples
///
/// ```
/// use oxivec::Vector;
///
/// let v: Vector<i32> = (1..4).collect();
/// let mut iter = v.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// ```
pub struct IntoIter<T> {
    /// The block the remaining elements still live in; released on drop.
    buf: RawStorage<T>,
    /// Index of the next front element.
    front: usize,
    /// One past the index of the next back element.
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(vec: Vector<T>) -> Self {
        let (buf, len) = vec.into_raw_parts();
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// Returns the remaining elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [front, back) hold the live, unconsumed elements.
        unsafe {
            slice::from_raw_parts(
                self.buf.as_ptr().add(self.front),
                self.back - self.front,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back, so the slot holds a live element; advancing
        // front unpublishes it so it is read out exactly once.
        let value = unsafe { ptr::read(self.buf.slot(self.front)) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: back moved down onto a live slot that is now unpublished.
        Some(unsafe { ptr::read(self.buf.slot(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        if remaining > 0 {
            // SAFETY: slots [front, back) hold the unconsumed elements, and
            // nothing else can reach them.
            unsafe {
                let first = self.buf.slot(self.front);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, remaining));
            }
        }
        // The block itself is released by RawStorage's destructor.
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
