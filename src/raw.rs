//! Raw storage blocks for `OxiVec`.
//!
//! This module provides the allocation layer underneath [`Vector`]: a
//! fixed-capacity block of uninitialized element slots obtained from
//! `std::alloc`, with no construction, destruction, or liveness tracking.
//! The block provides:
//!
//! - **Exclusive ownership** of one contiguous allocation
//! - **Unchecked slot addressing** for the owner's pointer arithmetic
//! - **O(1) ownership transfer** through moves and swaps
//!
//! # Architecture
//!
//! [`RawStorage`] is deliberately dumb: it knows how many slots it holds and
//! where they start, and nothing else. Which slots contain live values is
//! tracked exclusively by the owner (the vector's length field). Growing is
//! not supported in place; the owner builds a new block and swaps it in.
//!
//! # Safety
//!
//! Slots are storage, not objects. The owner must initialize a slot before
//! reading it and must drop every live value before the block is released,
//! otherwise those values leak. The block itself never touches element
//! memory; its destructor frees the allocation and nothing more.
//!
//! # Examples
//!
//! ```
//! use oxivec::RawStorage;
//! use std::ptr;
//!
//! let block: RawStorage<u64> = RawStorage::with_capacity(4).unwrap();
//! assert_eq!(block.capacity(), 4);
//!
//! // The owner writes a slot before it reads it back.
//! unsafe {
//!     ptr::write(block.slot(0), 7);
//!     assert_eq!(ptr::read(block.slot(0)), 7);
//! }
//! ```
//!
//! [`Vector`]: crate::Vector

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// A fixed-capacity block of uninitialized storage for elements of type `T`.
///
/// The block holds room for exactly `capacity` elements. No slot is ever
/// constructed or dropped by this type; see the [module docs](self) for the
/// ownership contract.
///
/// An allocation exists only when the capacity is nonzero and `T` has a
/// nonzero size. In every other case the pointer is dangling, nothing was
/// requested from the allocator, and nothing is freed on drop.
///
/// `RawStorage` is not `Clone`: it models exclusive ownership of its block.
/// Transfer happens through moves and [`std::mem::swap`], both O(1).
pub struct RawStorage<T> {
    /// Base address of the block. Dangling when no allocation exists.
    ptr: NonNull<T>,
    /// Number of element slots the block holds.
    cap: usize,
    /// Marks this type as owning `T` values for drop checking.
    _marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Creates an empty block: capacity zero, no allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block with room for exactly `cap` elements.
    ///
    /// A request for zero slots, or any request when `T` is zero-sized,
    /// performs no allocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if `cap` elements would exceed
    /// `isize::MAX` bytes, and [`Error::AllocFailed`] if the allocator
    /// returns null. Nothing is changed by a failed request.
    pub fn with_capacity(cap: usize) -> Result<Self> {
        if cap == 0 || std::mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(cap)
            .map_err(|_| Error::CapacityOverflow { requested: cap })?;

        // SAFETY: layout has nonzero size because cap > 0 and T is not
        // zero-sized, which is what alloc::alloc requires.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            return Err(Error::AllocFailed {
                bytes: layout.size(),
            });
        };

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    /// Returns the number of element slots the block holds.
    ///
    /// Zero-sized element types report `usize::MAX`: every length fits
    /// without any allocation.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        if std::mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Returns the base address of the block.
    ///
    /// The pointer is dangling (but well-aligned) when no allocation exists.
    /// It is valid for reads and writes of slots the owner knows to be in
    /// range, for as long as this block is alive.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// The slot is storage, not necessarily a live `T`; the caller tracks
    /// which slots have been initialized.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity). Out-of-range
    /// indices are undefined behavior; a debug assertion catches them in
    /// debug builds only.
    #[must_use]
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(
            index < self.capacity(),
            "slot index {index} out of range for capacity {}",
            self.capacity()
        );
        // SAFETY: the caller guarantees index < capacity, so the offset stays
        // within the allocated block (and is a no-op address-wise for
        // zero-sized T).
        unsafe { self.ptr.as_ptr().add(index) }
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.cap != 0 && std::mem::size_of::<T>() != 0 {
            // SAFETY: the block was obtained from alloc::alloc in
            // with_capacity with this exact size and alignment, and the size
            // arithmetic was already validated by Layout::array there.
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    std::mem::size_of::<T>() * self.cap,
                    std::mem::align_of::<T>(),
                );
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

// SAFETY: RawStorage exclusively owns its allocation; moving it to another
// thread moves that ownership wholesale, so it is Send whenever the elements
// the owner may have placed inside are Send.
unsafe impl<T: Send> Send for RawStorage<T> {}

// SAFETY: a shared RawStorage exposes no interior mutability of its own;
// sharing it across threads is safe whenever shared access to the stored
// elements is.
unsafe impl<T: Sync> Sync for RawStorage<T> {}
