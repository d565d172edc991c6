//! Growable contiguous vector built on explicit raw storage.
//!
//! This module provides [`Vector`], an ordered sequence of `T` backed by
//! exactly one [`RawStorage`] block plus a length. The vector provides:
//!
//! - **Separated allocation and construction**: slots come from
//!   [`RawStorage`]; which slots hold live values is tracked only by the
//!   length
//! - **Doubling growth** on append, with exact-capacity reservation on
//!   explicit request
//! - **Staged reallocation**: growth builds the replacement block and places
//!   the incoming element there first, then relocates and swaps
//! - **Panic-safe mutation**: a failed construction never leaks and never
//!   leaves a half-initialized slot observable
//!
//! # Architecture
//!
//! Slots `[0, len)` are live, `[len, capacity)` are raw storage. Every
//! operation preserves that split, including its failure paths: the length
//! never advances past a slot that was not fully constructed.
//!
//! Relocating elements between blocks is a bitwise move
//! (`ptr::copy_nonoverlapping`) and cannot fail, so a growth step has exactly
//! one fallible moment: constructing the incoming element. That construction
//! happens into the staged block before any live element is touched, and a
//! panic there unwinds with the vector unchanged and only raw memory
//! released. The same reasoning makes the in-place shifts of [`insert`] and
//! [`remove`] infallible once the incoming value exists.
//!
//! # Panic safety
//!
//! - [`push`], [`push_with`], [`insert`], [`insert_with`], [`remove`],
//!   [`pop`], [`reserve`]: the vector is unchanged if the operation panics
//! - [`resize`] and `clone_from`: a panic mid-fill drops the partially
//!   constructed tail and keeps the pre-call length; prefix slots already
//!   assigned by `clone_from` keep their new values (valid state, no leaks)
//!
//! # Examples
//!
//! ```
//! use oxivec::Vector;
//!
//! let mut v: Vector<i32> = Vector::with_len(3);
//! assert_eq!(v, [0, 0, 0]);
//!
//! v[0] = 10;
//! v.push(40);
//! v.insert(1, 20);
//! assert_eq!(v, [10, 20, 0, 0, 40]);
//!
//! assert_eq!(v.remove(2), 0);
//! assert_eq!(v, [10, 20, 0, 40]);
//! ```
//!
//! [`push`]: Vector::push
//! [`push_with`]: Vector::push_with
//! [`insert`]: Vector::insert
//! [`insert_with`]: Vector::insert_with
//! [`remove`]: Vector::remove
//! [`pop`]: Vector::pop
//! [`reserve`]: Vector::reserve
//! [`resize`]: Vector::resize

use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::{Error, Result};
use crate::iter::IntoIter;
use crate::raw::RawStorage;

/// Capacity granted by the first growing append when no storage exists.
const FIRST_CAPACITY: usize = 1;

/// Factor applied to the current capacity when an append outgrows it.
const GROWTH_FACTOR: usize = 2;

/// A growable contiguous array of `T` with explicit raw storage underneath.
///
/// See the [module docs](self) for the storage split and the panic-safety
/// contract. `Vector` dereferences to `[T]`, so the whole slice API (checked
/// indexing, iteration, `get_unchecked`, sorting, searching) applies.
///
/// # Examples
///
/// ```
/// use oxivec::Vector;
///
/// let mut v = Vector::new();
/// v.push("red");
/// v.push("green");
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[1], "green");
/// ```
pub struct Vector<T> {
    /// The owned block of element slots.
    buf: RawStorage<T>,
    /// Number of live elements, occupying slots `[0, len)` in order.
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector. No allocation happens until the first
    /// growing operation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawStorage::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows the maximum allocation size, and
    /// aborts if the allocator fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Creates a vector of `len` default-constructed elements with capacity
    /// exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let v: Vector<u8> = Vector::with_len(4);
    /// assert_eq!(v, [0, 0, 0, 0]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::new();
        vec.resize(len);
        vec
    }

    /// Returns the number of live elements.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the owned block can hold.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the base address of the element block.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns the mutable base address of the element block.
    #[must_use]
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Grows the owned block to hold exactly `new_capacity` elements.
    ///
    /// Requests at or below the current capacity do nothing; the capacity
    /// never shrinks and never over-allocates past the request. Element
    /// values, order, and length are unchanged either way.
    ///
    /// Note the request is the *target capacity*, not an additional count.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if `new_capacity` elements exceed the
    /// maximum allocation size, [`Error::AllocFailed`] if the allocator
    /// returns null. The vector is untouched on either error.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let new_buf = RawStorage::with_capacity(new_capacity)?;
        self.relocate_into(new_buf);
        Ok(())
    }

    /// Grows the owned block to hold exactly `new_capacity` elements,
    /// diverging on failure.
    ///
    /// See [`try_reserve`](Self::try_reserve) for the fallible form.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` elements exceed the maximum allocation size;
    /// aborts through [`std::alloc::handle_alloc_error`] if the allocator
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(1u32);
    /// v.reserve(9);
    /// assert_eq!(v.capacity(), 9);
    /// v.reserve(4); // below current capacity: no effect
    /// assert_eq!(v.capacity(), 9);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            storage_failure::<T>(err);
        }
    }

    /// Resizes to exactly `new_len` elements.
    ///
    /// Shrinking drops the trailing elements in place and leaves capacity
    /// alone. Growing reserves capacity for exactly `new_len` and fills the
    /// new tail with default-constructed values; if one of those
    /// constructors panics, the partially built tail is dropped and the
    /// length keeps its pre-call value.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(7i64);
    /// v.resize(3);
    /// assert_eq!(v, [7, 0, 0]);
    /// v.resize(1);
    /// assert_eq!(v, [7]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        let additional = new_len - self.len;
        self.reserve(new_len);

        let mut tail = TailGuard::new(self);
        for _ in 0..additional {
            // SAFETY: reserve made room for new_len slots, so every written
            // slot is below capacity.
            unsafe { tail.put(T::default()) };
        }
        tail.commit();
    }

    /// Drops every element past `new_len`. Does nothing when `new_len` is
    /// at or above the current length. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Unpublish the tail before dropping it so a panicking destructor
        // cannot leave dropped elements reachable.
        self.len = new_len;
        // SAFETY: the slots [new_len, new_len + tail_len) held live elements
        // and are no longer part of the vector.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(new_len),
                tail_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    /// Drops all elements. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends an element.
    ///
    /// Amortized O(1): when the block is full its capacity doubles (one slot
    /// from zero).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails. The
    /// vector is unchanged in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(1);
    /// v.push(2);
    /// assert_eq!(v, [1, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_with(move || value);
    }

    /// Appends the result of `make`, constructing it directly in the slot it
    /// will occupy, and returns a reference to the new element.
    ///
    /// When the append needs to grow, the new element is constructed into
    /// the staged block before any live element is relocated: a panic in
    /// `make` unwinds with the vector unchanged and only raw memory
    /// released.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v: Vector<String> = Vector::new();
    /// let name = v.push_with(|| String::from("storage"));
    /// name.push_str(" block");
    /// assert_eq!(v[0], "storage block");
    /// ```
    pub fn push_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let index = self.len;
        if index == self.capacity() {
            let new_buf = match self.stage_grown_block() {
                Ok(block) => block,
                Err(err) => storage_failure::<T>(err),
            };
            // Phase one: the incoming element lands at its final slot in the
            // staged block while every live element stays untouched.
            // SAFETY: index == len < the staged capacity.
            unsafe { ptr::write(new_buf.slot(index), make()) };
            // Phase two: relocate the live elements around it and adopt the
            // block.
            // SAFETY: the staged block holds one element at index == len and
            // has room for len + 1.
            unsafe { self.commit_grown_block(new_buf, index) };
        } else {
            // SAFETY: index == len < capacity, so the end slot is raw
            // storage inside the block.
            unsafe { ptr::write(self.buf.slot(index), make()) };
            self.len += 1;
        }
        // SAFETY: slot `index` was initialized above and is below len.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push('x');
    /// assert_eq!(v.pop(), Some('x'));
    /// assert_eq!(v.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the old last element sits at the new len; it was
        // unpublished first, so nothing else can observe it as live.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Inserts an element at `index`, shifting everything at and after it
    /// one slot toward the end, and returns a reference to the inserted
    /// element. `index == len` appends.
    ///
    /// The returned reference always addresses slot `index`, whether or not
    /// the insert grew the block.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(41);
    /// v.push(43);
    /// v.insert(1, 42);
    /// assert_eq!(v, [41, 42, 43]);
    /// ```
    #[track_caller]
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.insert_with(index, move || value)
    }

    /// Inserts the result of `make` at `index`, shifting everything at and
    /// after it one slot toward the end, and returns a reference to the
    /// inserted element. `index == len` appends.
    ///
    /// On the growth path the new element is constructed at its final slot
    /// in the staged block before any live element moves; on the in-place
    /// path `make` runs to completion before the shift begins. Either way a
    /// panic in `make` leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert_with<F>(&mut self, index: usize, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if index > self.len {
            insert_index_failed(index, self.len);
        }
        if self.len == self.capacity() {
            let new_buf = match self.stage_grown_block() {
                Ok(block) => block,
                Err(err) => storage_failure::<T>(err),
            };
            // Phase one: construct at the final destination in the staged
            // block, touching no live element.
            // SAFETY: index <= len < the staged capacity.
            unsafe { ptr::write(new_buf.slot(index), make()) };
            // Phase two: relocate prefix and suffix around the new element.
            // SAFETY: the staged block holds one element at `index <= len`
            // and has room for len + 1.
            unsafe { self.commit_grown_block(new_buf, index) };
        } else {
            // The incoming value exists before any live element moves, so a
            // panic in `make` leaves the vector unchanged.
            let value = make();
            let base = self.buf.as_ptr();
            // SAFETY: index <= len < capacity. The overlapping copy shifts
            // [index, len) up one slot, then the vacated slot is written;
            // both steps are infallible and the length advances only after
            // the slot holds a live value.
            unsafe {
                ptr::copy(base.add(index), base.add(index + 1), self.len - index);
                ptr::write(base.add(index), value);
            }
            self.len += 1;
        }
        // SAFETY: slot `index` now holds the inserted element and is below
        // len.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one slot toward the front.
    ///
    /// After the call the element previously at `index + 1` (if any)
    /// occupies `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxivec::Vector;
    ///
    /// let mut v = Vector::new();
    /// v.push(1);
    /// v.push(2);
    /// v.push(3);
    /// assert_eq!(v.remove(1), 2);
    /// assert_eq!(v, [1, 3]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            remove_index_failed(index, self.len);
        }
        let base = self.buf.as_ptr();
        // SAFETY: index < len. The element is read out before the suffix
        // shifts over its slot, and the length drops immediately after, so
        // the stale bits at the old last slot are never observable.
        unsafe {
            let removed = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            removed
        }
    }

    /// Allocates the block for the next growth step: double the current
    /// capacity, or [`FIRST_CAPACITY`] from zero. No live element is
    /// touched.
    fn stage_grown_block(&self) -> Result<RawStorage<T>> {
        let cap = self.capacity();
        let new_cap = if cap == 0 {
            FIRST_CAPACITY
        } else {
            cap.checked_mul(GROWTH_FACTOR)
                .ok_or(Error::CapacityOverflow { requested: usize::MAX })?
        };
        RawStorage::with_capacity(new_cap)
    }

    /// Completes a growth step after the incoming element was written at
    /// `hole` in `new_buf`: relocates live slots `[0, hole)` to the same
    /// offsets, relocates `[hole, len)` one slot higher, adopts the block,
    /// and advances the length past the hole. The old block is released
    /// without dropping elements; ownership of their bits has moved.
    ///
    /// # Safety
    ///
    /// `new_buf` must hold exactly one live element, at `hole`; `hole` must
    /// be at most `len`; and `new_buf` must have capacity for at least
    /// `len + 1` elements.
    unsafe fn commit_grown_block(&mut self, new_buf: RawStorage<T>, hole: usize) {
        let src = self.buf.as_ptr();
        let dst = new_buf.as_ptr();
        // SAFETY: source and destination are distinct allocations, the
        // ranges are in bounds per the contract, and the destination slots
        // are raw storage except the hole, which both copies skip.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, hole);
            ptr::copy_nonoverlapping(src.add(hole), dst.add(hole + 1), self.len - hole);
        }
        // Dropping the old block releases raw memory only.
        self.buf = new_buf;
        self.len += 1;
    }

    /// Moves every live element into `new_buf` and adopts it as the owned
    /// block. The old block is released without dropping elements.
    fn relocate_into(&mut self, new_buf: RawStorage<T>) {
        debug_assert!(self.len <= new_buf.capacity());
        // SAFETY: distinct allocations; the destination has room for every
        // live element, and after the copy their bits belong to new_buf.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), self.len);
        }
        self.buf = new_buf;
    }

    /// Clone-constructs every element of `source` onto the end. The caller
    /// must already have reserved room for all of them.
    fn extend_cloned(&mut self, source: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.len + source.len() <= self.capacity());
        let mut tail = TailGuard::new(self);
        for item in source {
            // SAFETY: capacity for the whole slice was reserved up front.
            unsafe { tail.put(item.clone()) };
        }
        tail.commit();
    }

    /// Decomposes the vector into its block and length without dropping any
    /// element.
    pub(crate) fn into_raw_parts(self) -> (RawStorage<T>, usize) {
        let vec = mem::ManuallyDrop::new(self);
        // SAFETY: the ManuallyDrop wrapper suppresses the vector's
        // destructor, so ownership of the block and the live elements moves
        // out exactly once.
        let buf = unsafe { ptr::read(&vec.buf) };
        (buf, vec.len)
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: slots [0, len) hold live elements by the length invariant.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) hold live elements, and the exclusive
        // borrow of self covers them.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are live and owned; the block itself is
        // released by RawStorage's destructor afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.extend_cloned(self);
        copy
    }

    /// Reuses the existing block where the source fits.
    ///
    /// Three cases by relative size: a source no longer than `self` clone-
    /// assigns the overlapping prefix and truncates; a longer source that
    /// still fits the capacity clone-assigns the prefix and clone-constructs
    /// the rest into raw tail slots; a source beyond the capacity is cloned
    /// whole and swapped in.
    fn clone_from(&mut self, source: &Self) {
        if source.len <= self.len {
            self.as_mut_slice()[..source.len].clone_from_slice(source);
            self.truncate(source.len);
        } else if source.len <= self.capacity() {
            let (head, tail) = source.split_at(self.len);
            self.as_mut_slice().clone_from_slice(head);
            self.extend_cloned(tail);
        } else {
            let mut copy = source.clone();
            mem::swap(self, &mut copy);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        let mut vec = Self::with_capacity(slice.len());
        vec.extend_cloned(slice);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Scope guard for bulk construction into the uninitialized tail.
///
/// `put` writes elements past the published length one slot at a time;
/// `commit` advances the length over everything written. Dropping the guard
/// without committing destroys the elements built so far and leaves the
/// vector's length untouched, which is what makes `resize` and `clone_from`
/// panic-safe.
struct TailGuard<'a, T> {
    vec: &'a mut Vector<T>,
    /// Count of slots constructed past `vec.len` so far.
    built: usize,
}

impl<'a, T> TailGuard<'a, T> {
    fn new(vec: &'a mut Vector<T>) -> Self {
        Self { vec, built: 0 }
    }

    /// Writes `value` into the next unconstructed tail slot.
    ///
    /// # Safety
    ///
    /// The slot at `vec.len + built` must be below the block's capacity.
    unsafe fn put(&mut self, value: T) {
        // SAFETY: in range per the contract; the slot is raw storage because
        // it lies past the published length plus everything this guard has
        // written.
        unsafe { ptr::write(self.vec.buf.slot(self.vec.len + self.built), value) };
        self.built += 1;
    }

    /// Publishes the constructed tail by advancing the vector's length.
    fn commit(mut self) {
        self.vec.len += self.built;
        // Disarm the guard; its Drop now has nothing to do.
        self.built = 0;
    }
}

impl<T> Drop for TailGuard<'_, T> {
    fn drop(&mut self) {
        if self.built > 0 {
            // SAFETY: exactly `built` elements were constructed past the
            // published length and never published; they are unreachable
            // through the vector.
            unsafe {
                let first = self.vec.buf.slot(self.vec.len);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, self.built));
            }
        }
    }
}

/// Diverges with the standard failure behavior of the infallible entry
/// points: allocator failure aborts through `handle_alloc_error`, capacity
/// arithmetic overflow panics.
#[cold]
#[inline(never)]
fn storage_failure<T>(err: Error) -> ! {
    match err {
        Error::AllocFailed { bytes } => {
            let layout = Layout::from_size_align(bytes, std::mem::align_of::<T>())
                .unwrap_or_else(|_| Layout::new::<u8>());
            alloc::handle_alloc_error(layout)
        }
        Error::CapacityOverflow { .. } => panic!("{err}"),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn insert_index_failed(index: usize, len: usize) -> ! {
    panic!("insertion index {index} exceeds length {len}");
}

#[cold]
#[inline(never)]
#[track_caller]
fn remove_index_failed(index: usize, len: usize) -> ! {
    panic!("removal index {index} out of range for length {len}");
}
