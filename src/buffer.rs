//! Fixed-capacity append-only buffer backing the tile bins.
//!
//! A [`GrowableBuffer`] owns a contiguous slab of `capacity` elements and a
//! length counter. Appends never reallocate: once the buffer is full further
//! appends are rejected and counted as overflows. Two append paths share the
//! same overflow semantics:
//! - [`GrowableBuffer::push`] for a single writer holding `&mut self`;
//! - [`ConcurrentAppend::push`] for many writers at once. The handle is
//!   obtained through [`GrowableBuffer::concurrent`] and reserves slots with a
//!   single atomic increment per call.
//!
//! [`GrowableBuffer::reserve`] replaces the storage and discards the previous
//! contents. The binning stage calls it once per run, before population.
use log::warn;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Owned, fixed-capacity, append-only sequence.
pub struct GrowableBuffer<T> {
    data: Box<[T]>,
    len: AtomicUsize,
    overflows: AtomicUsize,
}

impl<T: Copy + Default> GrowableBuffer<T> {
    /// Allocate storage for `capacity` elements with length 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity].into_boxed_slice(),
            len: AtomicUsize::new(0),
            overflows: AtomicUsize::new(0),
        }
    }

    /// Replace the storage with a fresh buffer of `capacity` elements.
    ///
    /// Previous contents are discarded and the length drops to 0. This is the
    /// per-run reset used before a tile is populated, never a mid-run resize.
    pub fn reserve(&mut self, capacity: usize) {
        self.data = vec![T::default(); capacity].into_boxed_slice();
        *self.len.get_mut() = 0;
        *self.overflows.get_mut() = 0;
    }
}

impl<T> GrowableBuffer<T> {
    /// Append `value` from a single writer.
    ///
    /// Returns the slot index, or `None` when the buffer is full. A rejected
    /// value leaves the contents unchanged and bumps the overflow counter.
    pub fn push(&mut self, value: T) -> Option<usize> {
        let len = self.len.get_mut();
        let slot = *len;
        if slot < self.data.len() {
            self.data[slot] = value;
            *len += 1;
            Some(slot)
        } else {
            *self.overflows.get_mut() += 1;
            warn!(
                "GrowableBuffer overflow: capacity {} exhausted",
                self.data.len()
            );
            None
        }
    }

    /// Borrow the buffer for concurrent appends.
    ///
    /// The handle holds the unique borrow for its whole lifetime, so readers
    /// can only observe the buffer once every writer is done.
    pub fn concurrent(&mut self) -> ConcurrentAppend<'_, T> {
        ConcurrentAppend {
            data: self.data.as_mut_ptr(),
            capacity: self.data.len(),
            len: &self.len,
            overflows: &self.overflows,
            _marker: PhantomData,
        }
    }

    /// Drop the contents while keeping the storage.
    pub fn reset(&mut self) {
        *self.len.get_mut() = 0;
        *self.overflows.get_mut() = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Number of appends rejected since the last `reset`/`reserve`.
    pub fn overflow_count(&self) -> usize {
        self.overflows.load(Ordering::Acquire)
    }

    /// The populated prefix `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Sort the populated prefix in place.
    ///
    /// Concurrent appends land in arbitrary slot order; sorting afterwards
    /// restores a canonical order without changing the stored set.
    pub fn sort_unstable(&mut self)
    where
        T: Ord,
    {
        let len = *self.len.get_mut();
        self.data[..len].sort_unstable();
    }
}

impl<T: Copy + Default> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("overflows", &self.overflow_count())
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Lock-free append handle shared by many writers.
///
/// Each call reserves a slot with one `fetch_add` on the buffer's length. A
/// slot past the capacity is rolled back with a matching `fetch_sub`, so the
/// final length never exceeds the capacity. Which caller obtains which slot is
/// unspecified; every accepted value lands in exactly one slot.
pub struct ConcurrentAppend<'a, T> {
    data: *mut T,
    capacity: usize,
    len: &'a AtomicUsize,
    overflows: &'a AtomicUsize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: writers only touch the slot handed out by `fetch_add`, which is
// unique per successful call, and the handle owns the buffer's unique borrow.
unsafe impl<T: Send> Send for ConcurrentAppend<'_, T> {}
unsafe impl<T: Send> Sync for ConcurrentAppend<'_, T> {}

impl<T> ConcurrentAppend<'_, T> {
    /// Append `value`; safe to call from many threads at once.
    ///
    /// Returns the slot index, or `None` on overflow.
    pub fn push(&self, value: T) -> Option<usize> {
        let slot = self.len.fetch_add(1, Ordering::AcqRel);
        if slot < self.capacity {
            // SAFETY: `slot < capacity` and no other caller received `slot`.
            unsafe { self.data.add(slot).write(value) };
            Some(slot)
        } else {
            self.len.fetch_sub(1, Ordering::AcqRel);
            self.overflows.fetch_add(1, Ordering::AcqRel);
            warn!(
                "GrowableBuffer concurrent overflow: capacity {} exhausted",
                self.capacity
            );
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
